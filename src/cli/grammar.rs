use super::common;
use crate::grammar::Grammar;

/// Outputs the productions and the FIRST and FOLLOW sets
pub fn output(g: &Grammar) {
    let width = common::longest_non_terminal_name(g);
    let nts = common::non_terminals_start_first(g);

    for nt in &nts {
        print!("{:<n$} → ", g.non_terminal_name(*nt), n = width);
        let mut written = width + 3;

        for (i, p) in g.productions_for_non_terminal(*nt).iter().enumerate() {
            let body = g.format_production_body(*p);

            if i != 0 && written + body.len() + 3 > common::LINE_LENGTH {
                print!("\n{:<n$}", "", n = width);
                written = width;
            }

            if i != 0 {
                print!(" | ");
                written += 3;
            }

            print!("{}", body);
            written += body.len();
        }

        println!();
    }

    println!();
    for nt in &nts {
        let items: Vec<String> = g.first(*nt).iter().map(|i| i.to_string()).collect();
        println!(
            "FIRST({})  = {{ {} }}",
            g.non_terminal_name(*nt),
            items.join(", ")
        );
    }

    println!();
    for nt in &nts {
        let items: Vec<String> = g.follow(*nt).iter().map(|i| i.to_string()).collect();
        println!(
            "FOLLOW({}) = {{ {} }}",
            g.non_terminal_name(*nt),
            items.join(", ")
        );
    }
}
