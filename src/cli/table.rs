use super::common;
use crate::grammar::{FollowItem, Grammar};

/// Outputs the LL(1) parsing table, one row per non-terminal and one column
/// per terminal plus the end marker. An empty cell is a syntax error for the
/// parser and is left blank.
pub fn output(g: &Grammar) {
    let lookaheads: Vec<FollowItem> = g
        .terminal_ids()
        .iter()
        .map(|i| FollowItem::Character(g.terminal_value(*i)))
        .chain(std::iter::once(FollowItem::EndOfInput))
        .collect();

    let label_width = common::longest_non_terminal_name(g);

    let mut widths: Vec<usize> = vec![1; lookaheads.len()];
    let mut rows: Vec<(String, Vec<String>)> = Vec::new();

    for nt in common::non_terminals_start_first(g) {
        let mut cells = Vec::new();
        for (col, lookahead) in lookaheads.iter().enumerate() {
            let cell = match g.transition(nt, *lookahead) {
                Some(p) => g.format_production(p),
                None => String::new(),
            };
            widths[col] = widths[col].max(cell.chars().count());
            cells.push(cell);
        }
        rows.push((g.non_terminal_name(nt), cells));
    }

    print!("{:<w$}", "", w = label_width);
    for (col, lookahead) in lookaheads.iter().enumerate() {
        print!("  {:<w$}", lookahead.to_string(), w = widths[col]);
    }
    println!();

    for (name, cells) in rows {
        print!("{:<w$}", name, w = label_width);
        for (col, cell) in cells.iter().enumerate() {
            print!("  {:<w$}", cell, w = widths[col]);
        }
        println!();
    }
}
