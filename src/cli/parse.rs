use crate::grammar::Grammar;
use crate::meaning;
use crate::parsers::predictive::Parser;

/// Outputs the execution trace and verdict for an input sentence
pub fn output(g: &Grammar, input: &str) {
    let result = Parser::new(g).parse(input);

    let width = (result.trace.len().checked_ilog10().unwrap_or(0) + 1) as usize;
    let stacks: Vec<String> = result.trace.iter().map(|s| s.stack.join(" ")).collect();
    let stack_width = stacks.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    let input_width = result
        .trace
        .iter()
        .map(|s| s.input.chars().count())
        .max()
        .unwrap_or(0);

    for (i, step) in result.trace.iter().enumerate() {
        println!(
            "{:>w$}  {:<sw$}  {:<iw$}  {}",
            i,
            stacks[i],
            step.input,
            step.action,
            w = width,
            sw = stack_width,
            iw = input_width,
        );
    }

    println!();
    println!(
        "{}",
        if result.accepted {
            "Sentence accepted"
        } else {
            "Sentence rejected"
        }
    );
    println!("Iterations: {}", result.iterations);
    println!("Meaning: {}", meaning::describe(input));
}
