use crate::grammar::Grammar;

pub const LINE_LENGTH: usize = 72;

/// Returns the length of the longest non-terminal name, for column alignment
pub fn longest_non_terminal_name(g: &Grammar) -> usize {
    g.non_terminal_ids()
        .iter()
        .map(|i| g.non_terminal_name(*i).chars().count())
        .max()
        .unwrap_or(0)
}

/// Returns the IDs of all non-terminals, with the start symbol first
pub fn non_terminals_start_first(g: &Grammar) -> Vec<usize> {
    let mut nts: Vec<usize> = vec![g.start()];
    let mut others = Vec::<usize>::from(g.non_terminal_ids());
    others.retain(|s| *s != g.start());
    nts.append(&mut others);

    nts
}
