mod builder;
mod firstfollow;
mod symboltable;

pub use builder::Builder;
pub use firstfollow::{FirstItem, FollowItem};
pub use symboltable::Entry;

use std::collections::HashMap;
use symboltable::SymbolTable;

/// The end-of-input marker, which also sits at the bottom of the parse stack
pub const END_MARKER: char = '$';

/// A context-free grammar symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    NonTerminal(usize),
    Terminal(usize),
    Empty,
}

/// A context-free grammar production
#[derive(Debug, Clone, PartialEq)]
pub struct Production {
    pub head: usize,
    pub body: Vec<Symbol>,
}

impl Production {
    /// Returns true if this is an ϵ-production
    pub fn is_e(&self) -> bool {
        matches!(self.body[..], [Symbol::Empty])
    }
}

/// An LL(1) context-free grammar, together with its predictive parsing table
/// and its FIRST and FOLLOW sets. A grammar is assembled and validated once,
/// through a [`Builder`], and is read-only afterwards.
pub struct Grammar {
    productions: Vec<Production>,
    symbol_table: SymbolTable,
    nt_productions: HashMap<usize, Vec<usize>>,
    table: HashMap<(usize, FollowItem), usize>,
    firsts: HashMap<usize, Vec<FirstItem>>,
    follows: HashMap<usize, Vec<FollowItem>>,
    start: usize,
}

impl Grammar {
    /// Returns the ID of the start symbol
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the production with the given ID
    pub fn production(&self, i: usize) -> &Production {
        &self.productions[i]
    }

    /// Returns the number of productions in the grammar
    pub fn num_productions(&self) -> usize {
        self.productions.len()
    }

    /// Returns a slice of IDs for all productions for the given non-terminal,
    /// in the order the productions were added. Panics if there is no
    /// non-terminal with the given ID in the grammar.
    pub fn productions_for_non_terminal(&self, i: usize) -> &[usize] {
        self.nt_productions.get(&i).unwrap()
    }

    /// Returns a sorted slice of the IDs of all non-terminals
    pub fn non_terminal_ids(&self) -> &[usize] {
        self.symbol_table.non_terminal_ids()
    }

    /// Returns a sorted slice of the IDs of all terminals
    pub fn terminal_ids(&self) -> &[usize] {
        self.symbol_table.terminal_ids()
    }

    /// Returns the name of the non-terminal with the given ID. Panics if
    /// there is no non-terminal with the given ID in the grammar.
    pub fn non_terminal_name(&self, i: usize) -> String {
        self.symbol_table.non_terminal_value(i)
    }

    /// Returns the char value of the terminal with the given ID. Panics if
    /// there is no terminal with the given ID in the grammar.
    pub fn terminal_value(&self, i: usize) -> char {
        self.symbol_table.terminal_value(i)
    }

    /// Returns the symbol table entry for the given ID, or None if the ID is
    /// not declared in either vocabulary
    pub fn symbol(&self, i: usize) -> Option<&Entry> {
        self.symbol_table.entry(i)
    }

    /// Looks up the parsing table entry for the given non-terminal and
    /// lookahead. An absent cell is an error condition for the parser, not a
    /// default, so the option is returned as-is.
    pub fn transition(&self, nt: usize, lookahead: FollowItem) -> Option<usize> {
        self.table.get(&(nt, lookahead)).copied()
    }

    /// Returns the supplied FIRST set for the given non-terminal
    pub fn first(&self, nt: usize) -> &[FirstItem] {
        self.firsts.get(&nt).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Returns the supplied FOLLOW set for the given non-terminal
    pub fn follow(&self, nt: usize) -> &[FollowItem] {
        self.follows.get(&nt).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Formats a single grammar symbol for display
    pub fn format_symbol(&self, symbol: &Symbol) -> String {
        match symbol {
            Symbol::NonTerminal(i) => self.non_terminal_name(*i),
            Symbol::Terminal(i) => self.terminal_value(*i).to_string(),
            Symbol::Empty => "ϵ".to_string(),
        }
    }

    /// Formats the body of the production with the given ID, e.g. "a A"
    pub fn format_production_body(&self, i: usize) -> String {
        let production = self.production(i);
        if production.is_e() {
            return "ϵ".to_string();
        }

        production
            .body
            .iter()
            .map(|s| self.format_symbol(s))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats the production with the given ID, e.g. "S → a A"
    pub fn format_production(&self, i: usize) -> String {
        format!(
            "{} → {}",
            self.non_terminal_name(self.production(i).head),
            self.format_production_body(i)
        )
    }
}
