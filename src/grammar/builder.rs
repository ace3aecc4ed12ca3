use super::symboltable::SymbolTable;
use super::{Entry, FirstItem, FollowItem, Grammar, Production, Symbol};
use crate::errors::{Error, Result};
use std::collections::HashMap;

/// A builder to assemble a grammar from its productions, its parsing table,
/// and its FIRST and FOLLOW sets. The configuration is validated as a whole
/// when [`Builder::build`] is called, so that a malformed grammar fails fast
/// instead of failing at first lookup.
pub struct Builder {
    symbol_table: SymbolTable,
    productions: Vec<Production>,
    entries: Vec<(usize, FollowItem, usize)>,
    firsts: HashMap<usize, Vec<FirstItem>>,
    follows: HashMap<usize, Vec<FollowItem>>,
    start: Option<usize>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Returns a new, empty builder
    pub fn new() -> Builder {
        Builder {
            symbol_table: SymbolTable::new(),
            productions: Vec::new(),
            entries: Vec::new(),
            firsts: HashMap::new(),
            follows: HashMap::new(),
            start: None,
        }
    }

    /// Declares a terminal and returns its ID. Declaring the same terminal
    /// again returns the existing ID.
    pub fn terminal(&mut self, value: char) -> usize {
        self.symbol_table.add_terminal(value)
    }

    /// Declares a non-terminal and returns its ID. Declaring the same
    /// non-terminal again returns the existing ID.
    pub fn non_terminal(&mut self, name: &str) -> usize {
        self.symbol_table.add_non_terminal(name)
    }

    /// Adds a production for the given head and returns its ID. Production
    /// IDs are assigned in insertion order.
    pub fn production(&mut self, head: usize, body: Vec<Symbol>) -> usize {
        self.productions.push(Production { head, body });
        self.productions.len() - 1
    }

    /// Adds a parsing table entry mapping a non-terminal and a lookahead to
    /// the production with the given ID
    pub fn entry(&mut self, nt: usize, lookahead: FollowItem, production: usize) {
        self.entries.push((nt, lookahead, production));
    }

    /// Supplies the FIRST set for the given non-terminal
    pub fn first(&mut self, nt: usize, items: Vec<FirstItem>) {
        self.firsts.insert(nt, items);
    }

    /// Supplies the FOLLOW set for the given non-terminal
    pub fn follow(&mut self, nt: usize, items: Vec<FollowItem>) {
        self.follows.insert(nt, items);
    }

    /// Sets the start symbol
    pub fn start(&mut self, nt: usize) {
        self.start = Some(nt);
    }

    /// Validates the accumulated configuration and builds the grammar
    pub fn build(self) -> Result<Grammar> {
        let Builder {
            symbol_table,
            productions,
            entries,
            firsts,
            follows,
            start,
        } = self;

        let Some(start) = start else {
            return Err(Error::ExpectedNonTerminal);
        };
        require_non_terminal(&symbol_table, start)?;

        for production in &productions {
            require_non_terminal(&symbol_table, production.head)?;

            if production.body.is_empty() {
                return Err(Error::EmptyProductionBody);
            }
            if production.body.len() > 1
                && production.body.iter().any(|s| matches!(s, Symbol::Empty))
            {
                return Err(Error::EmptyNotAlone);
            }

            for symbol in &production.body {
                match symbol {
                    Symbol::Terminal(i) => match symbol_table.entry(*i) {
                        Some(Entry::Terminal(_)) => (),
                        _ => return Err(Error::InvalidSymbolId(*i)),
                    },
                    Symbol::NonTerminal(i) => match symbol_table.entry(*i) {
                        Some(Entry::NonTerminal(_)) => (),
                        _ => return Err(Error::InvalidSymbolId(*i)),
                    },
                    Symbol::Empty => (),
                }
            }
        }

        let mut nt_productions: HashMap<usize, Vec<usize>> = HashMap::new();
        for (i, production) in productions.iter().enumerate() {
            nt_productions.entry(production.head).or_default().push(i);
        }
        for i in symbol_table.non_terminal_ids() {
            if !nt_productions.contains_key(i) {
                return Err(Error::NonTerminalNoProductions(
                    symbol_table.non_terminal_value(*i),
                ));
            }
        }

        for i in firsts.keys().chain(follows.keys()) {
            require_non_terminal(&symbol_table, *i)?;
        }

        let mut g = Grammar {
            productions,
            symbol_table,
            nt_productions,
            table: HashMap::new(),
            firsts,
            follows,
            start,
        };

        // The table is deterministic if each cell holds at most one
        // production. A second production for an occupied cell means the
        // grammar is not LL(1), and the whole configuration is rejected.
        for (nt, lookahead, production) in entries {
            require_non_terminal(&g.symbol_table, nt)?;

            if production >= g.num_productions() {
                return Err(Error::InvalidTableEntry(format!(
                    "no production with ID {}",
                    production
                )));
            }
            if g.production(production).head != nt {
                return Err(Error::InvalidTableEntry(format!(
                    "production {} in the row for non-terminal '{}'",
                    g.format_production(production),
                    g.non_terminal_name(nt),
                )));
            }

            if let Some(existing) = g.table.insert((nt, lookahead), production) {
                return Err(Error::GrammarNotLL1(format!(
                    "conflict between {} and {} for non-terminal '{}' on input '{}'",
                    g.format_production(existing),
                    g.format_production(production),
                    g.non_terminal_name(nt),
                    lookahead,
                )));
            }
        }

        Ok(g)
    }
}

/// Returns an error unless the given ID names a declared non-terminal
fn require_non_terminal(symbol_table: &SymbolTable, i: usize) -> Result<()> {
    match symbol_table.entry(i) {
        Some(Entry::NonTerminal(_)) => Ok(()),
        _ => Err(Error::ExpectedNonTerminal),
    }
}
