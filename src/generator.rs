use crate::errors::{Error, Result};
use crate::grammar::{Grammar, Symbol};
use rand::Rng;
use std::collections::HashMap;

/// A random sentence generator for a context-free grammar. Expansion is
/// depth-bounded: within the bound, productions are chosen uniformly at
/// random; past the bound, a precomputed shortest-derivation production is
/// used for every non-terminal, so generation always terminates and every
/// generated sentence is derivable from the start symbol.
pub struct Generator<'g> {
    grammar: &'g Grammar,
    shortest: HashMap<usize, usize>,
}

impl<'g> Generator<'g> {
    /// Creates a new generator for a grammar. Returns an error if some
    /// non-terminal cannot derive any finite terminal string, since no depth
    /// bound could make its expansion terminate.
    pub fn new(grammar: &Grammar) -> Result<Generator<'_>> {
        Ok(Generator {
            grammar,
            shortest: shortest_productions(grammar)?,
        })
    }

    /// Generates a random sentence over the grammar's terminals. The sentence
    /// is always derivable from the start symbol, for any max_depth including
    /// zero. Randomness comes from the caller's source, so a seeded source
    /// replays the same sentence.
    pub fn generate<R: Rng>(&self, rng: &mut R, max_depth: usize) -> String {
        let mut sentence = String::new();
        self.expand(self.grammar.start(), 0, max_depth, rng, &mut sentence);
        sentence
    }

    /// Expands a single non-terminal, appending the derived terminals to the
    /// sentence
    fn expand<R: Rng>(
        &self,
        nt: usize,
        depth: usize,
        max_depth: usize,
        rng: &mut R,
        sentence: &mut String,
    ) {
        let production = if depth > max_depth {
            self.shortest[&nt]
        } else {
            let choices = self.grammar.productions_for_non_terminal(nt);
            choices[rng.gen_range(0..choices.len())]
        };

        for symbol in &self.grammar.production(production).body {
            match symbol {
                Symbol::Terminal(t) => sentence.push(self.grammar.terminal_value(*t)),
                Symbol::NonTerminal(n) => self.expand(*n, depth + 1, max_depth, rng, sentence),
                Symbol::Empty => (),
            }
        }
    }
}

/// Computes, for every non-terminal, the production that yields its shortest
/// terminal string. Lengths start unknown and productions are re-examined
/// until no length improves, so mutually recursive non-terminals settle on
/// their cheapest grounded alternatives. A production is only ever replaced
/// by a strictly shorter one, which keeps the chosen productions free of
/// cycles among themselves.
fn shortest_productions(grammar: &Grammar) -> Result<HashMap<usize, usize>> {
    let mut lengths: HashMap<usize, usize> = HashMap::new();
    let mut chosen: HashMap<usize, usize> = HashMap::new();

    loop {
        let mut changed = false;

        for id in 0..grammar.num_productions() {
            let production = grammar.production(id);

            let mut length = Some(0usize);
            for symbol in &production.body {
                length = match symbol {
                    Symbol::Terminal(_) => length.map(|n| n + 1),
                    Symbol::Empty => length,
                    Symbol::NonTerminal(n) => match (length, lengths.get(n)) {
                        (Some(sum), Some(l)) => Some(sum + l),
                        _ => None,
                    },
                };
            }

            let Some(length) = length else {
                continue;
            };

            if lengths.get(&production.head).map_or(true, |best| length < *best) {
                lengths.insert(production.head, length);
                chosen.insert(production.head, id);
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    for i in grammar.non_terminal_ids() {
        if !chosen.contains_key(i) {
            return Err(Error::NoFiniteDerivation(grammar.non_terminal_name(*i)));
        }
    }

    Ok(chosen)
}
