mod stack;
mod trace;

pub use trace::{Action, ParseResult, TraceStep};

use super::reader::Reader;
use super::InputSymbol;
use crate::grammar::{Entry, FollowItem, Grammar, Symbol, END_MARKER};
use stack::{Stack, StackValue};

/// A top-down, table-driven predictive parser for LL(1) context-free
/// grammars. The parser borrows the grammar read-only; each call to
/// [`Parser::parse`] runs on a fresh configuration, so no state survives
/// between calls and a parser may be shared freely across threads.
pub struct Parser<'p> {
    grammar: &'p Grammar,
}

/// The per-parse state: the stack, the input reader, the iteration counter,
/// and the trace being accumulated. One configuration is created inside each
/// call to parse and discarded when the verdict is reached.
struct Configuration<'c> {
    grammar: &'c Grammar,
    stack: Stack,
    reader: Reader,
    iterations: usize,
    trace: Vec<TraceStep>,
}

impl<'p> Parser<'p> {
    /// Creates a new parser for an LL(1) grammar
    pub fn new(grammar: &Grammar) -> Parser<'_> {
        Parser { grammar }
    }

    /// Parses an input string and returns the verdict together with the full
    /// execution trace. A failed parse is a result, not an error: the first
    /// wrong decision in a predictive parse cannot be recovered without
    /// backtracking, so the parse stops at it and reports it in the final
    /// trace entry.
    pub fn parse(&self, input: &str) -> ParseResult {
        // Algorithm adapted from Aho et al (2007) p.227

        let mut config = Configuration::new(self.grammar, input);
        config.record(Action::Initial, String::new(), false);

        while !config.stack.is_empty() {
            config.iterations += 1;
            let top = config.stack.peek();
            let lookahead = config.reader.lookahead();

            match top {
                // The end marker at the top of the stack matches only the end
                // of the input, which is the single accepting state
                StackValue::EndMarker => {
                    if lookahead == InputSymbol::EndOfInput {
                        config.record(Action::Accept, END_MARKER.to_string(), true);
                        return config.finish(true);
                    }

                    let expected = END_MARKER.to_string();
                    config.record(
                        Action::Mismatch {
                            expected: expected.clone(),
                            found: lookahead.to_string(),
                        },
                        expected,
                        false,
                    );
                    return config.finish(false);
                }
                StackValue::Symbol(i) => match self.grammar.symbol(i) {
                    Some(Entry::Terminal(t)) => {
                        let t = *t;
                        if lookahead == InputSymbol::Character(t) {
                            config.match_terminal(t);
                        } else {
                            config.record(
                                Action::Mismatch {
                                    expected: t.to_string(),
                                    found: lookahead.to_string(),
                                },
                                t.to_string(),
                                false,
                            );
                            return config.finish(false);
                        }
                    }
                    Some(Entry::NonTerminal(name)) => {
                        let name = name.clone();
                        match self.grammar.transition(i, FollowItem::from(lookahead)) {
                            Some(p) => {
                                config.expand(name, p);
                            }
                            None => {
                                config.record(
                                    Action::NoTableEntry {
                                        non_terminal: name.clone(),
                                        input: lookahead.to_string(),
                                    },
                                    name,
                                    false,
                                );
                                return config.finish(false);
                            }
                        }
                    }
                    // A stack symbol outside both vocabularies means the
                    // grammar table is malformed, not the input
                    None => {
                        let rendered = i.to_string();
                        config.record(Action::InvalidSymbol(rendered.clone()), rendered, false);
                        return config.finish(false);
                    }
                },
            }
        }

        // Only reachable if the end marker was popped, which the loop above
        // never does
        config.finish(false)
    }
}

impl<'c> Configuration<'c> {
    /// Creates a fresh configuration for one parse: the stack holds the end
    /// marker and the start symbol, and the reader is at the first input
    /// symbol
    fn new(grammar: &'c Grammar, input: &str) -> Configuration<'c> {
        let mut stack = Stack::new();
        stack.push(StackValue::EndMarker);
        stack.push(StackValue::Symbol(grammar.start()));

        Configuration {
            grammar,
            stack,
            reader: Reader::new(input),
            iterations: 0,
            trace: Vec::new(),
        }
    }

    /// Pops a matched terminal, consumes one input symbol, and records the
    /// step
    fn match_terminal(&mut self, t: char) {
        self.stack.pop();
        self.reader.next();
        self.record(Action::Match(t.to_string()), t.to_string(), true);
    }

    /// Pops the non-terminal at the top of the stack, pushes the body of the
    /// chosen production in reverse order (so that the leftmost symbol comes
    /// off the stack first), and records the step. An ϵ-production pushes
    /// nothing.
    fn expand(&mut self, name: String, production: usize) {
        self.stack.pop();
        for symbol in self.grammar.production(production).body.iter().rev() {
            match symbol {
                Symbol::NonTerminal(i) | Symbol::Terminal(i) => {
                    self.stack.push(StackValue::Symbol(*i));
                }
                Symbol::Empty => (),
            }
        }

        let body = self.grammar.format_production_body(production);
        self.record(Action::Expand { head: name.clone(), body }, name, true);
    }

    /// Appends a snapshot of the current configuration to the trace
    fn record(&mut self, action: Action, symbol: String, matched: bool) {
        self.trace.push(TraceStep {
            stack: self.snapshot(),
            input: self.reader.remaining(),
            action,
            symbol,
            matched,
        });
    }

    /// Renders the current stack, bottom first
    fn snapshot(&self) -> Vec<String> {
        self.stack.values().iter().map(|v| self.render(*v)).collect()
    }

    fn render(&self, value: StackValue) -> String {
        match value {
            StackValue::EndMarker => END_MARKER.to_string(),
            StackValue::Symbol(i) => match self.grammar.symbol(i) {
                Some(Entry::Terminal(c)) => c.to_string(),
                Some(Entry::NonTerminal(name)) => name.clone(),
                None => i.to_string(),
            },
        }
    }

    /// Consumes the configuration and produces the parse result
    fn finish(self, accepted: bool) -> ParseResult {
        ParseResult {
            accepted,
            iterations: self.iterations,
            trace: self.trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grammar::{Builder, FirstItem};
    use crate::sample;

    #[test]
    fn test_parse_accept() {
        let g = sample::grammar();
        let result = Parser::new(&g).parse("a");

        assert!(result.accepted);
        assert_eq!(result.iterations, 4);
        assert_eq!(result.trace.len(), 5);

        let step = &result.trace[0];
        assert_eq!(step.stack, vec!["$", "S"]);
        assert_eq!(step.input, "a$");
        assert_eq!(step.action, Action::Initial);
        assert_eq!(step.symbol, "");
        assert!(!step.matched);

        let step = &result.trace[1];
        assert_eq!(step.stack, vec!["$", "A", "a"]);
        assert_eq!(step.input, "a$");
        assert_eq!(
            step.action,
            Action::Expand {
                head: "S".to_string(),
                body: "a A".to_string()
            }
        );
        assert!(step.matched);

        let step = &result.trace[2];
        assert_eq!(step.stack, vec!["$", "A"]);
        assert_eq!(step.input, "$");
        assert_eq!(step.action, Action::Match("a".to_string()));
        assert!(step.matched);

        let step = &result.trace[3];
        assert_eq!(step.stack, vec!["$"]);
        assert_eq!(step.input, "$");
        assert_eq!(
            step.action,
            Action::Expand {
                head: "A".to_string(),
                body: "ϵ".to_string()
            }
        );
        assert!(step.matched);

        let step = &result.trace[4];
        assert_eq!(step.stack, vec!["$"]);
        assert_eq!(step.input, "$");
        assert_eq!(step.action, Action::Accept);
        assert_eq!(step.symbol, "$");
        assert!(step.matched);
    }

    #[test]
    fn test_parse_accept_recursive() {
        let g = sample::grammar();

        // S ⇒ bB ⇒ bcC ⇒ bcaS ⇒ bcaaA ⇒ bcaa
        let result = Parser::new(&g).parse("bcaa");
        assert!(result.accepted);
        assert_eq!(result.iterations, 10);
        assert_eq!(result.trace.len(), 11);
        assert_eq!(result.trace.last().unwrap().action, Action::Accept);

        let result = Parser::new(&g).parse("bdbcaa");
        assert!(result.accepted);
    }

    #[test]
    fn test_parse_no_table_entry() {
        let g = sample::grammar();
        let result = Parser::new(&g).parse("c");

        assert!(!result.accepted);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.trace.len(), 2);

        let step = &result.trace[1];
        assert_eq!(step.stack, vec!["$", "S"]);
        assert_eq!(step.input, "c$");
        assert_eq!(
            step.action,
            Action::NoTableEntry {
                non_terminal: "S".to_string(),
                input: "c".to_string()
            }
        );
        assert_eq!(step.symbol, "S");
        assert!(!step.matched);
    }

    #[test]
    fn test_parse_no_table_entry_mid_parse() {
        let g = sample::grammar();
        let result = Parser::new(&g).parse("ab");

        assert!(!result.accepted);
        assert_eq!(result.iterations, 3);
        assert_eq!(result.trace.len(), 4);
        assert_eq!(
            result.trace.last().unwrap().action,
            Action::NoTableEntry {
                non_terminal: "A".to_string(),
                input: "b".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let g = sample::grammar();
        let result = Parser::new(&g).parse("");

        assert!(!result.accepted);
        assert_eq!(
            result.trace.last().unwrap().action,
            Action::NoTableEntry {
                non_terminal: "S".to_string(),
                input: "$".to_string()
            }
        );
    }

    #[test]
    fn test_parse_terminal_mismatch() {
        // S → a b, so any input diverging after the 'a' fails on a terminal
        let mut b = Builder::new();
        let s = b.non_terminal("S");
        let a = b.terminal('a');
        let t = b.terminal('b');
        let p = b.production(s, vec![Symbol::Terminal(a), Symbol::Terminal(t)]);
        b.entry(s, FollowItem::Character('a'), p);
        b.start(s);
        let g = b.build().unwrap();

        let result = Parser::new(&g).parse("ac");
        assert!(!result.accepted);
        assert_eq!(result.iterations, 3);
        assert_eq!(
            result.trace.last().unwrap().action,
            Action::Mismatch {
                expected: "b".to_string(),
                found: "c".to_string()
            }
        );
    }

    #[test]
    fn test_parse_end_marker_mismatch() {
        // A table that chooses A → ϵ on lookahead 'b' leaves the end marker
        // on top of the stack against unconsumed input
        let mut b = Builder::new();
        let s = b.non_terminal("S");
        let nt_a = b.non_terminal("A");
        let a = b.terminal('a');
        let t = b.terminal('b');
        let p0 = b.production(s, vec![Symbol::Terminal(a), Symbol::NonTerminal(nt_a)]);
        let p1 = b.production(nt_a, vec![Symbol::Empty]);
        b.entry(s, FollowItem::Character('a'), p0);
        b.entry(nt_a, FollowItem::EndOfInput, p1);
        b.entry(nt_a, FollowItem::Character('b'), p1);
        b.first(s, vec![FirstItem::Character('a')]);
        b.start(s);
        let g = b.build().unwrap();

        let result = Parser::new(&g).parse("ab");
        assert!(!result.accepted);
        assert_eq!(result.iterations, 4);
        assert_eq!(
            result.trace.last().unwrap().action,
            Action::Mismatch {
                expected: "$".to_string(),
                found: "b".to_string()
            }
        );
        assert_eq!(result.trace.last().unwrap().stack, vec!["$"]);

        let result = Parser::new(&g).parse("a");
        assert!(result.accepted);
    }

    #[test]
    fn test_parse_idempotent() {
        let g = sample::grammar();
        let parser = Parser::new(&g);

        for input in ["a", "bcaa", "c", "ab", ""] {
            assert_eq!(parser.parse(input), parser.parse(input));
        }
    }

    #[test]
    fn test_error_is_final_step() {
        let g = sample::grammar();
        let parser = Parser::new(&g);

        for input in ["c", "ab", "bda", "zzz"] {
            let result = parser.parse(input);
            assert!(!result.accepted);

            let (last, rest) = result.trace.split_last().unwrap();
            assert!(last.action.is_error());
            assert!(!last.matched);
            assert!(rest.iter().all(|step| !step.action.is_error()));
        }
    }
}
