use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyNotAlone,
    EmptyProductionBody,
    ExpectedNonTerminal,
    GrammarNotLL1(String),
    InvalidSymbolId(usize),
    InvalidTableEntry(String),
    NoFiniteDerivation(String),
    NonTerminalNoProductions(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyNotAlone => write!(f, "ϵ-productions may not contain other symbols"),
            Error::EmptyProductionBody => write!(f, "empty production body"),
            Error::ExpectedNonTerminal => write!(f, "expected non-terminal"),
            Error::GrammarNotLL1(s) => write!(f, "grammar is not LL(1): {}", s),
            Error::InvalidSymbolId(i) => write!(f, "invalid symbol ID {}", i),
            Error::InvalidTableEntry(s) => write!(f, "invalid parsing table entry: {}", s),
            Error::NoFiniteDerivation(s) => {
                write!(f, "no finite derivation for non-terminal '{}'", s)
            }
            Error::NonTerminalNoProductions(s) => {
                write!(f, "no productions found for non-terminal '{}'", s)
            }
        }
    }
}
