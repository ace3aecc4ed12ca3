pub mod predictive;
mod reader;

use crate::grammar::{FollowItem, END_MARKER};
use std::fmt;

#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
/// An input symbol, including the end-of-input marker
pub enum InputSymbol {
    Character(char),
    EndOfInput,
}

impl From<InputSymbol> for FollowItem {
    /// Converts a lookahead symbol into a parsing table column
    fn from(s: InputSymbol) -> FollowItem {
        match s {
            InputSymbol::Character(c) => FollowItem::Character(c),
            InputSymbol::EndOfInput => FollowItem::EndOfInput,
        }
    }
}

impl fmt::Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputSymbol::Character(c) => write!(f, "{}", c),
            InputSymbol::EndOfInput => write!(f, "{}", END_MARKER),
        }
    }
}
