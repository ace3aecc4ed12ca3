pub mod cli;
pub mod errors;
pub mod generator;
pub mod grammar;
pub mod meaning;
pub mod parsers;
pub mod sample;
