use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Command line options for the ll1 tool
pub struct Options {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
/// Commands for the ll1 tool
pub enum Commands {
    /// Parse a sentence and show the execution trace
    Parse { input: String },
    /// Generate a random sentence from the grammar
    Generate {
        #[arg(long, default_value_t = 10)]
        max_depth: usize,

        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the LL(1) parsing table
    Table,
    /// Show the productions and the FIRST and FOLLOW sets
    Grammar,
}
