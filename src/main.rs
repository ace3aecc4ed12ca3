use clap::Parser;
use ll1::cli;
use ll1::cli::args::{Commands, Options};
use ll1::sample;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();
    let grammar = sample::grammar();

    match options.command {
        Commands::Parse { input } => cli::parse::output(&grammar, &input),
        Commands::Generate { max_depth, seed } => cli::generate::output(&grammar, max_depth, seed)?,
        Commands::Table => cli::table::output(&grammar),
        Commands::Grammar => cli::grammar::output(&grammar),
    }

    Ok(())
}
