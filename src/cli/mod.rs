mod handlers;
pub mod parse;
mod viewer;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::GridError;

pub fn run() -> Result<(), GridError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Life(a) => handlers::life(&a),
        parse::Command::Search(a) => handlers::search(&a),
        parse::Command::Fill(a) => handlers::fill(&a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
