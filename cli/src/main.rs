mod cli;
mod commands;
mod error;
mod logger;
mod project;

use crate::error::Error;

fn main() {
    if let Err(report) = cli::run() {
        eprintln!(
            "\n{}\n{error}",
            console::style("Error").red().bold(),
            error = Error::from(report)
        );

        std::process::exit(1)
    }
}
