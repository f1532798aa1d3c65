use crate::commands::{self, Commands};
use crate::error::Error;
use crate::logger::Logger;
use crate::project::Project;
use clap::Parser;
use eyre::WrapErr;

#[derive(Parser)]
#[command(
    arg_required_else_help = true,
    name = "synthfn",
    version,
    about = "CLI tool for rendering serverless Rust functions into deployment templates",
    long_about = "Reads the function handles declared in the project's Cargo.toml, assembles the deployment descriptor and renders it as a CloudFormation template."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

pub fn run() -> eyre::Result<()> {
    Logger::init();
    let cli = Cli::parse();

    // Every command operates on a project
    let project = Project::from_current_dir().wrap_err(Error::new(
        "Could not load the project",
        Some("Run the command in a project's dir with [package.metadata.synthfn] in Cargo.toml"),
    ))?;

    match cli.command {
        Some(Commands::Synth(cmd)) => commands::synth::synth(&project, &cmd),
        None => Ok(()),
    }
}
