pub mod synth;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Render the project's function template as CloudFormation JSON
    Synth(synth::SynthCommand),
}
