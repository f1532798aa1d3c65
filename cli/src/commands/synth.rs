use crate::project::Project;
use clap::{ArgAction, Args};
use eyre::WrapErr;
use synthfn_props::{FunctionProps, Template};

#[derive(Args)]
pub struct SynthCommand {
    /// Write the template to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long, action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Assemble the descriptor from the project's handles and render it
pub fn synth(project: &Project, cmd: &SynthCommand) -> eyre::Result<()> {
    let stack = project.stack()?;
    let secret = project.secret()?;
    let queue = project.dead_letter_queue()?;

    let props = FunctionProps::secret_handler(&stack, &secret, &queue);

    let mut template = Template::new(&stack);
    template.add_function(&project.name()?, &props);

    log::debug!("Rendered template for stack {}", stack.name);

    let rendered = if cmd.pretty {
        template.to_string_pretty()?
    } else {
        template.to_string()
    };

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .wrap_err(format!("Failed to write the template to \"{path}\""))?;

            println!(
                "{} {path}",
                console::style("   Rendered").green().bold()
            );
        }

        None => println!("{rendered}"),
    }

    Ok(())
}
