use crate::commands::{batch::BatchArgs, build::BuildArgs, cat::CatArgs, inspect::InspectArgs};

pub mod batch;
pub mod build;
pub mod cat;
pub mod inspect;

/// Subcommands for hybridtok
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from text files.
    Build(BuildArgs),

    /// Act as a streaming tokenizer.
    Cat(CatArgs),

    /// Encode input lines as one padded batch.
    Batch(BatchArgs),

    /// Describe a vocabulary.
    Inspect(InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Build(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
            Commands::Batch(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
