use crate::{
    commands::{decode::DecodeArgs, encode::EncodeArgs, info::InfoArgs, learn::LearnArgs},
    store_args::StoreArgs,
};

pub mod decode;
pub mod encode;
pub mod info;
pub mod learn;

/// Lines per encode/decode batch.
pub const LINE_BATCH_SIZE: usize = 1024;

/// Subcommands for wordvocab.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Learn a vocabulary from text, and save it.
    Learn(LearnArgs),

    /// Encode text lines into token id lines.
    Encode(EncodeArgs),

    /// Decode token id lines into text lines.
    Decode(DecodeArgs),

    /// Describe the saved vocabulary.
    Info(InfoArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(
        &self,
        store: &StoreArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Learn(cmd) => cmd.run(store),
            Commands::Encode(cmd) => cmd.run(store),
            Commands::Decode(cmd) => cmd.run(store),
            Commands::Info(cmd) => cmd.run(store),
        }
    }
}
