use std::io::Write;

use wordvocab::{TokenEncoder, rayon::ParallelRayonEncoder};

use crate::{
    commands::LINE_BATCH_SIZE,
    input_output::{InputArgs, OutputArgs, read_line_batch},
    store_args::StoreArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Do not wrap each line in ``[SOS]`` ... ``[EOS]``.
    #[arg(long)]
    no_special_tokens: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(
        &self,
        store: &StoreArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = store.load_tokenizer()?;
        let encoder: ParallelRayonEncoder<u32, _> = ParallelRayonEncoder::new(&tokenizer);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        loop {
            let lines = read_line_batch(&mut reader, LINE_BATCH_SIZE)?;
            if lines.is_empty() {
                break;
            }
            let batch: Vec<&str> = lines.iter().map(String::as_str).collect();

            for tokens in encoder.encode_batch(&batch, !self.no_special_tokens) {
                writeln!(writer, "{}", format_tokens(&tokens))?;
            }
            writer.flush()?;
        }
        Ok(())
    }
}

/// Format tokens as a space-separated id line.
pub fn format_tokens(tokens: &[u32]) -> String {
    tokens
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
