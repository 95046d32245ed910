use std::io::Write;

use wordvocab::{TokenDecoder, rayon::ParallelRayonDecoder};

use crate::{
    commands::LINE_BATCH_SIZE,
    input_output::{InputArgs, OutputArgs, read_line_batch},
    store_args::StoreArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Keep special tokens in the decoded text.
    #[arg(long)]
    keep_special_tokens: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(
        &self,
        store: &StoreArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = store.load_tokenizer()?;
        let decoder: ParallelRayonDecoder<u32, _> = ParallelRayonDecoder::new(&tokenizer);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let mut line_number = 0;
        loop {
            let lines = read_line_batch(&mut reader, LINE_BATCH_SIZE)?;
            if lines.is_empty() {
                break;
            }

            let mut batch = Vec::with_capacity(lines.len());
            for line in &lines {
                line_number += 1;
                batch.push(
                    parse_tokens(line).map_err(|e| format!("line {line_number}: {e}"))?,
                );
            }
            let batch: Vec<&[u32]> = batch.iter().map(Vec::as_slice).collect();

            for text in decoder.decode_batch(&batch, !self.keep_special_tokens) {
                writeln!(writer, "{text}")?;
            }
            writer.flush()?;
        }
        Ok(())
    }
}

/// Parse a line of whitespace-separated token ids.
pub fn parse_tokens(line: &str) -> Result<Vec<u32>, String> {
    line.split_whitespace()
        .map(|s| {
            s.parse::<u32>()
                .map_err(|e| format!("invalid token id {s:?}: {e}"))
        })
        .collect()
}
