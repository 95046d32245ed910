use std::io::BufRead;

use wordvocab::training::{VocabTrainer, VocabTrainerOptions};

use crate::{input_output::open_path_reader, store_args::StoreArgs};

/// Args for the learn command.
#[derive(clap::Args, Debug)]
pub struct LearnArgs {
    /// Input text files; stdin when none are given.
    files: Vec<String>,

    /// Max vocab size, special tokens included.
    #[arg(long, default_value = None)]
    max_vocab_size: Option<usize>,
}

impl LearnArgs {
    /// Run the learn command.
    pub fn run(
        &self,
        store: &StoreArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let options = VocabTrainerOptions::default().with_max_vocab_size(self.max_vocab_size);
        let mut trainer: VocabTrainer<String, u64> = options.init();

        let stdin = ["-".to_string()];
        let files = if self.files.is_empty() {
            &stdin[..]
        } else {
            &self.files[..]
        };

        log::info!("Reading corpus:");
        for (idx, path) in files.iter().enumerate() {
            log::info!("{idx}: {path}");
            read_text(&mut trainer, open_path_reader(path)?)?;
        }

        log::info!("Learning vocabulary from {} distinct words", trainer.counter.len());
        let vocab = trainer.train()?;

        let mut tokenizer = store.open_tokenizer()?;
        tokenizer.set_vocab(vocab);
        tokenizer.try_save_vocab()?;

        log::info!("Vocabulary Size: {}", tokenizer.vocab_size());
        Ok(())
    }
}

fn read_text(
    trainer: &mut VocabTrainer<String, u64>,
    reader: Box<dyn BufRead>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        trainer.update_from_text(line?);
    }
    Ok(())
}
