use wordvocab::VocabSource;

use crate::store_args::StoreArgs;

/// Args for the info command.
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Number of entries to list.
    #[arg(long, default_value = "20")]
    head: usize,
}

impl InfoArgs {
    /// Run the info command.
    pub fn run(
        &self,
        store: &StoreArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        println!("store: {}", store.open_store()?.path().display());

        let tokenizer = store.load_tokenizer()?;
        println!("vocab size: {}", tokenizer.vocab_size());
        for (token, word) in tokenizer.vocab().iter().take(self.head) {
            println!("  {token:>6} {word}");
        }

        Ok(())
    }
}
