use std::io::Write;

use hybridtok::SpecialToken;

use crate::{LogArgs, common::VocabArgs, input_output::OutputArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Number of learned words to list.
    #[arg(long, default_value_t = 20)]
    top: usize,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.vocab.load_tokenizer()?;
        let vocab = tokenizer.vocab()?;

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "max_word_vocab: {}", vocab.max_word_vocab())?;
        writeln!(
            writer,
            "words: {} ({} learned, {} special)",
            vocab.word_count(),
            vocab.learned_word_count(),
            SpecialToken::COUNT
        )?;
        writeln!(writer, "chars: {}", vocab.char_count())?;
        writeln!(writer, "char_offset: {}", vocab.char_offset())?;
        writeln!(writer, "vocab_size: {}", vocab.vocab_size())?;

        writeln!(writer, "specials:")?;
        for (text, token) in vocab.specials().iter() {
            writeln!(writer, "  {token}\t{text}")?;
        }

        writeln!(writer, "top words:")?;
        for (token, word) in vocab
            .words()
            .iter()
            .skip(SpecialToken::COUNT)
            .take(self.top)
        {
            writeln!(writer, "  {token}\t{word}")?;
        }

        let chars: String = vocab.chars().chars().iter().collect();
        writeln!(writer, "chars: {chars:?}")?;
        writer.flush()?;

        Ok(())
    }
}
