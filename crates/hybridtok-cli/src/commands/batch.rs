use std::io::{BufRead, Write};

use hybridtok::{BatchOptions, TruncationPolicy};

use crate::{
    LogArgs,
    common::VocabArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the batch command.
#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Row length; defaults to the longest encoded line.
    #[arg(long)]
    max_length: Option<usize>,

    /// Emit unpadded rows, with no attention mask.
    #[arg(long)]
    no_padding: bool,

    /// Where over-long rows are cut: "tokens" or "fragments".
    #[arg(long, default_value_t = TruncationPolicy::Tokens)]
    truncation: TruncationPolicy,

    /// Do not frame rows with BOS and EOS.
    #[arg(long)]
    no_special_tokens: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl BatchArgs {
    /// Run the batch command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.vocab.load_tokenizer()?;

        let reader = self.input.open_reader()?;
        let texts = reader.lines().collect::<Result<Vec<String>, _>>()?;
        log::info!("Encoding {} lines", texts.len());

        let options = BatchOptions::default()
            .with_max_length(self.max_length)
            .with_padding(!self.no_padding)
            .with_truncation(self.truncation)
            .with_add_special_tokens(!self.no_special_tokens);
        let batch = tokenizer.try_encode_batch(&texts, &options)?;

        let mut writer = self.output.open_writer()?;
        serde_json::to_writer(&mut writer, &batch)?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }
}
