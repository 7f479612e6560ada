use std::io::{BufRead, Write};

use hybridtok::Tokenizer;

use crate::{
    LogArgs,
    common::{TokenizerMode, TokenizerModeArgs, VocabArgs},
    input_output::{InputArgs, OutputArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    /// Do not frame encoded lines with BOS and EOS.
    #[arg(long)]
    no_special_tokens: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.vocab.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        match self.tokenizer_mode.mode() {
            TokenizerMode::Encode => run_cat_encode(
                &mut reader,
                &mut writer,
                &tokenizer,
                !self.no_special_tokens,
            )?,
            TokenizerMode::Decode => run_cat_decode(&mut reader, &mut writer, &tokenizer)?,
        }

        Ok(())
    }
}

fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32>,
    add_special_tokens: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = tokenizer.try_encode_with(&line?, add_special_tokens)?;

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
        writer.flush()?;
    }
    Ok(())
}

fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = line?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()?;

        writeln!(writer, "{}", tokenizer.try_decode(&tokens)?)?;
        writer.flush()?;
    }
    Ok(())
}
