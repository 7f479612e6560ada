use hybridtok::{Tokenizer, TokenizerOptions};

/// Tokenizer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Text to tokens.
    Encode,

    /// Tokens to text.
    Decode,
}

/// Mode selection for the tokenizer.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to tokens.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from tokens to text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    ///
    /// The arg group requires exactly one of the flags.
    pub fn mode(&self) -> TokenizerMode {
        if self.decode {
            TokenizerMode::Decode
        } else {
            TokenizerMode::Encode
        }
    }
}

/// Vocabulary selection arg group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Path to a JSON vocabulary written by `build`.
    #[arg(long)]
    vocab: String,

    /// Encode and decode batches in parallel.
    #[arg(long)]
    parallel: bool,
}

impl VocabArgs {
    /// Load the tokenizer.
    pub fn load_tokenizer(&self) -> Result<Tokenizer<u32>, Box<dyn std::error::Error>> {
        let options = TokenizerOptions::default().with_parallel(self.parallel);
        Ok(Tokenizer::load_path(&self.vocab, &options)?)
    }
}
