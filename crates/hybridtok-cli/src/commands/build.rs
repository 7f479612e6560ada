use std::{
    fs::File,
    io::{BufRead, BufReader, Read, Write},
};

use hybridtok::{
    HybridVocab,
    training::{DEFAULT_MAX_WORD_VOCAB, HybridVocabBuilder, HybridVocabBuilderOptions},
    vocab::io::write_vocab,
};

use crate::{LogArgs, input_output::OutputArgs};

/// Args for the build command.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Input text files.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Max learned word vocab size.
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_VOCAB)]
    max_word_vocab: usize,

    /// Treat each line as a document, rather than each file.
    #[arg(long)]
    per_line: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl BuildArgs {
    /// Run the build command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut builder = HybridVocabBuilderOptions::new(self.max_word_vocab).init::<u64>();

        log::info!("Reading files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            self.read_text_file(&mut builder, path)?;
        }
        log::info!("Documents: {}", builder.counter.samples());

        log::info!("Building vocabulary...");
        let vocab: HybridVocab<u32> = builder.build()?;

        if let Some(path) = &self.output.output {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_vocab(&vocab, &mut writer)?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }

    fn read_text_file(
        &self,
        builder: &mut HybridVocabBuilder,
        path: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = BufReader::new(File::open(path)?);
        if self.per_line {
            for line in reader.lines() {
                builder.update_from_text(line?);
            }
        } else {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            builder.update_from_text(text);
        }
        Ok(())
    }
}
