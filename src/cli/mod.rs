pub mod progress;

use std::{
    io::{
        BufRead,
        Write,
    },
    path::PathBuf,
};

use clap::Parser;

use crate::{
    core::{
        Codec,
        PrepConfig,
        PrepError,
        VocabOrder,
        WriteMode,
    },
    persistence::load_config,
};

pub const SPLIT_PROMPT: &str = "How many files would you like to split this into?";

/// Split a directory of compressed text archives into train/val dumps and a
/// character vocabulary.
#[derive(Parser, Debug)]
#[command(name = "corpusprep", version)]
pub struct Args {
    /// Directory holding the compressed archives
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Train output path; `{}` is replaced by the output index
    #[arg(long)]
    pub train_template: Option<String>,

    /// Validation output path; `{}` is replaced by the output index
    #[arg(long)]
    pub val_template: Option<String>,

    #[arg(long = "vocab")]
    pub vocab_path: Option<PathBuf>,

    /// Fraction of archives assigned to train
    #[arg(long)]
    pub split_ratio: Option<f64>,

    /// Output files per partition. Asked for interactively when unset
    #[arg(short = 'n', long)]
    pub output_count: Option<usize>,

    #[arg(long, value_enum)]
    pub write_mode: Option<WriteMode>,

    #[arg(long, value_enum)]
    pub vocab_order: Option<VocabOrder>,

    #[arg(long, value_enum)]
    pub codec: Option<Codec>,

    /// JSON config applied before command line flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the resolved config as JSON before running
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Log per-file progress instead of drawing progress bars
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<PrepConfig, PrepError> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => PrepConfig::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut config: PrepConfig) -> PrepConfig {
        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(template) = &self.train_template {
            config.train_template = template.clone();
        }
        if let Some(template) = &self.val_template {
            config.val_template = template.clone();
        }
        if let Some(path) = &self.vocab_path {
            config.vocab_path = path.clone();
        }
        if let Some(ratio) = self.split_ratio {
            config.split_ratio = ratio;
        }
        if let Some(count) = self.output_count {
            config.output_count = Some(count);
        }
        if let Some(mode) = self.write_mode {
            config.write_mode = mode;
        }
        if let Some(order) = self.vocab_order {
            config.vocab_order = order;
        }
        if let Some(codec) = self.codec {
            config.codec = codec;
        }
        config
    }
}

pub fn prompt_output_count<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<usize, PrepError> {
    write!(output, "{}", SPLIT_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_output_count(&line)
}

pub fn parse_output_count(raw: &str) -> Result<usize, PrepError> {
    let trimmed = raw.trim();
    match trimmed.parse::<usize>() {
        Ok(0) => Err(PrepError::InputFormat("need at least one output file".to_string())),
        Ok(count) => Ok(count),
        Err(e) => Err(PrepError::InputFormat(format!(
            "{:?} is not a positive integer ({})",
            trimmed, e
        ))),
    }
}
