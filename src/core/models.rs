use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::PrepError;

pub const DEFAULT_SPLIT_RATIO: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    #[default]
    Xz,
    Zstd,
}

impl Codec {
    pub fn suffix(&self) -> &'static str {
        match self {
            Codec::Xz => ".xz",
            Codec::Zstd => ".zst",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Codec::Xz => "xz",
            Codec::Zstd => "zstd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    #[default]
    Repeat, // every output file receives the whole partition
    Chunked, // output i receives the i-th contiguous slice
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VocabOrder {
    #[default]
    Sorted,
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String, // File name inside the input directory
    pub path: PathBuf, // input_dir joined with name
}

impl FileEntry {
    pub fn new(dir: &Path, name: String) -> Self {
        let path = dir.join(&name);
        FileEntry { name, path }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionKind {
    Train,
    Val,
}

impl PartitionKind {
    pub fn label(&self) -> &'static str {
        match self {
            PartitionKind::Train => "train",
            PartitionKind::Val => "val",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Partition {
    pub kind: PartitionKind,
    pub files: Vec<FileEntry>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    pub input_dir: PathBuf,
    pub train_template: String,
    pub val_template: String,
    pub vocab_path: PathBuf,
    pub split_ratio: f64,
    pub output_count: Option<usize>,
    pub write_mode: WriteMode,
    pub vocab_order: VocabOrder,
    pub codec: Codec,
}

impl Default for PrepConfig {
    fn default() -> Self {
        PrepConfig {
            input_dir: PathBuf::from("openwebtext"),
            train_template: "output/output_train.txt".to_string(),
            val_template: "output/output_val.txt".to_string(),
            vocab_path: PathBuf::from("vocab.txt"),
            split_ratio: DEFAULT_SPLIT_RATIO,
            output_count: None,
            write_mode: WriteMode::default(),
            vocab_order: VocabOrder::default(),
            codec: Codec::default(),
        }
    }
}

impl PrepConfig {
    // Checks the ratio and returns the resolved output count
    pub fn validate(&self) -> Result<usize, PrepError> {
        if !(0.0..=1.0).contains(&self.split_ratio) {
            return Err(PrepError::InvalidConfig(format!(
                "split ratio must be within [0, 1], got {}",
                self.split_ratio
            )));
        }

        match self.output_count {
            Some(0) => {
                Err(PrepError::InvalidConfig("output count must be at least 1".to_string()))
            }
            Some(count) => Ok(count),
            None => Err(PrepError::InvalidConfig("output count was never set".to_string())),
        }
    }

    pub fn template_for(&self, kind: PartitionKind) -> &str {
        match kind {
            PartitionKind::Train => &self.train_template,
            PartitionKind::Val => &self.val_template,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PartitionSummary {
    pub file_count: usize,
    pub outputs: Vec<PathBuf>,
    pub bytes_written: u64,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub total_files: usize,
    pub train: PartitionSummary,
    pub val: PartitionSummary,
    pub vocab_size: usize,
    pub vocab_path: PathBuf,
}
