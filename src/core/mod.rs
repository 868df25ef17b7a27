pub mod decompress;
pub mod discovery;
pub mod errors;
pub mod models;
pub mod partition;
pub mod pipeline;
pub mod utils;
pub mod vocab;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::PrepError;
pub use models::{
    Codec,
    FileEntry,
    Partition,
    PartitionKind,
    PartitionSummary,
    PrepConfig,
    RunSummary,
    VocabOrder,
    WriteMode,
};
pub use pipeline::{
    run,
    ProgressCallback,
    ProgressEvent,
};
pub use vocab::Vocabulary;
