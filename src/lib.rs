pub mod cli;
pub mod core;
pub mod persistence;

pub use crate::core::{
    run,
    Codec,
    PrepConfig,
    PrepError,
    ProgressCallback,
    ProgressEvent,
    RunSummary,
    VocabOrder,
    Vocabulary,
    WriteMode,
};
