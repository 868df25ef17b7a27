use std::{
    collections::HashSet,
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
};

use super::{
    models::VocabOrder,
    utils::ensure_parent_dir,
    PrepError,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    chars: HashSet<char>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(mut self, text: &str) -> Self {
        self.chars.extend(text.chars());
        self
    }

    pub fn merge(mut self, other: Vocabulary) -> Self {
        self.chars.extend(other.chars);
        self
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn ordered(&self, order: VocabOrder) -> Vec<char> {
        let mut chars: Vec<char> = self.chars.iter().copied().collect();
        if order == VocabOrder::Sorted {
            chars.sort_unstable();
        }
        chars
    }

    // One character per line, file truncated first
    pub fn save(&self, path: &Path, order: VocabOrder) -> Result<(), PrepError> {
        ensure_parent_dir(path)?;
        let mut writer = BufWriter::new(File::create(path)?);

        let mut buf = [0u8; 4];
        for c in self.ordered(order) {
            writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        log::info!("Saved {} vocabulary characters to {}", self.len(), path.display());
        Ok(())
    }
}
