use std::ops::Range;

use super::models::{
    FileEntry,
    Partition,
    PartitionKind,
};

// floor(total * ratio), truncated rather than rounded
pub fn split_index(total: usize, ratio: f64) -> usize {
    ((total as f64 * ratio) as usize).min(total)
}

pub fn partition(files: Vec<FileEntry>, ratio: f64) -> (Partition, Partition) {
    let index = split_index(files.len(), ratio);
    let mut train = files;
    let val = train.split_off(index);

    (
        Partition { kind: PartitionKind::Train, files: train },
        Partition { kind: PartitionKind::Val, files: val },
    )
}

/// Cuts `len` items into `parts` contiguous ranges whose sizes differ by at most
/// one, larger ranges first.
pub fn chunk_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    if parts == 0 {
        return Vec::new();
    }

    let base = len / parts;
    let remainder = len % parts;
    let mut start = 0;

    (0..parts)
        .map(|i| {
            let size = base + usize::from(i < remainder);
            let range = start..start + size;
            start += size;
            range
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn entries(count: usize) -> Vec<FileEntry> {
        (0..count).map(|i| FileEntry::new(Path::new("in"), format!("{i}.xz"))).collect()
    }

    #[test]
    fn test_split_index_truncates() {
        assert_eq!(split_index(0, 0.85), 0);
        assert_eq!(split_index(1, 0.85), 0);
        assert_eq!(split_index(10, 0.85), 8);
        assert_eq!(split_index(20, 0.85), 17);
        assert_eq!(split_index(20000, 0.85), 17000);
    }

    #[test]
    fn test_partition_sizes_sum_to_total() {
        for total in 0..200 {
            let (train, val) = partition(entries(total), 0.85);
            assert_eq!(train.len(), split_index(total, 0.85));
            assert_eq!(train.len() + val.len(), total);
        }
    }

    #[test]
    fn test_partition_keeps_listing_order() {
        let (train, val) = partition(entries(10), 0.85);
        let train_names: Vec<_> = train.files.iter().map(|f| f.name.as_str()).collect();
        let val_names: Vec<_> = val.files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(train_names, ["0.xz", "1.xz", "2.xz", "3.xz", "4.xz", "5.xz", "6.xz", "7.xz"]);
        assert_eq!(val_names, ["8.xz", "9.xz"]);
        assert_eq!(train.kind, PartitionKind::Train);
        assert_eq!(val.kind, PartitionKind::Val);
    }

    #[test]
    fn test_single_file_goes_to_val() {
        let (train, val) = partition(entries(1), 0.85);
        assert_eq!(train.len(), 0);
        assert_eq!(val.len(), 1);
    }

    #[test]
    fn test_chunk_ranges_cover_everything() {
        assert_eq!(chunk_ranges(8, 3), vec![0..3, 3..6, 6..8]);
        assert_eq!(chunk_ranges(2, 3), vec![0..1, 1..2, 2..2]);
        assert_eq!(chunk_ranges(0, 2), vec![0..0, 0..0]);
        assert!(chunk_ranges(5, 0).is_empty());
    }
}
