use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
    time::Instant,
};

use super::{
    decompress::read_text,
    discovery::discover_files,
    models::{
        Codec,
        FileEntry,
        Partition,
        PartitionKind,
        PartitionSummary,
        PrepConfig,
        RunSummary,
        WriteMode,
    },
    partition::{
        chunk_ranges,
        partition,
    },
    utils::{
        ensure_parent_dir,
        render_output_path,
    },
    vocab::Vocabulary,
    PrepError,
};

#[derive(Debug, Clone)]
pub enum ProgressEvent {
    OutputStarted {
        kind: PartitionKind,
        index: usize,
        path: PathBuf,
        file_count: usize,
    },
    FileProcessed {
        kind: PartitionKind,
        index: usize,
        position: usize, // 1-based within the current output
        file_count: usize,
        name: String,
        bytes: u64,
    },
    OutputFinished {
        kind: PartitionKind,
        index: usize,
        path: PathBuf,
        bytes: u64,
    },
}

pub type ProgressCallback = Box<dyn Fn(ProgressEvent)>;

fn emit(progress_callback: &Option<ProgressCallback>, event: ProgressEvent) {
    if let Some(callback) = progress_callback {
        callback(event);
    }
}

// Any failure aborts the run; outputs already written stay on disk.
pub fn run(
    config: &PrepConfig,
    progress_callback: Option<ProgressCallback>,
) -> Result<RunSummary, PrepError> {
    let total_start = Instant::now();
    let output_count = config.validate()?;

    let files = discover_files(&config.input_dir, config.codec)?;
    let total_files = files.len();
    let (train, val) = partition(files, config.split_ratio);
    log::info!(
        "Found {} archives in {}: {} train, {} val",
        total_files,
        config.input_dir.display(),
        train.len(),
        val.len()
    );

    if config.write_mode == WriteMode::Repeat && output_count > 1 {
        log::warn!(
            "Repeat mode writes the whole partition into each of the {} outputs",
            output_count
        );
    }

    let vocab = Vocabulary::new();
    let (train_summary, vocab) =
        write_partition(&train, config, output_count, vocab, &progress_callback)?;
    let (val_summary, vocab) =
        write_partition(&val, config, output_count, vocab, &progress_callback)?;

    vocab.save(&config.vocab_path, config.vocab_order)?;

    log::info!("Finished in {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(RunSummary {
        total_files,
        train: train_summary,
        val: val_summary,
        vocab_size: vocab.len(),
        vocab_path: config.vocab_path.clone(),
    })
}

pub fn write_partition(
    partition: &Partition,
    config: &PrepConfig,
    output_count: usize,
    vocab: Vocabulary,
    progress_callback: &Option<ProgressCallback>,
) -> Result<(PartitionSummary, Vocabulary), PrepError> {
    let template = config.template_for(partition.kind);
    let ranges = chunk_ranges(partition.len(), output_count);

    let mut summary = PartitionSummary { file_count: partition.len(), ..Default::default() };
    let mut vocab = vocab;

    for index in 0..output_count {
        let files = match config.write_mode {
            WriteMode::Repeat => &partition.files[..],
            WriteMode::Chunked => &partition.files[ranges[index].clone()],
        };

        let path = render_output_path(template, index, output_count);
        log::info!(
            "Writing {} output {}/{} ({} files) to {}",
            partition.kind.label(),
            index + 1,
            output_count,
            files.len(),
            path.display()
        );

        let (bytes, seen) =
            write_output(&path, files, config.codec, partition.kind, index, progress_callback)?;
        vocab = vocab.merge(seen);

        summary.bytes_written += bytes;
        summary.outputs.push(path);
    }

    Ok((summary, vocab))
}

fn write_output(
    path: &Path,
    files: &[FileEntry],
    codec: Codec,
    kind: PartitionKind,
    index: usize,
    progress_callback: &Option<ProgressCallback>,
) -> Result<(u64, Vocabulary), PrepError> {
    ensure_parent_dir(path)?;
    let mut writer = BufWriter::new(File::create(path)?);

    emit(
        progress_callback,
        ProgressEvent::OutputStarted {
            kind,
            index,
            path: path.to_path_buf(),
            file_count: files.len(),
        },
    );

    let (bytes, vocab) = files.iter().enumerate().try_fold(
        (0u64, Vocabulary::new()),
        |(bytes, vocab), (position, file)| -> Result<_, PrepError> {
            let text = read_text(&file.path, codec)?;
            writer.write_all(text.as_bytes())?;
            log::debug!("Appended {} ({} bytes)", file.name, text.len());

            emit(
                progress_callback,
                ProgressEvent::FileProcessed {
                    kind,
                    index,
                    position: position + 1,
                    file_count: files.len(),
                    name: file.name.clone(),
                    bytes: text.len() as u64,
                },
            );

            Ok((bytes + text.len() as u64, vocab.absorb(&text)))
        },
    )?;

    writer.flush()?;

    emit(
        progress_callback,
        ProgressEvent::OutputFinished { kind, index, path: path.to_path_buf(), bytes },
    );

    Ok((bytes, vocab))
}
