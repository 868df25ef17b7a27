use std::{
    fs,
    path::Path,
};

use super::{
    models::{
        Codec,
        FileEntry,
    },
    PrepError,
};

pub fn discover_files(dir: &Path, codec: Codec) -> Result<Vec<FileEntry>, PrepError> {
    let discovery_err = |source| PrepError::Discovery { path: dir.to_path_buf(), source };

    let mut files = Vec::new();
    let suffix = codec.suffix();

    for entry in fs::read_dir(dir).map_err(discovery_err)? {
        let entry = entry.map_err(discovery_err)?;

        // Non UTF-8 names can never carry the suffix we match on
        let Some(name) = entry.file_name().to_str().map(ToOwned::to_owned) else {
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }

        // DirEntry::file_type does not follow symlinks
        let file_type = entry.file_type().map_err(discovery_err)?;
        if file_type.is_file() {
            files.push(FileEntry::new(dir, name));
        }
    }

    log::debug!("Discovered {} {} archives in {}", files.len(), codec.name(), dir.display());
    Ok(files)
}
