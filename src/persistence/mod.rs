use std::{
    fs,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    utils::ensure_parent_dir,
    PrepConfig,
    PrepError,
};

pub fn save_json<T: Serialize>(data: &T, path: &Path) -> Result<(), PrepError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    log::info!("Data saved to: {}", path.display());
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, PrepError> {
    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    log::debug!("Data loaded from: {}", path.display());
    Ok(data)
}

/// Missing keys fall back to `PrepConfig::default()`.
pub fn load_config(path: &Path) -> Result<PrepConfig, PrepError> {
    load_json(path)
}

pub fn save_config(config: &PrepConfig, path: &Path) -> Result<(), PrepError> {
    save_json(config, path)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::core::{
        Codec,
        WriteMode,
    };

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prep.json");
        fs::write(&path, r#"{ "input_dir": "/data/owt", "write_mode": "chunked" }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/data/owt"));
        assert_eq!(config.write_mode, WriteMode::Chunked);
        assert_eq!(config.split_ratio, 0.85);
        assert_eq!(config.codec, Codec::Xz);
        assert_eq!(config.output_count, None);
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("configs").join("prep.json");
        let config = PrepConfig { output_count: Some(4), codec: Codec::Zstd, ..Default::default() };

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_config_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prep.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config(&path), Err(PrepError::Json(_))));
    }

    #[test]
    fn test_missing_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_config(&dir.path().join("nope.json")), Err(PrepError::Io(_))));
    }
}
