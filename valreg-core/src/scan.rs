//! Directory enumeration of record files.

use std::path::Path;

use walkdir::WalkDir;

use crate::config::RECORD_EXTENSION;
use crate::error::RegistryError;

/// Lists record files directly inside `dir`, sorted by name.
///
/// `exclude` names a file to leave out, typically the aggregate artifact.
pub fn list_record_files(dir: &Path, exclude: Option<&str>) -> Result<Vec<String>, RegistryError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| RegistryError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(RECORD_EXTENSION) || Some(name.as_str()) == exclude {
            continue;
        }
        files.push(name);
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_sorted_json_files_only() {
        let dir = TempDir::new().unwrap();
        for name in ["b.json", "a.json", "notes.txt", "mainnet_validators.json"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();
        std::fs::write(dir.path().join("nested.json").join("c.json"), "{}").unwrap();

        let files = list_record_files(dir.path(), Some("mainnet_validators.json")).unwrap();
        assert_eq!(files, vec!["a.json".to_string(), "b.json".to_string()]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = list_record_files(&dir.path().join("devnet"), None).unwrap_err();
        assert!(matches!(err, RegistryError::Scan { .. }));
    }
}
