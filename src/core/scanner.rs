use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not open directory [{path}]: {source}")]
    Directory {
        path: String,
        source: walkdir::Error,
    },
}

/// Suffixes eligible for comparison. Exact lowercase match on the file name:
/// `photo.JPG` does not qualify, nor does a name that is only the suffix.
const IMAGE_SUFFIXES: [&str; 3] = [".jpg", ".png", ".gif"];

pub fn is_image_name(name: &str) -> bool {
    name.len() > 4 && IMAGE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Flat (non-recursive) listing of the image files in `dir`, sorted by file
/// name. Non-image entries are silently skipped.
pub fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ScanError::Directory {
            path: dir.display().to_string(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_image_name(name) {
                images.push(entry.into_path());
            }
        }
    }
    Ok(images)
}
