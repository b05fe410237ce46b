use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

/// Byte order mark some editors put at the start of UTF-8 files.
const BOM: char = '\u{FEFF}';

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Resolve a site-relative path against the site root
pub fn resolve(relative_path: &RelativePath, root: &Path) -> PathBuf {
    relative_path.to_path(root)
}

/// Read a text file, dropping a leading byte order mark if present
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::at(path))?;
    Ok(match content.strip_prefix(BOM) {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Write content to a file, replacing what was there
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::at(parent))?;
    }

    fs::write(path, content).map_err(IoError::at(path))
}
