// src/file.rs

use std::{
    fs,
    path::Path,
};

/// Read a whole text file, with the path in the error message.
pub fn read_text(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("read {}: {}", path.display(), e).into())
}

/// Write a text file, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
