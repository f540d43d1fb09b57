//! Writing the artifact tree to disk.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::emit::{ArtifactKind, GENERATED_HEADER};

/// Write `data` to `path` through a sibling temp file and a rename, so a
/// failed write never leaves a truncated artifact behind.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let result = (|| {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "invalid path for atomic write")
    })?;
    Ok(path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy())))
}

/// Create the output directory and the four artifact directories.
pub fn ensure_layout(out_dir: &Path) -> io::Result<()> {
    for kind in ArtifactKind::ALL {
        fs::create_dir_all(out_dir.join(kind.dir()))?;
    }
    Ok(())
}

/// Remove previously generated `.rs` files from the artifact directories.
///
/// Only files starting with [`GENERATED_HEADER`] are touched; anything a
/// human put there stays. Returns the number of removed files.
pub fn clean_generated(out_dir: &Path) -> io::Result<usize> {
    let mut removed = 0;
    let mut dirs: Vec<PathBuf> = ArtifactKind::ALL
        .iter()
        .map(|kind| out_dir.join(kind.dir()))
        .collect();
    dirs.push(out_dir.to_path_buf());

    for dir in dirs {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => return Err(err),
        };
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "rs") && is_generated(&path)? {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
    }
    Ok(removed)
}

fn is_generated(path: &Path) -> io::Result<bool> {
    Ok(fs::read(path)?.starts_with(GENERATED_HEADER.as_bytes()))
}
