use std::ffi::OsString;
use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ConversionTask;

/// Entries directly under `input_dir` whose extension is `extension`, sorted by
/// path. Only entries known to be directories are left out; anything whose
/// metadata cannot be read (dangling symlink, no permission) stays a candidate
/// so it is reported as a failure downstream.
pub fn discover_inputs(input_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == extension) {
            continue;
        }
        if is_directory(&entry) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Follows symlinks; unreadable metadata counts as "not a directory".
fn is_directory(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Ok(ft) if ft.is_symlink() => std::fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()),
        Ok(ft) => ft.is_dir(),
        Err(e) => {
            debug!("Cannot stat {}: {}", entry.path().display(), e);
            false
        }
    }
}

/// `<output_dir>/<input stem>.<extension>`
pub fn output_path_for(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let mut name: OsString = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(extension);
    output_dir.join(name)
}

pub fn plan_tasks(inputs: &[PathBuf], output_dir: &Path, extension: &str) -> Vec<ConversionTask> {
    inputs
        .iter()
        .map(|input| ConversionTask::new(input, output_path_for(input, output_dir, extension)))
        .collect()
}
