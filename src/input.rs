// Input collection: either all of stdin under one name, or every named file
// keyed by its base name. Any read failure aborts the whole run.

use crate::api::GistFile;
use crate::error::{GistError, Result};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

pub type Files = BTreeMap<String, GistFile>;

/// Collect gist files. With no `paths`, `stdin` is read to the end and
/// stored under `filename`; otherwise each path is read in order and later
/// paths with the same base name replace earlier ones.
pub fn collect_files<R: Read>(paths: &[PathBuf], stdin: R, filename: &str) -> Result<Files> {
    let mut files = Files::new();

    if paths.is_empty() {
        let content = read_stdin(stdin)?;
        debug!(filename, bytes = content.len(), "read stdin");
        files.insert(filename.to_string(), GistFile { content });
        return Ok(files);
    }

    for path in paths {
        let bytes = std::fs::read(path).map_err(|error| GistError::ReadFile {
            path: path.clone(),
            error,
        })?;
        let name = base_name(path);
        debug!(path = %path.display(), name = %name, bytes = bytes.len(), "read file");
        files.insert(
            name,
            GistFile {
                content: String::from_utf8_lossy(&bytes).into_owned(),
            },
        );
    }
    Ok(files)
}

fn read_stdin<R: Read>(mut stdin: R) -> Result<String> {
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf).map_err(GistError::ReadStdin)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Final path component, or the path as written when it has none.
fn base_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
