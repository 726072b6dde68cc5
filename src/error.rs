// Error type shared by every stage of the pipeline. Each variant is fatal:
// `main` prints it and exits non-zero. A non-success HTTP status is not an
// error here, it comes back as an unsuccessful `Submission`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GistError {
    #[error("no token (pass -token or set GIST_TOKEN or GITHUB_TOKEN)")]
    MissingToken,

    #[error("error reading input: {0}")]
    ReadStdin(io::Error),

    #[error("error reading {}: {error}", path.display())]
    ReadFile { path: PathBuf, error: io::Error },

    #[error("could not encode to json: {0}")]
    Encode(serde_json::Error),

    #[error("could not build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("could not make request: {0}")]
    Request(reqwest::Error),

    #[error("could not read response: {0}")]
    ReadResponse(reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GistError>;
