// Configuration resolved once at the process boundary. Environment variables
// are read here and nowhere else; everything downstream takes plain values.

use crate::api::Target;
use crate::cli::Args;
use crate::error::{GistError, Result};
use std::path::PathBuf;

pub const GIST_TOKEN_ENV: &str = "GIST_TOKEN";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_URL_ENV: &str = "GIST_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_FILENAME: &str = "gist.txt";

/// The three places a token can come from, in precedence order.
#[derive(Debug, Clone, Default)]
pub struct TokenSources {
    pub explicit: Option<String>,
    pub gist_token: Option<String>,
    pub github_token: Option<String>,
}

impl TokenSources {
    pub fn from_env(explicit: &str) -> Self {
        Self {
            explicit: Some(explicit.to_string()),
            gist_token: std::env::var(GIST_TOKEN_ENV).ok(),
            github_token: std::env::var(GITHUB_TOKEN_ENV).ok(),
        }
    }
}

/// Return the first non-empty token: explicit flag, then `GIST_TOKEN`,
/// then `GITHUB_TOKEN`.
pub fn resolve_token(sources: &TokenSources) -> Result<String> {
    [
        &sources.explicit,
        &sources.gist_token,
        &sources.github_token,
    ]
    .into_iter()
    .flatten()
    .find(|t| !t.is_empty())
    .cloned()
    .ok_or(GistError::MissingToken)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub description: String,
    pub target: Target,
    pub filename: String,
    pub public: bool,
    pub files: Vec<PathBuf>,
    pub api_url: String,
}

impl Config {
    /// Build the run configuration from parsed flags and the environment.
    pub fn from_args(args: Args) -> Result<Self> {
        let token = resolve_token(&TokenSources::from_env(&args.token))?;
        let api_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Ok(Self::new(args, token, api_url))
    }

    fn new(args: Args, token: String, api_url: String) -> Self {
        let filename = if args.filename.is_empty() {
            DEFAULT_FILENAME.to_string()
        } else {
            args.filename
        };

        Config {
            token,
            description: args.description,
            target: Target::from_patch(Some(args.patch.as_str())),
            filename,
            public: args.public,
            files: args.files,
            api_url,
        }
    }
}
