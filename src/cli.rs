// Command-line surface. Flags are long-only and may be written Go-style
// with a single dash (`-token x`, `-public`), which `normalize_args`
// rewrites into the double-dash form clap expects.

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may appear with a single leading dash.
const LONG_FLAGS: &[&str] = &[
    "token",
    "description",
    "patch",
    "filename",
    "public",
    "verbose",
    "help",
    "version",
];

#[derive(Parser, Debug, Default)]
#[command(name = "gist", version)]
#[command(about = "Create or update a gist from stdin or files", long_about = None)]
pub struct Args {
    /// Token (or use GIST_TOKEN or GITHUB_TOKEN environment variables)
    #[arg(long, default_value = "")]
    pub token: String,

    /// Description of the gist
    #[arg(long, default_value = "")]
    pub description: String,

    /// Patch existing gist
    #[arg(long, value_name = "ID", default_value = "")]
    pub patch: String,

    /// Filename for content from stdin
    #[arg(long, default_value = "")]
    pub filename: String,

    /// Make public gist
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub public: bool,

    /// Log request details to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Files to upload; stdin is read when none are given
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-name` and `-name=value` into `--name`/`--name=value` for every
/// known long flag. Arguments after a bare `--` pass through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if s.starts_with('-') && !s.starts_with("--") => {
                let name = s[1..].split('=').next().unwrap_or_default();
                LONG_FLAGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{s}")))
            }
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}
