// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper around `run`, which walks the
// pipeline once: resolve configuration, collect input, send one request,
// print the result.
//
// Module responsibilities:
// - `cli`: flag definitions and Go-style single-dash normalization.
// - `config`: token precedence and the environment boundary.
// - `input`: reading stdin or files into the gist file map.
// - `api`: payload/response types and the blocking HTTP client.
// - `ui`: spinner and result report.
// - `error`: the fatal error taxonomy.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod ui;

use api::{GistClient, GistPayload};
use config::Config;
use error::Result;
use std::io::{Read, Write};

/// Run one submission. Only local failures are errors; an API-level failure
/// is reported to `out` and still returns `Ok`.
pub fn run<R: Read, W: Write>(config: Config, stdin: R, out: &mut W) -> anyhow::Result<()> {
    let payload = build_payload(&config, stdin)?;
    let client = GistClient::new(&config.api_url, &config.token)?;

    let spinner = ui::spinner("Sending gist...");
    let submitted = client.submit(&config.target, &payload);
    spinner.finish_and_clear();
    let submission = submitted?;

    if !submission.is_success() {
        tracing::info!(status = %submission.status, "gist request was not accepted");
    }
    ui::render(&submission, out)?;
    Ok(())
}

/// Collect input and wrap it in the request payload.
pub fn build_payload<R: Read>(config: &Config, stdin: R) -> Result<GistPayload> {
    let files = input::collect_files(&config.files, stdin, &config.filename)?;
    Ok(GistPayload {
        description: config.description.clone(),
        public: config.public,
        files,
    })
}
