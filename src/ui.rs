// UI layer: the stderr spinner shown while the request is in flight and the
// report printed to stdout once it completes.

use crate::api::Submission;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z UTC";
/// Printed when the response carried no usable creation date.
const ZERO_DATE: &str = "0001-01-01 00:00:00 +0000 UTC";

/// Spinner on stderr. indicatif draws nothing when stderr is not a terminal,
/// so piping the output stays clean.
pub fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Write the outcome of a submission. Success prints the id, page URL and
/// creation date; anything else prints the status code and the raw body.
pub fn render<W: Write>(submission: &Submission, out: &mut W) -> io::Result<()> {
    if !submission.is_success() {
        writeln!(
            out,
            "Gist might have not been created, response status code: {}",
            submission.status.as_u16()
        )?;
        out.write_all(&submission.body)?;
        return writeln!(out);
    }

    let record = &submission.record;
    let date = record
        .created_at
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| ZERO_DATE.to_string());
    writeln!(out, "  ID:    {}", record.id)?;
    writeln!(out, "  HTML:  {}", record.html_url)?;
    writeln!(out, "  Date:  {}", date)
}
