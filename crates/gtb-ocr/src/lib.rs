//! Formula OCR collaborator.
//!
//! Wraps an external `pix2tex`-style CLI as a subprocess. The interface other
//! components consume is a synchronous function from an image file to a
//! string: either the LaTeX transcription or an error message prefixed with
//! [`ERROR_SIGIL`]. The dispatch core never calls this.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use gtb_core::{errors::Error, Result};

/// Prefix marking an error message in the returned string. Callers match on
/// this instead of a `Result`.
pub const ERROR_SIGIL: &str = "⚠️";

const STDERR_PREVIEW_MAX: usize = 500;

#[derive(Clone, Debug)]
pub struct OcrConfig {
    /// Path to the OCR executable (e.g. `pix2tex`).
    pub cli_path: PathBuf,
}

impl OcrConfig {
    pub fn new(cli_path: impl Into<PathBuf>) -> Self {
        Self {
            cli_path: cli_path.into(),
        }
    }
}

/// Transcribe the formula in `image` to LaTeX.
///
/// Never fails at the type level: any spawn, exit-status or output problem
/// comes back as a sigil-prefixed message.
pub fn transcribe_formula(cfg: &OcrConfig, image: &Path) -> String {
    match run_cli(cfg, image) {
        Ok(latex) => latex,
        Err(e) => format!("{ERROR_SIGIL} {e}"),
    }
}

fn run_cli(cfg: &OcrConfig, image: &Path) -> Result<String> {
    let out = Command::new(&cfg.cli_path).arg(image).output()?;

    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        return Err(Error::External(format!(
            "{} exited with status {}: {}",
            cfg.cli_path.display(),
            out.status,
            truncate_text(stderr.trim(), STDERR_PREVIEW_MAX)
        )));
    }

    let stdout = String::from_utf8_lossy(&out.stdout);
    let latex = parse_cli_output(image, &stdout);
    if latex.is_empty() {
        return Err(Error::External(format!(
            "{} produced no transcription for {}",
            cfg.cli_path.display(),
            image.display()
        )));
    }

    Ok(latex)
}

/// The CLI prints `<path>: <latex>`; strip the echoed path prefix when
/// present and trim.
fn parse_cli_output(image: &Path, stdout: &str) -> String {
    let trimmed = stdout.trim();

    let prefix = format!("{}:", image.display());
    if let Some(rest) = trimmed.strip_prefix(&prefix) {
        return rest.trim().to_string();
    }

    trimmed.to_string()
}

fn truncate_text(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let mut out = s.chars().take(max_len).collect::<String>();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_echoed_path_prefix() {
        let image = Path::new("/tmp/eq.png");
        let out = "/tmp/eq.png: \\frac{a}{b}\n";
        assert_eq!(parse_cli_output(image, out), "\\frac{a}{b}");
    }

    #[test]
    fn passes_bare_output_through() {
        let image = Path::new("/tmp/eq.png");
        assert_eq!(parse_cli_output(image, "x^2 + y^2 = z^2\n"), "x^2 + y^2 = z^2");
    }

    #[test]
    fn missing_cli_yields_a_sigil_message() {
        let cfg = OcrConfig::new("/nonexistent/pix2tex-binary");
        let out = transcribe_formula(&cfg, Path::new("/tmp/eq.png"));
        assert!(out.starts_with(ERROR_SIGIL));
    }

    #[test]
    fn long_stderr_is_truncated() {
        let s = "e".repeat(2000);
        let t = truncate_text(&s, STDERR_PREVIEW_MAX);
        assert_eq!(t.chars().count(), STDERR_PREVIEW_MAX + 3);
        assert!(t.ends_with("..."));
    }
}
