//! Command-line front for the formula OCR wrapper.
//!
//! Usage: `gtb-ocr <image> [cli-path]`. Prints the transcription (or the
//! sigil-prefixed error message) to stdout.

use std::path::PathBuf;

use gtb_ocr::{transcribe_formula, OcrConfig};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);

    let Some(image) = args.next() else {
        anyhow::bail!("usage: gtb-ocr <image> [cli-path]");
    };
    let cli_path = args
        .next()
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("OCR_CLI_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("pix2tex"));

    let cfg = OcrConfig::new(cli_path);
    let image = PathBuf::from(image);
    println!("{}", transcribe_formula(&cfg, &image));

    Ok(())
}
