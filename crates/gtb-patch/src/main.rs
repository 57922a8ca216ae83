//! Apply the thread-kwargs transform to a source file in place.
//!
//! Usage: `gtb-patch <file>`. Rewrites the file only when something changed
//! and reports which way it went.

use std::fs;

fn main() -> anyhow::Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        anyhow::bail!("usage: gtb-patch <file>");
    };

    let source = fs::read_to_string(&path)?;
    let patched = gtb_patch::apply(&source);

    if patched == source {
        println!("{path}: already patched, nothing to do");
        return Ok(());
    }

    fs::write(&path, patched)?;
    println!("{path}: patched");

    Ok(())
}
