use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use omlox_core::Loader;
use serde::de::DeserializeOwned;

/// Load every input into one loader before anything is sent to the hub.
///
/// Files are read in the order given. With no files, stdin is read instead.
pub fn load_inputs<T: DeserializeOwned>(files: &[PathBuf]) -> anyhow::Result<Loader<T>> {
    let mut loader = Loader::new();

    if files.is_empty() {
        loader
            .load_json(std::io::stdin().lock())
            .context("failed to load resources from stdin")?;
        return Ok(loader);
    }

    for path in files {
        let file = File::open(path)
            .with_context(|| format!("failed to open input file {}", path.display()))?;
        loader
            .load_json(BufReader::new(file))
            .with_context(|| format!("failed to load resources from {}", path.display()))?;
    }

    Ok(loader)
}
