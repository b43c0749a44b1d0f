//! `shrinkcfg resolve <reference>` – resolve a dictionary reference.

use anyhow::{Context, Result};
use shrinkcfg_core::DictionaryReference;
use std::path::Path;

pub fn run_resolve(reference: &str, base_dir: &Path) -> Result<()> {
    let base_dir = if base_dir.is_absolute() {
        base_dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(base_dir)
    };
    let resolved = DictionaryReference::resolve(reference, &base_dir)
        .with_context(|| format!("resolve dictionary reference {reference:?}"))?;
    println!("{resolved}");
    Ok(())
}
