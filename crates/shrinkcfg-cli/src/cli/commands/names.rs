//! `shrinkcfg names` – preview names a dictionary slot would supply.

use anyhow::{Context, Result};
use shrinkcfg_core::configuration::load_task_file;
use shrinkcfg_core::dictionary::take_names;
use shrinkcfg_core::DictionaryKind;
use std::path::Path;

pub fn collect_names(task: &Path, kind: DictionaryKind, count: usize) -> Result<Vec<String>> {
    let cfg = load_task_file(task)?;
    let mut supply = cfg.dictionaries().supply(kind);
    take_names(supply.as_mut(), count)
        .with_context(|| format!("read names for {} dictionary", kind))
}

pub fn run_names(task: &Path, kind: DictionaryKind, count: usize) -> Result<()> {
    for name in collect_names(task, kind, count)? {
        println!("{name}");
    }
    Ok(())
}
