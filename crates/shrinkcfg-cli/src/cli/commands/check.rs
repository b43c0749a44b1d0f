//! `shrinkcfg check <filter> <name>...` – evaluate a filter against names.

use anyhow::Result;
use shrinkcfg_core::filter::{compile_filter, to_internal_name, FilterList};

/// One line per name: `accept` or `reject`, then the name as given.
pub fn render_check(filter: &str, names: &[String]) -> Vec<String> {
    let list = compile_filter(FilterList::Absent, Some(filter));
    names
        .iter()
        .map(|name| {
            let accepted = list.accepts(&to_internal_name(name)).unwrap_or(false);
            let verdict = if accepted { "accept" } else { "reject" };
            format!("{verdict}  {name}")
        })
        .collect()
}

pub fn run_check(filter: &str, names: &[String]) -> Result<()> {
    for line in render_check(filter, names) {
        println!("{line}");
    }
    Ok(())
}
