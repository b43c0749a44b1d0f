//! `shrinkcfg compile <filter>...` – compile filters into one list.

use anyhow::Result;
use shrinkcfg_core::filter::{compile_filter, FilterList};

/// Each filter is one configuring call; no filter at all is the clearing call.
pub fn build_list(filters: &[String]) -> FilterList {
    if filters.is_empty() {
        return compile_filter(FilterList::Absent, None);
    }
    filters
        .iter()
        .fold(FilterList::Absent, |list, raw| compile_filter(list, Some(raw)))
}

pub fn render_list(list: &FilterList) -> String {
    match list.patterns() {
        None => "absent".to_string(),
        Some([]) => "[] (matches everything)".to_string(),
        Some(patterns) => patterns
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn run_compile(filters: &[String], json: bool) -> Result<()> {
    let list = build_list(filters);
    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        println!("{}", render_list(&list));
    }
    Ok(())
}
