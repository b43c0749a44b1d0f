//! `shrinkcfg show` – print the configuration loaded from a task file.

use anyhow::Result;
use shrinkcfg_core::configuration::load_task_file;
use shrinkcfg_core::{Configuration, DictionaryKind, FilterOption};
use std::path::Path;

use super::compile::render_list;

pub fn render_configuration(cfg: &Configuration) -> String {
    let mut lines = Vec::new();
    for option in FilterOption::ALL {
        let rendered = render_list(cfg.filter(option)).replace('\n', ", ");
        lines.push(format!("{:<30} {}", option.option_name(), rendered));
    }
    for kind in DictionaryKind::ALL {
        let value = cfg
            .dictionaries()
            .get(kind)
            .map(|r| r.to_string())
            .unwrap_or_else(|| "(default naming)".to_string());
        lines.push(format!("{:<30} {}", kind.option_name(), value));
    }
    lines.join("\n")
}

pub fn run_show(task: &Path, json: bool) -> Result<()> {
    let cfg = load_task_file(task)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
    } else {
        println!("{}", render_configuration(&cfg));
    }
    Ok(())
}
