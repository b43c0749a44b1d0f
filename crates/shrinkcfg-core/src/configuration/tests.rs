use super::*;
use crate::filter::compile_filter;

fn texts(list: &FilterList) -> Vec<String> {
    list.patterns()
        .unwrap()
        .iter()
        .map(|p| p.to_string())
        .collect()
}

#[test]
fn new_configuration_has_everything_absent() {
    let cfg = Configuration::new("/project");
    for option in FilterOption::ALL {
        assert!(cfg.filter(option).is_absent(), "{option}");
    }
    for kind in DictionaryKind::ALL {
        assert!(cfg.dictionaries().get(kind).is_none(), "{kind}");
    }
}

#[test]
fn options_are_independent() {
    let mut cfg = Configuration::new("/project");
    cfg.filter_mut(FilterOption::Warn).add_pattern("com.example.*");
    cfg.filter_mut(FilterOption::Note).clear();

    assert_eq!(texts(cfg.filter(FilterOption::Warn)), vec!["com/example/*"]);
    assert_eq!(cfg.filter(FilterOption::Note), &FilterList::Present(Vec::new()));
    assert!(cfg.filter(FilterOption::Keep).is_absent());
    assert!(cfg.filter(FilterOption::AssumeNoSideEffects).is_absent());
    assert!(cfg.filter(FilterOption::AdaptClassStrings).is_absent());
}

#[test]
fn configurations_do_not_share_state() {
    let mut first = Configuration::new("/one");
    let second = Configuration::new("/two");
    first.filter_mut(FilterOption::Keep).add_pattern("a.B");
    assert!(second.filter(FilterOption::Keep).is_absent());

    let cloned = first.clone();
    first.filter_mut(FilterOption::Keep).clear();
    assert_eq!(texts(cloned.filter(FilterOption::Keep)), vec!["a/B"]);
}

#[test]
fn dontwarn_without_argument_clears() {
    let mut cfg = Configuration::new("/project");
    let warn = cfg.filter_mut(FilterOption::Warn);
    *warn = compile_filter(std::mem::take(warn), Some("com.example.*"));
    *warn = compile_filter(std::mem::take(warn), None);
    assert_eq!(cfg.filter(FilterOption::Warn), &FilterList::Present(Vec::new()));
}

#[cfg(unix)]
#[test]
fn set_dictionary_uses_base_dir() {
    let mut cfg = Configuration::new("/project");
    let url = cfg
        .set_dictionary(DictionaryKind::Class, "dict/classes.txt")
        .unwrap()
        .to_string();
    assert_eq!(url, "file:///project/dict/classes.txt");
    assert!(cfg.dictionaries().get(DictionaryKind::General).is_none());
    assert!(cfg.dictionaries().get(DictionaryKind::Package).is_none());
}

#[test]
fn option_names_match_task_methods() {
    let names: Vec<&str> = FilterOption::ALL.iter().map(|o| o.option_name()).collect();
    assert_eq!(
        names,
        vec!["keep", "dontwarn", "dontnote", "assumenosideeffects", "adaptclassstrings"]
    );
}
