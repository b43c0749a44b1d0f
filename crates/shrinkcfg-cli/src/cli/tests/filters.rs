//! Tests for compile and check subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_compile() {
    match parse(&["shrinkcfg", "compile", "com.example.**", "!a.B"]) {
        CliCommand::Compile { filters, json } => {
            assert_eq!(filters, vec!["com.example.**", "!a.B"]);
            assert!(!json);
        }
        _ => panic!("expected Compile"),
    }
}

#[test]
fn cli_parse_compile_without_filters() {
    match parse(&["shrinkcfg", "compile", "--json"]) {
        CliCommand::Compile { filters, json } => {
            assert!(filters.is_empty());
            assert!(json);
        }
        _ => panic!("expected Compile with --json"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["shrinkcfg", "check", "org.test.*", "org.test.A", "org.test.b.C"]) {
        CliCommand::Check { filter, names } => {
            assert_eq!(filter, "org.test.*");
            assert_eq!(names, vec!["org.test.A", "org.test.b.C"]);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_requires_names() {
    assert!(Cli::try_parse_from(["shrinkcfg", "check", "org.test.*"]).is_err());
}
