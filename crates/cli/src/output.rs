// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn render<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Text => Some(value.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(value).ok(),
    }
}

/// Print a successful result to stdout
pub fn print<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    if let Some(out) = render(value, format) {
        println!("{}", out);
    }
}

/// Print a refused result to stderr
pub fn eprint<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    if let Some(out) = render(value, format) {
        eprintln!("{}", out);
    }
}
