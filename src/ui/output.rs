use colored::*;
use serde_json::Value;
use std::io::{self, Write};

/// Print a streamed content delta without a trailing newline
pub fn display_delta(content: &str) -> io::Result<()> {
    print!("{}", content);
    io::stdout().flush()
}

/// Close a streamed answer with a separator and the joined content
pub fn display_stream_summary(content: &str) {
    println!();
    println!("{}", "-".repeat(20).dimmed());
    println!("{}", content);
}

pub fn display_content(content: &str) {
    println!("{}", content.trim_end());
}

pub fn display_models(ids: &[&str]) {
    for id in ids {
        println!("{}", id.cyan());
    }
}

pub fn display_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{}", pretty),
        Err(_) => println!("{}", value),
    }
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}
