//! Output formatting for CLI commands

use colored::Colorize;
use serde::Serialize;

use crate::error::EnvarsError;
pub use crate::storage::OutputFormat;

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message.green()),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints guidance for a condition that ended the command early
    pub fn notice(&self, err: &EnvarsError) {
        match self.format {
            OutputFormat::Text => println!("{}", err.to_string().yellow()),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "code": err.code(),
                        "message": err.to_string()
                    })
                );
            }
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                // Callers handle text themselves; this is a pretty-printed fallback
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints a plain line (text only, ignored in JSON mode)
    pub fn line(&self, text: &str) {
        if self.format == OutputFormat::Text {
            println!("{}", text);
        }
    }

    /// Prints an indented list item (text only, ignored in JSON mode)
    pub fn item(&self, text: &str) {
        if self.format == OutputFormat::Text {
            println!("  {}", text);
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
