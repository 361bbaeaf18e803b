//
//  apigee-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Every command prints the JSON document the API returned, unchanged. The
//! only choice is layout:
//!
//! - **Pretty**: indented JSON, the default
//! - **Compact**: one line per document, selected with `--compact`
//!
//! Errors go to stderr behind an `Error:` prefix, styled red when stderr is a
//! terminal.
//!
//! ## Example
//!
//! ```rust,ignore
//! use apigee_client::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Compact);
//! writer.write(&serde_json::json!({"kvms": ["kvm1"]}))?;
//! apigee_client::output::write_error("404 Not Found: not found");
//! ```

mod json;

pub use json::*;

use console::style;
use serde::Serialize;

/// Layout of JSON written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented, human-readable JSON.
    #[default]
    Pretty,
    /// Minified JSON on a single line.
    Compact,
}

impl OutputFormat {
    /// Picks the format from the `--compact` flag.
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            Self::Compact
        } else {
            Self::Pretty
        }
    }
}

/// Writes command results to stdout and errors to stderr.
#[derive(Debug, Clone, Copy)]
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns the output format configured for this writer.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes `value` to stdout in the configured format.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or stdout is closed.
    pub fn write<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Pretty => write_json(value),
            OutputFormat::Compact => write_json_compact(value),
        }
    }
}

/// Writes `Error: <msg>` to stderr.
///
/// The prefix is red and bold only when stderr supports colour. Usable
/// before any [`OutputWriter`] exists, e.g. while arguments are still being
/// parsed.
pub fn write_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold().for_stderr(), msg);
}
