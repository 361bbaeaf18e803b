//
//  apigee-client
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`write_json`] | Pretty-printed JSON to stdout |
//! | [`write_json_compact`] | Minified JSON to stdout |
//! | [`write_json_to`] | Either layout to any [`Write`] destination |
//!
//! API responses are printed as received; nothing is filtered or reshaped.

use serde::Serialize;
use std::io::{self, Write};

use super::OutputFormat;

/// Renders `value` as a string in the given layout, without a trailing newline.
///
/// ```rust
/// use apigee_client::output::{render_json, OutputFormat};
///
/// let value = serde_json::json!({"kvms": ["kvm1", "kvm2"]});
/// let line = render_json(&value, OutputFormat::Compact)?;
/// assert_eq!(line, r#"{"kvms":["kvm1","kvm2"]}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn render_json<T: Serialize>(value: &T, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
        OutputFormat::Compact => serde_json::to_string(value),
    }
}

/// Writes a value as pretty-printed JSON to stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or stdout is not
/// writable.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value, OutputFormat::Pretty)
}

/// Writes a value as compact JSON on a single line to stdout.
pub fn write_json_compact<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value, OutputFormat::Compact)
}

/// Writes a value as JSON to a custom writer, followed by a newline.
pub fn write_json_to<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let json = render_json(value, format)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}
