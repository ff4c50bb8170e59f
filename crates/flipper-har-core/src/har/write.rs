//! Serialize a HAR document and write it to disk.
//!
//! The default path writes to a temp file next to the destination and
//! renames it into place, so a failed run never leaves a truncated archive.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{ConvertError, Result};

use super::model::HarDocument;

/// How the archive is laid out and put on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Write to a temp file and rename over the destination on success.
    pub atomic: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            atomic: true,
        }
    }
}

/// Pretty-prints any serializable value with `indent_width` spaces per level.
/// Non-ASCII characters are written as `\uXXXX` escapes.
pub fn to_pretty_string<T>(value: &T, indent_width: usize) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    let indent = " ".repeat(indent_width);
    to_string_with(value, AsciiOnly(PrettyFormatter::with_indent(indent.as_bytes())))
}

/// Single-line JSON with `", "` and `": "` separators and non-ASCII escaped,
/// e.g. `{"a": 1, "b": "caf\u00e9"}`.
pub fn to_compact_string<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    to_string_with(value, AsciiOnly(Spaced))
}

fn to_string_with<T, F>(value: &T, formatter: F) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
    F: Formatter,
{
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

/// One-line layout with a space after every `,` and `:`.
struct Spaced;

impl Formatter for Spaced {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Wraps a layout formatter and escapes every non-ASCII character as
/// `\uXXXX` (a surrogate pair above the BMP).
struct AsciiOnly<F>(F);

impl<F: Formatter> Formatter for AsciiOnly<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut rest = fragment;
        while let Some(pos) = rest.find(|c: char| !c.is_ascii()) {
            writer.write_all(rest[..pos].as_bytes())?;
            let mut chars = rest[pos..].chars();
            if let Some(c) = chars.next() {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
            rest = chars.as_str();
        }
        writer.write_all(rest.as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object_value(writer)
    }
}

/// Writes `doc` to `path`.
pub fn write_har(path: &Path, doc: &HarDocument, opts: WriteOptions) -> Result<()> {
    let text = to_pretty_string(doc, opts.indent_width)?;
    let write_err = |source: std::io::Error| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if !opts.atomic {
        std::fs::write(path, text.as_bytes()).map_err(write_err)?;
        tracing::debug!("wrote {} bytes to {}", text.len(), path.display());
        return Ok(());
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(text.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    tracing::debug!("wrote {} bytes to {} (atomic)", text.len(), path.display());
    Ok(())
}
