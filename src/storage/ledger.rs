//! Flat-text client ledger
//!
//! The ledger is a plain text file of JSON-looking blocks, one per client,
//! written and parsed by hand rather than through serde. The format is
//! line-oriented: every field sits alone on its own line, blocks are
//! separated by a blank line, and a reader can repair or inspect the file in
//! any text editor.
//!
//! ```text
//! {
//!   "name": "Ann",
//!   "password": "p1",
//!   "id": "550e8400-e29b-41d4-a716-446655440000",
//!   "phone_number": "555-1234",
//!   "rented_books": [
//!     "Dune",
//!     "Hyperion"
//!   ]
//! }
//! ```
//!
//! Parsing is strict: a malformed block is a fatal error carrying the
//! 1-based line number, never a silently skipped record.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{CirculateError, CirculateResult};
use crate::models::{Client, ClientId};

/// How `persist` opens the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Add the block after any existing content
    Append,
    /// Drop existing content first
    Truncate,
}

/// A record that can be written to the flat-text ledger
pub trait TextRecord {
    /// Render the record as one multi-line ledger block (no trailing newline)
    fn to_block(&self) -> String;

    /// Write the block to `path`, followed by the blank separator line
    fn persist(&self, path: &Path, mode: WriteMode) -> CirculateResult<()> {
        let mut file = open_for_writing(path, mode)?;
        write_block(&mut file, path, &self.to_block())?;
        file.flush()
            .map_err(|e| CirculateError::Storage(format!("Failed to flush {}: {}", path.display(), e)))
    }
}

impl TextRecord for Client {
    fn to_block(&self) -> String {
        let mut block = String::new();
        block.push_str("{\n");
        block.push_str(&format!("  \"name\": \"{}\",\n", escape(&self.name)));
        block.push_str(&format!("  \"password\": \"{}\",\n", escape(&self.password)));
        block.push_str(&format!("  \"id\": \"{}\",\n", self.id));
        block.push_str(&format!(
            "  \"phone_number\": \"{}\",\n",
            escape(&self.phone_number)
        ));
        block.push_str("  \"rented_books\": [\n");
        for (i, title) in self.rented_books.iter().enumerate() {
            let comma = if i + 1 == self.rented_books.len() { "" } else { "," };
            block.push_str(&format!("    \"{}\"{}\n", escape(title), comma));
        }
        block.push_str("  ]\n");
        block.push('}');
        block
    }
}

/// Rewrite the ledger at `path` so it contains exactly the given records
pub fn write_all(path: &Path, clients: &[Client]) -> CirculateResult<()> {
    let mut file = open_for_writing(path, WriteMode::Truncate)?;
    for client in clients {
        write_block(&mut file, path, &client.to_block())?;
    }
    file.flush()
        .map_err(|e| CirculateError::Storage(format!("Failed to flush {}: {}", path.display(), e)))
}

/// Read every client block from the ledger file at `path`
pub fn read_all(path: &Path) -> CirculateResult<Vec<Client>> {
    let file = File::open(path)
        .map_err(|e| CirculateError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    parse_blocks(BufReader::new(file))
}

/// Parse client blocks from any line-oriented reader
///
/// Lines outside blocks (blank separators, stray content) are skipped; a
/// block begins at a line that is exactly `{` and must then be well formed.
pub fn parse_blocks<R: BufRead>(reader: R) -> CirculateResult<Vec<Client>> {
    let mut scanner = LineScanner::new(reader);
    let mut clients = Vec::new();

    while let Some(line) = scanner.next_line()? {
        if line.trim() == "{" {
            clients.push(parse_block(&mut scanner)?);
        }
    }

    Ok(clients)
}

fn open_for_writing(path: &Path, mode: WriteMode) -> CirculateResult<File> {
    let result = match mode {
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
        WriteMode::Truncate => OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path),
    };
    result.map_err(|e| {
        CirculateError::Storage(format!(
            "Failed to open {} for writing: {}",
            path.display(),
            e
        ))
    })
}

fn write_block(file: &mut File, path: &Path, block: &str) -> CirculateResult<()> {
    // Blank line after every block keeps records visually separated
    writeln!(file, "{}\n", block)
        .map_err(|e| CirculateError::Storage(format!("Failed to write {}: {}", path.display(), e)))
}

/// Escape a field value for embedding between double quotes
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Line reader that tracks the current 1-based line number for errors
struct LineScanner<R> {
    lines: std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> LineScanner<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }

    fn next_line(&mut self) -> CirculateResult<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Ok(line)) => {
                self.number += 1;
                Ok(Some(line))
            }
            Some(Err(e)) => Err(CirculateError::Io(format!(
                "Failed to read ledger line {}: {}",
                self.number + 1,
                e
            ))),
        }
    }

    fn expect_line(&mut self, what: &str) -> CirculateResult<String> {
        self.next_line()?.ok_or_else(|| {
            CirculateError::ledger(
                self.number + 1,
                format!("unexpected end of ledger, expected {}", what),
            )
        })
    }
}

/// Parse one block body; the opening `{` line has already been consumed
fn parse_block<R: BufRead>(scanner: &mut LineScanner<R>) -> CirculateResult<Client> {
    let name = expect_scalar(scanner, "name")?;
    let password = expect_scalar(scanner, "password")?;
    let id_text = expect_scalar(scanner, "id")?;
    let id_line = scanner.number;
    let phone_number = expect_scalar(scanner, "phone_number")?;

    let header = scanner.expect_line("the \"rented_books\" list")?;
    if header.trim() != "\"rented_books\": [" {
        return Err(CirculateError::ledger(
            scanner.number,
            format!(
                "expected the \"rented_books\" list, found {:?}",
                header.trim()
            ),
        ));
    }

    let mut rented_books = Vec::new();
    loop {
        let line = scanner.expect_line("a book title or the closing bracket")?;
        let trimmed = line.trim();
        if trimmed == "]" {
            break;
        }
        rented_books.push(parse_title(trimmed, scanner.number)?);
    }

    let closing = scanner.expect_line("the closing brace")?;
    if closing.trim() != "}" {
        return Err(CirculateError::ledger(
            scanner.number,
            format!("expected the closing brace, found {:?}", closing.trim()),
        ));
    }

    let id = ClientId::parse(&id_text)
        .map_err(|_| CirculateError::ledger(id_line, format!("invalid client id {:?}", id_text)))?;

    Ok(Client {
        id,
        name,
        password,
        phone_number,
        rented_books,
    })
}

fn expect_scalar<R: BufRead>(scanner: &mut LineScanner<R>, key: &str) -> CirculateResult<String> {
    let line = scanner.expect_line(&format!("the \"{}\" field", key))?;
    parse_scalar(line.trim(), key, scanner.number)
}

/// Parse a `"key": "value"` line with an optional trailing comma
fn parse_scalar(line: &str, key: &str, number: usize) -> CirculateResult<String> {
    let prefix = format!("\"{}\": ", key);
    let rest = line.strip_prefix(&prefix).ok_or_else(|| {
        CirculateError::ledger(
            number,
            format!("expected the \"{}\" field, found {:?}", key, line),
        )
    })?;
    let (value, tail) = take_quoted(rest, number)?;
    if !tail.is_empty() && tail != "," {
        return Err(CirculateError::ledger(
            number,
            format!("unexpected content {:?} after the \"{}\" field", tail, key),
        ));
    }
    Ok(value)
}

/// Parse one quoted book title line with an optional trailing comma
fn parse_title(line: &str, number: usize) -> CirculateResult<String> {
    let (title, tail) = take_quoted(line, number)?;
    if !tail.is_empty() && tail != "," {
        return Err(CirculateError::ledger(
            number,
            format!("unexpected content {:?} after a book title", tail),
        ));
    }
    Ok(title)
}

/// Take a quoted, backslash-escaped string off the front of `input`,
/// returning the unescaped value and whatever follows the closing quote
fn take_quoted(input: &str, number: usize) -> CirculateResult<(String, &str)> {
    let mut chars = input.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return Err(CirculateError::ledger(
            number,
            format!("expected a quoted value, found {:?}", input),
        ));
    }

    let mut value = String::new();
    let mut escaped = false;
    for (i, ch) in chars {
        if escaped {
            match ch {
                '"' | '\\' => value.push(ch),
                other => {
                    return Err(CirculateError::ledger(
                        number,
                        format!("unsupported escape sequence \\{}", other),
                    ))
                }
            }
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            return Ok((value, &input[i + 1..]));
        } else {
            value.push(ch);
        }
    }

    Err(CirculateError::ledger(
        number,
        "unterminated quoted value".to_string(),
    ))
}
