//! Pretty-printing of structured values for console inspection
//!
//! Values are rendered from the `serde_json` data model. A value that fits
//! in the remaining line width, after reserving room for the closing
//! brackets and separator that follow it, is printed on one line.
//! Otherwise a container keeps its first element on the bracket line
//! (padded out to the indent), puts each further element on its own line
//! four columns deeper than the opening bracket, and closes on the line of
//! its last element:
//!
//! ```text
//! {   'readings': [   21.5,
//!                     21.7],
//!     'sensor': 'bme280'}
//! ```
//!
//! Strings that do not fit are split into adjacent literals, first after
//! each line break and then between words. A split string at the top level
//! is wrapped in parentheses.

use serde_json::Value;
use std::fmt::Write as _;
use std::io::{self, Write};

pub const DEFAULT_INDENT: usize = 4;
pub const DEFAULT_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyPrinter {
    indent: usize,
    width: usize,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl PrettyPrinter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line width used to decide when a value is broken up
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Render `value` without a trailing line break.
    ///
    /// # Example
    ///
    /// ```
    /// use f451_logger::PrettyPrinter;
    /// use serde_json::json;
    ///
    /// let printer = PrettyPrinter::new();
    /// assert_eq!(printer.format(&json!("Hello world")), "'Hello world'");
    /// assert_eq!(printer.format(&json!({"a": [1, 2]})), "{'a': [1, 2]}");
    ///
    /// let narrow = PrettyPrinter::new().with_width(10);
    /// assert_eq!(narrow.format(&json!([1000, 2000])), "[   1000,\n    2000]");
    /// ```
    #[must_use]
    pub fn format(&self, value: &Value) -> String {
        let mut out = String::new();
        self.render(value, 0, 0, 0, &mut out);
        out
    }

    /// Write the rendering of `value` followed by a line break.
    pub fn print<W: Write + ?Sized>(&self, writer: &mut W, value: &Value) -> io::Result<()> {
        writeln!(writer, "{}", self.format(value))
    }

    /// `column` is where the value starts; `allowance` is the number of
    /// characters that will follow it on its last line.
    fn render(&self, value: &Value, column: usize, allowance: usize, depth: usize, out: &mut String) {
        let flat = compact(value);
        if column + allowance + width_of(&flat) <= self.width {
            out.push_str(&flat);
            return;
        }

        let depth = depth + 1;
        match value {
            Value::Object(map) => self.render_map(map, column, allowance, depth, out),
            Value::Array(items) => self.render_list(items, column, allowance, depth, out),
            Value::String(s) => self.render_str(s, column, allowance, depth, out),
            _ => out.push_str(&flat),
        }
    }

    fn render_map(
        &self,
        map: &serde_json::Map<String, Value>,
        column: usize,
        allowance: usize,
        depth: usize,
        out: &mut String,
    ) {
        out.push('{');
        self.pad_after_bracket(out);

        let column = column + self.indent;
        let allowance = allowance + 1;
        let entries = sorted_entries(map);
        let last = entries.len().saturating_sub(1);
        for (i, (key, item)) in entries.into_iter().enumerate() {
            let key = quote(key);
            out.push_str(&key);
            out.push_str(": ");
            let item_allowance = if i == last { allowance } else { 1 };
            self.render(item, column + width_of(&key) + 2, item_allowance, depth, out);
            if i != last {
                out.push_str(",\n");
                push_spaces(out, column);
            }
        }
        out.push('}');
    }

    fn render_list(
        &self,
        items: &[Value],
        column: usize,
        allowance: usize,
        depth: usize,
        out: &mut String,
    ) {
        out.push('[');
        self.pad_after_bracket(out);

        let column = column + self.indent;
        let allowance = allowance + 1;
        let last = items.len().saturating_sub(1);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
                push_spaces(out, column);
            }
            let item_allowance = if i == last { allowance } else { 1 };
            self.render(item, column, item_allowance, depth, out);
        }
        out.push(']');
    }

    fn render_str(&self, s: &str, column: usize, allowance: usize, depth: usize, out: &mut String) {
        if s.is_empty() {
            out.push_str(&quote(s));
            return;
        }

        // A top-level split string gets parentheses, which take one column on each side.
        let parenthesize = depth == 1;
        let (column, allowance) = if parenthesize {
            (column + 1, allowance + 1)
        } else {
            (column, allowance)
        };

        let max_width = self.width as isize - column as isize;
        let allowance = allowance as isize;
        let lines = split_lines(s);
        let mut chunks = Vec::new();
        let mut line_limit = max_width;

        for (i, line) in lines.iter().enumerate() {
            let last_line = i + 1 == lines.len();
            if last_line {
                line_limit -= allowance;
            }

            let rep = quote(line);
            if width_of(&rep) as isize <= line_limit {
                chunks.push(rep);
                continue;
            }

            let parts = word_parts(line);
            let mut part_limit = max_width;
            let mut current = String::new();
            for (j, part) in parts.iter().enumerate() {
                if last_line && j + 1 == parts.len() {
                    part_limit -= allowance;
                }
                let candidate = format!("{}{}", current, part);
                if width_of(&quote(&candidate)) as isize > part_limit {
                    if !current.is_empty() {
                        chunks.push(quote(&current));
                    }
                    current = part.to_string();
                } else {
                    current = candidate;
                }
            }
            if !current.is_empty() {
                chunks.push(quote(&current));
            }
        }

        if chunks.len() == 1 {
            out.push_str(&chunks[0]);
            return;
        }

        if parenthesize {
            out.push('(');
        }
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
                push_spaces(out, column);
            }
            out.push_str(chunk);
        }
        if parenthesize {
            out.push(')');
        }
    }

    fn pad_after_bracket(&self, out: &mut String) {
        if self.indent > 1 {
            push_spaces(out, self.indent - 1);
        }
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

fn width_of(s: &str) -> usize {
    s.chars().count()
}

fn sorted_entries(map: &serde_json::Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Split after each `\n`, `\r\n` or `\r`, keeping the terminators.
fn split_lines(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => Some(i),
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some(i + 1),
            b'\r' => Some(i),
            _ => None,
        };
        if let Some(end) = end {
            lines.push(&s[start..=end]);
            start = end + 1;
            i = end;
        }
        i += 1;
    }
    if start < s.len() {
        lines.push(&s[start..]);
    }
    lines
}

/// Split a line into words, each carrying the whitespace that follows it.
fn word_parts(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_space = false;
    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            in_space = true;
        } else if in_space {
            parts.push(&line[start..i]);
            start = i;
            in_space = false;
        }
    }
    if start < line.len() {
        parts.push(&line[start..]);
    }
    parts
}

/// Single-line rendering
fn compact(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(compact).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = sorted_entries(map)
                .into_iter()
                .map(|(k, v)| format!("{}: {}", quote(k), compact(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

/// Quote a string literal. Single quotes unless the text holds a single
/// quote and no double quote.
fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}
