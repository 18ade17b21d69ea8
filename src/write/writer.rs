use std::io;

use smallvec::SmallVec;

use crate::error::Error;
use crate::num::number::{format_f32, format_f64, format_integer};
use crate::options::WriterOptions;
use crate::text::string::write_quoted_into;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    container: Container,
    has_items: bool,
    /// A property name was written and its value has not been.
    awaiting_value: bool,
}

/// Streaming JSON emitter over an in-memory buffer.
///
/// Tracks open containers so separators are placed automatically, and
/// rejects token sequences that would not form a single JSON document.
/// Calls must be sequenced by one owner; the writer is driven through
/// `&mut self`.
pub struct JsonWriter {
    buffer: Vec<u8>,
    options: WriterOptions,
    stack: SmallVec<[Frame; 16]>,
    root_written: bool,
    indent_unit: String,
    indent_cache: Vec<String>,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new(WriterOptions::default())
    }
}

impl JsonWriter {
    pub fn new(options: WriterOptions) -> Self {
        let indent_unit = match options.indent {
            Some(indent) if options.is_indented() => " ".repeat(indent.get_spaces()),
            _ => String::new(),
        };
        Self {
            buffer: Vec::new(),
            options,
            stack: SmallVec::new(),
            root_written: false,
            indent_unit,
            indent_cache: vec![String::new()],
        }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Number of containers currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Bytes written so far, including any incomplete document.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn start_object(&mut self) -> Result<()> {
        self.begin_value()?;
        self.buffer.push(b'{');
        self.stack.push(Frame {
            container: Container::Object,
            has_items: false,
            awaiting_value: false,
        });
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<()> {
        self.end_container(Container::Object, b'}')
    }

    pub fn start_array(&mut self) -> Result<()> {
        self.begin_value()?;
        self.buffer.push(b'[');
        self.stack.push(Frame {
            container: Container::Array,
            has_items: false,
            awaiting_value: false,
        });
        Ok(())
    }

    pub fn end_array(&mut self) -> Result<()> {
        self.end_container(Container::Array, b']')
    }

    pub fn write_property_name(&mut self, name: &str) -> Result<()> {
        let depth = self.stack.len();
        let Some(frame) = self.stack.last_mut() else {
            return Err(Error::write("property name written outside of an object"));
        };
        if frame.container != Container::Object {
            return Err(Error::write("property name written inside an array"));
        }
        if frame.awaiting_value {
            return Err(Error::write(format!(
                "property '{name}' written while the previous property has no value"
            )));
        }
        let separate = frame.has_items;
        frame.has_items = true;
        frame.awaiting_value = true;

        if separate {
            self.buffer.push(b',');
        }
        self.write_newline_indent(depth);
        write_quoted_into(&mut self.buffer, name);
        self.buffer.push(b':');
        if !self.indent_unit.is_empty() {
            self.buffer.push(b' ');
        }
        Ok(())
    }

    pub fn write_null_value(&mut self) -> Result<()> {
        self.begin_value()?;
        self.buffer.extend_from_slice(b"null");
        Ok(())
    }

    pub fn write_bool_value(&mut self, value: bool) -> Result<()> {
        self.begin_value()?;
        let literal: &[u8] = if value { b"true" } else { b"false" };
        self.buffer.extend_from_slice(literal);
        Ok(())
    }

    pub fn write_integer_value<I: itoa::Integer>(&mut self, value: I) -> Result<()> {
        self.begin_value()?;
        format_integer(value, &mut self.buffer);
        Ok(())
    }

    pub fn write_f64_value(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::write(format!("{value} cannot be written as a JSON number")));
        }
        self.begin_value()?;
        format_f64(value, &mut self.buffer);
        Ok(())
    }

    pub fn write_f32_value(&mut self, value: f32) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::write(format!("{value} cannot be written as a JSON number")));
        }
        self.begin_value()?;
        format_f32(value, &mut self.buffer);
        Ok(())
    }

    /// Writes pre-formatted number text verbatim. The caller guarantees the
    /// text is a valid JSON number.
    pub(crate) fn write_number_text(&mut self, text: &str) -> Result<()> {
        self.begin_value()?;
        self.buffer.extend_from_slice(text.as_bytes());
        Ok(())
    }

    pub fn write_str_value(&mut self, value: &str) -> Result<()> {
        self.begin_value()?;
        write_quoted_into(&mut self.buffer, value);
        Ok(())
    }

    pub fn write_null(&mut self, name: &str) -> Result<()> {
        self.write_property_name(name)?;
        self.write_null_value()
    }

    pub fn write_bool(&mut self, name: &str, value: bool) -> Result<()> {
        self.write_property_name(name)?;
        self.write_bool_value(value)
    }

    pub fn write_integer<I: itoa::Integer>(&mut self, name: &str, value: I) -> Result<()> {
        self.write_property_name(name)?;
        self.write_integer_value(value)
    }

    pub fn write_f64(&mut self, name: &str, value: f64) -> Result<()> {
        self.write_property_name(name)?;
        self.write_f64_value(value)
    }

    pub fn write_str(&mut self, name: &str, value: &str) -> Result<()> {
        self.write_property_name(name)?;
        self.write_str_value(value)
    }

    pub fn finish(self) -> Result<String> {
        let bytes = self.finish_bytes()?;
        String::from_utf8(bytes).map_err(|err| Error::write(err.to_string()))
    }

    pub fn finish_bytes(self) -> Result<Vec<u8>> {
        self.ensure_complete()?;
        Ok(self.buffer)
    }

    /// Copies the completed document into `out`.
    pub fn finish_to<W: io::Write>(self, mut out: W) -> Result<()> {
        let bytes = self.finish_bytes()?;
        out.write_all(&bytes)
            .and_then(|()| out.flush())
            .map_err(|err| Error::write(format!("failed to flush JSON output: {err}")))
    }

    fn ensure_complete(&self) -> Result<()> {
        if !self.stack.is_empty() {
            return Err(Error::write(format!(
                "{} container(s) still open",
                self.stack.len()
            )));
        }
        if !self.root_written {
            return Err(Error::write("no JSON value was written"));
        }
        Ok(())
    }

    fn begin_value(&mut self) -> Result<()> {
        let depth = self.stack.len();
        let Some(frame) = self.stack.last_mut() else {
            if self.root_written {
                return Err(Error::write("a JSON document holds a single root value"));
            }
            self.root_written = true;
            return Ok(());
        };

        match frame.container {
            Container::Object => {
                if !frame.awaiting_value {
                    return Err(Error::write("object values must follow a property name"));
                }
                frame.awaiting_value = false;
            }
            Container::Array => {
                let separate = frame.has_items;
                frame.has_items = true;
                if separate {
                    self.buffer.push(b',');
                }
                self.write_newline_indent(depth);
            }
        }
        Ok(())
    }

    fn end_container(&mut self, container: Container, close: u8) -> Result<()> {
        let Some(frame) = self.stack.last().copied() else {
            return Err(Error::write("no open container to close"));
        };
        if frame.container != container {
            return Err(Error::write(format!(
                "cannot close {container:?} while {:?} is open",
                frame.container
            )));
        }
        if frame.awaiting_value {
            return Err(Error::write("object closed while a property has no value"));
        }
        self.stack.pop();
        if frame.has_items {
            self.write_newline_indent(self.stack.len());
        }
        self.buffer.push(close);
        Ok(())
    }

    fn write_newline_indent(&mut self, depth: usize) {
        if self.indent_unit.is_empty() {
            return;
        }
        self.buffer.push(b'\n');
        if depth == 0 {
            return;
        }
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.buffer
            .extend_from_slice(self.indent_cache[depth].as_bytes());
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        while self.indent_cache.len() <= depth {
            let next = match self.indent_cache.last() {
                Some(prev) => {
                    let mut s = String::with_capacity(prev.len() + self.indent_unit.len());
                    s.push_str(prev);
                    s.push_str(&self.indent_unit);
                    s
                }
                None => String::new(),
            };
            self.indent_cache.push(next);
        }
    }
}
