//! The output buffer blocks are written into.

use crate::{Constant, Record, TypeAlias};
use std::fmt::{Result, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndentType {
    #[default]
    Tabs,
    Spaces,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentOptions {
    indent_string: String,
}

impl IndentOptions {
    pub fn new(typ: IndentType, width: usize) -> Self {
        assert_ne!(width, 0, "Cannot have an indent width of 0");
        Self {
            indent_string: match typ {
                IndentType::Tabs => "\t".into(),
                IndentType::Spaces => " ".repeat(width),
            },
        }
    }

    /// Gets a string containing one indent worth of whitespace
    pub fn indent_str(&self) -> &str {
        &self.indent_string
    }
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self::new(IndentType::Tabs, 4)
    }
}

#[derive(Debug, Default)]
pub struct Buffer {
    pub buf: String,
    pub indent_level: usize,
    pub indent: IndentOptions,
}

impl Buffer {
    pub fn new(indent: IndentOptions) -> Self {
        Self {
            indent,
            ..Default::default()
        }
    }

    pub fn tab(&mut self) -> Result {
        self.write_tabs(self.indent_level)
    }

    pub fn write_tabs(&mut self, num: usize) -> Result {
        for _ in 0..num {
            self.buf.push_str(self.indent.indent_str())
        }
        Ok(())
    }

    pub fn new_line(&mut self) -> Result {
        writeln!(self.buf)
    }

    /// Write a whole record, from its opening line to the blank line that separates it from the
    /// next block.
    pub fn write_record(&mut self, record: &Record) -> Result {
        writeln!(self.buf, "{} {{", record.name)?;

        self.indent_level += 1;
        for alias in &record.types {
            self.write_alias(alias)?;
        }
        self.indent_level -= 1;

        // constants sit at the left margin, unlike aliases
        for constant in &record.constants {
            self.write_constant(constant)?;
        }

        writeln!(self.buf, "}};")?;
        self.new_line()
    }

    pub fn write_alias(&mut self, TypeAlias { from, to }: &TypeAlias) -> Result {
        self.tab()?;
        writeln!(self.buf, "using {to} = {from};")
    }

    pub fn write_constant(&mut self, Constant { ty, name, value }: &Constant) -> Result {
        writeln!(self.buf, "static constexpr {ty} {name} = {value};")
    }

    pub fn consume(self) -> String {
        self.buf
    }
}

/// Render one record as a block.
pub fn write_block(
    record: &Record,
    indent: IndentOptions,
) -> std::result::Result<String, std::fmt::Error> {
    let mut buffer = Buffer::new(indent);
    buffer.write_record(record)?;
    Ok(buffer.consume())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_the_example_block() {
        let record = Record::new("Foo")
            .with_alias("int", "Bar")
            .with_constant("int", "X", "1");

        let out = write_block(&record, IndentOptions::default()).unwrap();
        assert_eq!(
            out,
            "Foo {\n\tusing Bar = int;\nstatic constexpr int X = 1;\n};\n\n"
        );
    }

    #[test]
    fn empty_records_are_just_braces() {
        let out = write_block(&Record::new("X"), IndentOptions::default()).unwrap();
        assert_eq!(out, "X {\n};\n\n");
    }

    #[test]
    fn space_indentation() {
        let record = Record::new("S")
            .with_alias("unsigned", "size_type")
            .with_constant("bool", "is_signed", "false");

        let out = write_block(&record, IndentOptions::new(IndentType::Spaces, 2)).unwrap();
        assert_eq!(
            out,
            "S {\n  using size_type = unsigned;\nstatic constexpr bool is_signed = false;\n};\n\n"
        );
    }

    #[test]
    fn constants_ignore_the_indent_level() {
        let mut buffer = Buffer::new(IndentOptions::default());
        buffer.indent_level = 2;
        buffer
            .write_constant(&Constant {
                ty: "int".into(),
                name: "N".into(),
                value: "4".into(),
            })
            .unwrap();
        assert_eq!(buffer.consume(), "static constexpr int N = 4;\n");
    }

    #[test]
    fn indent_strings() {
        let indent = IndentOptions::new(IndentType::Tabs, 4);
        assert_eq!(indent.indent_str(), "\t");

        let indent = IndentOptions::new(IndentType::Spaces, 3);
        assert_eq!(indent.indent_str(), "   ");
    }
}
