use crate::{buffer::write_block, IndentOptions, Record, Result};
use serde_json::Value;
use std::{collections::HashSet, io};

/// Writes each distinct record once, in the order records are first seen.
///
/// The writer owns the set of names it has already emitted, so a fresh writer is a fresh run.
#[derive(Debug)]
pub struct RecordWriter<W> {
    out: W,
    indent: IndentOptions,
    seen: HashSet<String>,
    summary: Summary,
}

/// Counts for one run of a [`RecordWriter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub emitted: usize,
    pub skipped: usize,
}

impl<W: io::Write> RecordWriter<W> {
    pub fn new(out: W, indent: IndentOptions) -> Self {
        Self {
            out,
            indent,
            seen: HashSet::new(),
            summary: Summary::default(),
        }
    }

    /// Write a typed record unless a record with the same name was written before.
    ///
    /// Returns whether a block was written.
    pub fn write_record(&mut self, record: &Record) -> Result<bool> {
        if self.seen.contains(&record.name) {
            self.skip(&record.name);
            return Ok(false);
        }

        self.emit(record)?;
        Ok(true)
    }

    /// Write the raw record found at `index` of a document.
    ///
    /// Only the name is read before the duplicate check. A duplicate is dropped without looking
    /// at the rest of its fields, and a new record is fully read before any of it is written.
    pub fn write_value(&mut self, index: usize, value: &Value) -> Result<bool> {
        let name = Record::name_of(index, value)?;

        if self.seen.contains(name) {
            self.skip(name);
            return Ok(false);
        }

        let record = Record::from_value(index, value)?;
        self.emit(&record)?;
        Ok(true)
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Flush the sink and hand back the counts for this run.
    pub fn finish(mut self) -> Result<Summary> {
        self.out.flush()?;
        Ok(self.summary)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, record: &Record) -> Result<()> {
        let block = write_block(record, self.indent.clone())?;
        self.out.write_all(block.as_bytes())?;

        tracing::debug!(
            "wrote {} with {} aliases and {} constants",
            record.name,
            record.types.len(),
            record.constants.len()
        );

        self.seen.insert(record.name.clone());
        self.summary.emitted += 1;
        Ok(())
    }

    fn skip(&mut self, name: &str) {
        tracing::debug!("skipping duplicate record {name}");
        self.summary.skipped += 1;
    }
}
