#![doc = include_str!("../README.md")]

mod buffer;
mod error;
mod record;
mod writer;

pub use buffer::{write_block, Buffer, IndentOptions, IndentType};
pub use error::{Error, Result, SchemaError, SchemaErrorKind};
pub use record::{read_document, Constant, Record, TypeAlias};
pub use writer::{RecordWriter, Summary};

/// Format a whole document, writing each block to `out` as soon as it is ready.
///
/// The document is parsed in full before anything is written. If a record turns out to be
/// malformed, the blocks before it have already been written and stay written.
pub fn write_records(
    src: &str,
    indent: IndentOptions,
    out: impl std::io::Write,
) -> Result<Summary> {
    let records = read_document(src)?;

    let mut writer = RecordWriter::new(out, indent);
    for (index, record) in records.iter().enumerate() {
        if let Err(err) = writer.write_value(index, record) {
            // keep whatever made it out before the failure
            if let Err(flush_err) = writer.finish() {
                tracing::warn!("failed to flush blocks written before the error: {flush_err}");
            }
            return Err(err);
        }
    }

    writer.finish()
}

/// Format a whole document into a string.
pub fn fmt_records(src: &str, indent: IndentOptions) -> Result<String> {
    let mut out = Vec::new();
    write_records(src, indent, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Format records that are already typed.
pub fn format_records<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    indent: IndentOptions,
) -> Result<String> {
    let mut writer = RecordWriter::new(Vec::new(), indent);
    for record in records {
        writer.write_record(record)?;
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
