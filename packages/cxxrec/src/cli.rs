use crate::{Result, StructuredOutput};
use clap::Parser;
use cxx_records::{IndentOptions, IndentType};
use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
};

/// Format gathered C++ records as alias and constant blocks.
///
/// With no arguments, reads a json array of records from stdin and writes the blocks to stdout.
#[derive(Parser, Clone, Debug, Default)]
#[clap(name = "cxxrec", version)]
pub(crate) struct Cli {
    /// Input file, `-` for stdin
    #[clap(short, long)]
    pub(crate) file: Option<PathBuf>,

    /// Input json, passed directly
    #[clap(short, long, conflicts_with = "file")]
    pub(crate) raw: Option<String>,

    /// Output file, stdout if not present
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Indent type aliases with this many spaces instead of a tab
    #[clap(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub(crate) indent_spaces: Option<u16>,

    #[clap(flatten)]
    pub(crate) verbosity: Verbosity,
}

#[derive(Parser, Clone, Debug, Default)]
pub(crate) struct Verbosity {
    /// Use verbose output [default: false]
    #[clap(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Use trace output [default: false]
    #[clap(long, global = true)]
    pub(crate) trace: bool,

    /// Use quiet output - only show errors [default: false]
    #[clap(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        conflicts_with = "trace"
    )]
    pub(crate) quiet: bool,

    /// Log the outcome of the run as json on stderr
    #[clap(long, global = true)]
    pub(crate) json_output: bool,
}

impl Cli {
    pub(crate) fn format(self) -> Result<StructuredOutput> {
        // Get the right input for the formatting
        let contents = determine_input(self.file, self.raw)?;

        let indent = match self.indent_spaces {
            Some(spaces) => IndentOptions::new(IndentType::Spaces, spaces.into()),
            None => IndentOptions::default(),
        };

        let out: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout().lock()),
        };

        let summary = cxx_records::write_records(&contents, indent, BufWriter::new(out))?;

        tracing::debug!(
            "formatted {} records, skipped {} duplicates",
            summary.emitted,
            summary.skipped
        );

        Ok(summary.into())
    }
}

fn determine_input(file: Option<PathBuf>, raw: Option<String>) -> Result<String> {
    use std::io::IsTerminal as _;

    // Make sure not both are specified
    if file.is_some() && raw.is_some() {
        return Err(anyhow::anyhow!("Only one of --file or --raw should be specified.").into());
    }

    if let Some(raw) = raw {
        return Ok(raw);
    }

    if let Some(file) = file.filter(|file| file.as_os_str() != "-") {
        return Ok(std::fs::read_to_string(file)?);
    }

    if io::stdin().is_terminal() {
        tracing::warn!("reading records from a terminal, end the input with ctrl-d");
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
