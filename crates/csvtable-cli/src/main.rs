use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl From<DelimArg> for csvtable::Delimiter {
    fn from(arg: DelimArg) -> Self {
        match arg {
            DelimArg::Comma => csvtable::Delimiter::Comma,
            DelimArg::Tab => csvtable::Delimiter::Tab,
            DelimArg::Pipe => csvtable::Delimiter::Pipe,
            DelimArg::Semicolon => csvtable::Delimiter::Semicolon,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "csvtable",
    about = "Clean up, sort and pretty-print CSV tables",
    version
)]
struct Args {
    /// Field delimiter of the input
    #[arg(long, value_enum, default_value_t = DelimArg::Comma, conflicts_with = "delimiter_char")]
    delimiter: DelimArg,

    /// Any single-character input delimiter
    #[arg(long)]
    delimiter_char: Option<char>,

    /// Delimiter for the output (defaults to the input delimiter)
    #[arg(long, value_enum)]
    output_delimiter: Option<DelimArg>,

    /// Drop leading and trailing columns that are empty in every row
    #[arg(long, default_value_t = false)]
    trim: bool,

    /// Sort rows by this zero-based column
    #[arg(long, value_name = "COLUMN")]
    sort_by: Option<usize>,

    /// Let sorting move the first (header) row too
    #[arg(long, default_value_t = false, requires = "sort_by")]
    include_header: bool,

    /// Pad columns to a common width
    #[arg(long, default_value_t = false, conflicts_with = "json")]
    aligned: bool,

    /// Emit the table as a JSON array of arrays
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false, requires = "json")]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let delimiter = match args.delimiter_char {
        Some(c) => csvtable::Delimiter::from(c),
        None => args.delimiter.into(),
    };
    let options = csvtable::Options {
        delimiter,
        aligned: args.aligned,
    };

    let mut table = csvtable::decode_from_str(&buf, &options);
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "read table"
    );

    if args.trim {
        table.trim();
    }
    if let Some(column) = args.sort_by {
        table.sort_by_column(column, args.include_header)?;
    }
    if let Some(out) = args.output_delimiter {
        table.set_delimiter(csvtable::Delimiter::from(out).as_char());
    }

    let mut out = stdout().lock();
    if args.json {
        let s = csvtable::encode::json::to_json_string(&table, args.pretty)?;
        writeln!(out, "{}", s)?;
    } else if !table.is_empty() {
        csvtable::encode_to_writer(&mut out, &table, &options)?;
        writeln!(out)?;
    }

    Ok(())
}
