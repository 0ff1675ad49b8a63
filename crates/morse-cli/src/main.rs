//! Command line Morse transcoder.
//!
//! ```text
//! morse encode "Hello world"
//! morse --tables data/tables.json --table Cyrillic decode ".../---/.../"
//! echo "sos" | morse encode
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};
use morse_core::{CaseFold, EmptyCode, Transcoder};
use morse_tables::TableCatalog;

/// Translate between plain text and Morse code.
#[derive(Parser)]
#[command(name = "morse", version, about)]
struct Cli {
    /// JSON file of named tables (built-in ITU table when unset)
    #[arg(long, env = "MORSE_TABLES", global = true)]
    tables: Option<PathBuf>,

    /// Table to use (defaults to the first one defined)
    #[arg(long, global = true)]
    table: Option<String>,

    /// Case convention applied to text before lookup
    #[arg(long, value_enum, default_value_t = Case::Upper, global = true)]
    case: Case,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text to Morse code
    Encode {
        /// Text to encode (stdin when omitted)
        text: Option<String>,
    },
    /// Decode Morse code to text
    Decode {
        /// Code to decode (stdin when omitted)
        code: Option<String>,

        /// Emit nothing for the empty code between two delimiters
        #[arg(long)]
        skip_empty: bool,
    },
    /// List the available tables
    Tables {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Case {
    Upper,
    Lower,
    Preserve,
}

impl From<Case> for CaseFold {
    fn from(case: Case) -> Self {
        match case {
            Case::Upper => Self::Upper,
            Case::Lower => Self::Lower,
            Case::Preserve => Self::Preserve,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        tables,
        table,
        case,
        command,
        ..
    } = cli;

    let catalog = load_catalog(tables.as_deref())?;

    match command {
        Command::Tables { json } => list_tables(&catalog, json)?,
        Command::Encode { text } => {
            let transcoder = transcoder(&catalog, table.as_deref(), case)?;
            println!("{}", transcoder.encode(&input(text)?));
        }
        Command::Decode { code, skip_empty } => {
            let transcoder = transcoder(&catalog, table.as_deref(), case)?;
            let empty = if skip_empty {
                EmptyCode::Skip
            } else {
                EmptyCode::Escape
            };
            println!("{}", transcoder.decode_with(&input(code)?, empty));
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<TableCatalog, morse_tables::CatalogError> {
    match path {
        Some(path) => TableCatalog::from_path(path),
        None => Ok(TableCatalog::builtin()),
    }
}

fn transcoder(
    catalog: &TableCatalog,
    name: Option<&str>,
    case: Case,
) -> Result<Transcoder, morse_tables::CatalogError> {
    let (name, table) = match name {
        Some(name) => (name, catalog.select(name)?),
        None => catalog.default_table(),
    };
    debug!("using table {name:?} with {case:?} case");
    Ok(Transcoder::new(table.clone().with_case_fold(case.into())))
}

/// Argument text, or all of stdin minus one trailing line break.
fn input(arg: Option<String>) -> io::Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn list_tables(catalog: &TableCatalog, json: bool) -> Result<(), serde_json::Error> {
    let summaries = catalog.summaries();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in summaries {
        let marker = if summary.default { '*' } else { ' ' };
        print!("{marker} {} ({} characters)", summary.name, summary.characters);
        if !summary.shadowed.is_empty() {
            let shadowed: String = summary.shadowed.iter().collect();
            print!(", not decodable: {shadowed}");
        }
        println!();
    }
    Ok(())
}
