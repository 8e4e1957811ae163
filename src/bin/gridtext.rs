//! gridtext CLI - convert table descriptions to Markdown, CSV, TSV or JSON

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use serde::Deserialize;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use gridtext::{
    convert_table_with_settings, ConversionResult, ConversionWarning, TableFormat, TableSettings,
    TableSource,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gridtext")]
#[command(version)]
#[command(about = "Convert structured tables to Markdown, CSV, TSV or JSON", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file with a JSON table description, or an array of them
    /// (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Target format: markdown, csv, tsv or json (unknown values fall back to markdown)
    #[arg(short, long)]
    format: Option<String>,

    /// JSON text written for empty cells in json output
    #[arg(long)]
    empty_cell_json: Option<String>,

    /// Settings file (`{"format": ..., "emptyCellJson": ...}`); flags take precedence
    #[arg(long)]
    settings: Option<String>,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored warning output
    #[arg(long)]
    no_color: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show version and supported formats
    Info,
}

/// One table or a list of tables
#[cfg(feature = "cli")]
#[derive(Deserialize)]
#[serde(untagged)]
enum TableInput {
    Many(Vec<TableSource>),
    One(TableSource),
}

#[cfg(feature = "cli")]
impl TableInput {
    fn into_tables(self) -> Vec<TableSource> {
        match self {
            TableInput::Many(tables) => tables,
            TableInput::One(table) => vec![table],
        }
    }
}

/// A warning together with the table it came from
#[cfg(feature = "cli")]
struct TableWarning {
    table: usize,
    warning: ConversionWarning,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Info) = cli.command {
        print_info();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> ConversionResult<()> {
    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let tables = serde_json::from_str::<TableInput>(&input)?.into_tables();

    // Settings file first, then flags
    let mut settings = match cli.settings {
        Some(ref path) => serde_json::from_str::<TableSettings>(&fs::read_to_string(path)?)?,
        None => TableSettings::default(),
    };
    if cli.format.is_some() {
        settings.format = cli.format.clone();
    }
    if cli.empty_cell_json.is_some() {
        settings.empty_cell_json = cli.empty_cell_json.clone();
    }

    let mut contents = Vec::with_capacity(tables.len());
    let mut warnings = Vec::new();

    for (table_idx, table) in tables.iter().enumerate() {
        let output = convert_table_with_settings(table, &settings);
        warnings.extend(output.warnings.into_iter().map(|warning| TableWarning {
            table: table_idx,
            warning,
        }));
        if !output.content.is_empty() {
            contents.push(output.content);
        }
    }

    // Print warnings to stderr (unless quiet mode)
    if !cli.quiet && !warnings.is_empty() {
        print_warnings_to_stderr(&warnings, !cli.no_color);
    }

    // Check strict mode
    if cli.strict && !warnings.is_empty() {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            warnings.len()
        );
        std::process::exit(1);
    }

    let result = contents.join("\n\n");

    // Output
    match cli.output {
        Some(ref path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result)?;
            if warnings.is_empty() {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    warnings.len()
                );
            }
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_info() {
    println!("gridtext - structured table conversion");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Formats:");
    for format in TableFormat::ALL {
        println!("  - {}", format);
    }
    println!();
    println!("Features:");
    println!("  ✓ colspan / rowspan resolution");
    println!("  ✓ Header detection from thead / tbody structure");
    println!("  ✓ Configurable empty-cell literal for JSON");
    println!();
}

/// Print warnings to stderr with optional color coding
#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[TableWarning], use_color: bool) {
    let (yellow, reset) = if use_color {
        ("\x1b[33m", "\x1b[0m")
    } else {
        ("", "")
    };

    eprintln!();
    eprintln!("{}Conversion Warnings ({}):{}", yellow, warnings.len(), reset);
    eprintln!();

    for item in warnings {
        eprintln!("  {}[table {}]{} {}", yellow, item.table, reset, item.warning);
    }
    eprintln!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install gridtext --features cli");
    eprintln!("  gridtext [OPTIONS] [INPUT_FILE]");
}
