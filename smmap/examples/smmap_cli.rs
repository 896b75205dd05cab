#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

#[cfg(feature = "cli")]
use smmap::{
    file_io, parse_number, parse_range, Error, ErrorCategory, FormatCode, MapOptions, TypedView,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "SMMAP CLI - Inspect and edit files as typed element arrays")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct Target {
    /// Backing file
    path: std::path::PathBuf,

    /// Element format (b, B, h, H, i, I, l, L, f, d)
    #[arg(long, short)]
    format: FormatCode,

    /// Number of elements to map
    #[arg(long, short)]
    count: usize,

    /// Byte offset of the first element
    #[arg(long, default_value_t = 0)]
    offset: u64,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Create a zero-filled backing file
    Create {
        #[command(flatten)]
        target: Target,
    },
    /// Show mapping info
    Info {
        #[command(flatten)]
        target: Target,
    },
    /// Read one element
    Get {
        #[command(flatten)]
        target: Target,

        /// Element index; negative values are reported as out of range
        #[arg(long, allow_negative_numbers = true)]
        index: isize,
    },
    /// Overwrite one element
    Set {
        #[command(flatten)]
        target: Target,

        /// Element index; negative values are reported as out of range
        #[arg(long, allow_negative_numbers = true)]
        index: isize,

        /// Value literal, range-checked against the format
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Read a range of elements
    Slice {
        #[command(flatten)]
        target: Target,

        /// Element range (format: low:high, either side optional)
        #[arg(long, default_value = ":", allow_hyphen_values = true)]
        range: String,

        /// Print the values as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli.command) {
        eprintln!("Error: {err}");
        std::process::exit(exit_code(&err));
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example smmap_cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn run(command: &Commands) -> smmap::Result<()> {
    match command {
        Commands::Create { target } => {
            file_io::create_backing_file(&target.path, target.count, target.format, target.offset)?;
            println!(
                "Created {} ({} x '{}' at offset {})",
                target.path.display(),
                target.count,
                target.format,
                target.offset
            );
        }
        Commands::Info { target } => {
            let view = open(target, MapOptions::read_only())?;
            println!("File: {}", target.path.display());
            println!("Format: '{}' ({} bytes)", view.format_code(), view.descriptor().size);
            println!("Elements: {}", view.len()?);
            println!("Bytes: {} at offset {}", view.byte_len(), view.offset());
            let (min, max) = view.format_code().bounds();
            println!("Range: {min} ..= {max}");
        }
        Commands::Get { target, index } => {
            let view = open(target, MapOptions::read_only())?;
            println!("{}", view.get_item(*index)?);
        }
        Commands::Set {
            target,
            index,
            value,
        } => {
            let number = parse_number(value, target.format)?;
            let mut view = open(target, MapOptions::read_write())?;
            view.set_item(*index, number)?;
            println!("[{index}] = {}", view.get_item(*index)?);
        }
        Commands::Slice {
            target,
            range,
            json,
        } => {
            let (low, high) = parse_range(range)?;
            let view = open(target, MapOptions::read_only())?;
            let values = view.get_slice(low, high)?;
            if *json {
                match serde_json::to_string(&values) {
                    Ok(text) => println!("{text}"),
                    Err(err) => eprintln!("Failed to encode JSON: {err}"),
                }
            } else {
                for value in values {
                    println!("{value}");
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn open(target: &Target, options: MapOptions) -> smmap::Result<TypedView> {
    let options = options.with_offset(target.offset);
    file_io::open_path(&target.path, target.count, target.format, &options)
}

/// Distinct exit status per error category
///
/// Codes start at 3; 1 covers I/O failures and 2 is clap's usage error.
#[cfg(feature = "cli")]
fn exit_code(err: &Error) -> i32 {
    match err.as_core().map(|core| core.category()) {
        Some(ErrorCategory::Construction) => 3,
        Some(ErrorCategory::Lifecycle) => 4,
        Some(ErrorCategory::Bounds) => 5,
        Some(ErrorCategory::Access) => 6,
        Some(ErrorCategory::Value) => 7,
        Some(ErrorCategory::Unsupported) => 8,
        None => 1,
    }
}
