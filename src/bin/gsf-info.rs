//! Print a summary of every record in a GSF file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use gsf_rs::{ByteSource, FramerConfig, RecordType, RecordView, SizeField, decode_header};

#[derive(Debug, Parser)]
#[clap(name = "gsf-info")]
#[clap(
    about = "Dump the record structure of a Generic Sensor Format file",
    long_about = None
)]
#[clap(version)]
struct Cli {
    /// GSF file to read.
    file: PathBuf,

    /// How the frame size word is counted.
    #[clap(value_enum, long, default_value_t = SizeFieldArg::Payload)]
    size_field: SizeFieldArg,

    /// Stop at the first record that fails to decode.
    #[clap(long)]
    fail_fast: bool,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum SizeFieldArg {
    /// Size counts payload bytes only
    #[default]
    Payload,
    /// Size also counts the type and checksum words
    Frame,
}

impl From<SizeFieldArg> for SizeField {
    fn from(arg: SizeFieldArg) -> Self {
        match arg {
            SizeFieldArg::Payload => SizeField::Payload,
            SizeFieldArg::Frame => SizeField::Frame,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gsf-info: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = ByteSource::open(&cli.file)?;
    let config = FramerConfig::new().with_size_field(cli.size_field.into());
    let mut framer = source.framer_with(config);
    log::debug!(
        "{}: {} bytes, size field counts {}",
        cli.file.display(),
        source.len(),
        framer.config().size_field
    );

    let first = framer
        .next()
        .context("no records in file")?
        .context("cannot frame first record")?;
    print_view(&first);
    if first.record_type() != RecordType::Header {
        bail!("first record is {}, expected HEADER", first.record_type());
    }
    let header = decode_header(first.payload()).context("cannot decode header")?;
    println!("header: {}.{}", header.version_major, header.version_minor);

    let mut total = 1usize;
    let mut undecodable = 0usize;
    for view in framer {
        let view = view.with_context(|| format!("after {total} records"))?;
        total += 1;
        print_view(&view);

        match view.decode() {
            Ok(record) if record.is_opaque() => {}
            Ok(record) => println!("  {record}"),
            Err(e) if cli.fail_fast => {
                return Err(e).with_context(|| {
                    format!("{} record at offset {}", view.record_type(), view.offset())
                });
            }
            Err(e) => {
                log::warn!(
                    "skipping {} record at offset {}: {e}",
                    view.record_type(),
                    view.offset()
                );
                undecodable += 1;
            }
        }
    }

    println!("records: {total} ({undecodable} undecodable)");
    Ok(())
}

fn print_view(view: &RecordView<'_>) {
    println!(
        "record_type: {}-{} size: {}",
        view.raw_type(),
        view.record_type(),
        view.size()
    );
}
