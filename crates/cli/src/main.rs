//! RV32IMF decoder CLI.
//!
//! This binary runs instruction words through the decode front end. It performs:
//! 1. **Word decode:** Decode words given on the command line.
//! 2. **File decode:** Decode whitespace-separated words from a text file, with an
//!    optional statistics summary.
//!
//! Output is one line per word (pc, raw word, mnemonic, unit, strobe) or, with
//! `--json`, one JSON object per line holding the micro-op and its signal bundle.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rvdecode_core::common::constants::INSTRUCTION_SIZE_32;
use rvdecode_core::common::parse_word;
use rvdecode_core::core::pipeline::ports::DispatchStrobes;
use rvdecode_core::isa::disasm::disassemble;
use rvdecode_core::{DecodeError, DecodeOutput, DecodeStats, Decoder, DecoderConfig};

#[derive(Parser, Debug)]
#[command(
    name = "rvdecode",
    author,
    version,
    about = "RV32IMF out-of-order decode front end",
    long_about = "Decode RV32IMF instruction words into micro-ops, register-port requests and dispatch strobes.\n\nWords are hex (with or without 0x; eight bare digits are read as hex) or decimal.\n\nExamples:\n  rvdecode word 0x002081b3 0x18208243\n  rvdecode word --json --pc 0x80000000 0x00208863\n  rvdecode file program.txt --stats\n  rvdecode -vv file program.txt --config strict.json"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode instruction words given as arguments.
    Word {
        /// Instruction words to decode, in program order.
        #[arg(required = true)]
        words: Vec<String>,

        #[command(flatten)]
        opts: DecodeArgs,
    },

    /// Decode instruction words read from a text file.
    File {
        /// Whitespace-separated words; `#` starts a comment running to end of line.
        path: PathBuf,

        /// Print decode statistics after the listing.
        #[arg(long)]
        stats: bool,

        #[command(flatten)]
        opts: DecodeArgs,
    },
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Program counter of the first word; advances by 4 per word.
    #[arg(long, default_value = "0", value_parser = parse_pc)]
    pc: u32,

    /// Print each decode result as a JSON object.
    #[arg(long)]
    json: bool,

    /// Decoder configuration (JSON).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn parse_pc(s: &str) -> Result<u32, String> {
    parse_word(s).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the fmt subscriber on stderr. `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Word { words, opts } => {
            let words = words
                .iter()
                .map(|w| parse_word(w))
                .collect::<Result<Vec<_>, _>>()?;
            let _ = decode_stream(&words, &opts)?;
            Ok(())
        }
        Commands::File { path, stats, opts } => {
            let text = read(&path)?;
            let words = parse_listing(&text)?;
            info!(path = %path.display(), words = words.len(), "decoding file");
            let summary = decode_stream(&words, &opts)?;
            if stats {
                let mut out = io::stdout().lock();
                if opts.json {
                    writeln!(out, "{}", serde_json::to_string(&summary)?)?;
                } else {
                    writeln!(out, "{summary}")?;
                }
            }
            Ok(())
        }
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Splits a listing into words, dropping `#` comments.
fn parse_listing(text: &str) -> Result<Vec<u32>, DecodeError> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(code, _)| code))
        .flat_map(str::split_whitespace)
        .map(parse_word)
        .collect()
}

fn load_config(path: Option<&Path>) -> Result<DecoderConfig, CliError> {
    let Some(path) = path else {
        return Ok(DecoderConfig::default());
    };
    let config = DecoderConfig::from_json(&read(path)?)?;
    debug!(path = %path.display(), ?config, "loaded decoder configuration");
    Ok(config)
}

#[derive(Serialize)]
struct JsonLine<'a> {
    mnemonic: String,
    #[serde(flatten)]
    out: &'a DecodeOutput,
}

fn decode_stream(words: &[u32], opts: &DecodeArgs) -> Result<DecodeStats, CliError> {
    let decoder = Decoder::new(load_config(opts.config.as_deref())?);
    let mut stats = DecodeStats::new();
    let mut out = io::stdout().lock();
    let mut pc = opts.pc;

    for &word in words {
        let decoded = decoder.decode(true, pc, word);
        stats.record(&decoded);
        let mnemonic = disassemble(&decoded.uop);
        if opts.json {
            let line = JsonLine {
                mnemonic,
                out: &decoded,
            };
            writeln!(out, "{}", serde_json::to_string(&line)?)?;
        } else {
            let unit = format!("{:?}", decoded.uop.exec_unit);
            let strobe = strobe_name(&decoded.signals.dispatch);
            writeln!(out, "{pc:#010x}: {word:08x}  {mnemonic:<28} {unit:<8} {strobe}")?;
        }
        pc = pc.wrapping_add(INSTRUCTION_SIZE_32);
    }
    Ok(stats)
}

const fn strobe_name(d: &DispatchStrobes) -> &'static str {
    if d.alu {
        "alu"
    } else if d.branch {
        "branch"
    } else if d.load_store {
        "load_store"
    } else if d.fp_alu {
        "fp_alu"
    } else if d.fp_mul {
        "fp_mul"
    } else if d.fp_div {
        "fp_div"
    } else {
        "-"
    }
}
