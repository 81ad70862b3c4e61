//! `bch` binary: generate BCH codes, encode messages and decode received words
//!
//! Input and output are packed bits (MSB first) unless `-i`/`-o` select
//! polynomial text. Data goes to stdout, diagnostics to stderr.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use bchrs::bits::{format_poly_text, pack_bits, parse_poly_text, trim_trailing_zeros, unpack_bits};
use bchrs::reporters::ConsoleBlockReporter;
use bchrs::{decode_blocks, encode_blocks, generate, load_code, save_code, BlockConfig, Code};
use log::{info, LevelFilter};

fn main() -> Result<()> {
    let matches = bchrs::parse_args();

    match matches.subcommand() {
        Some(("gen", sub_matches)) => {
            init_logging(sub_matches);
            handle_gen(sub_matches)
        }
        Some(("enc", sub_matches)) => {
            init_logging(sub_matches);
            handle_enc(sub_matches)
        }
        Some(("dec", sub_matches)) => {
            init_logging(sub_matches);
            handle_dec(sub_matches)
        }
        Some((cmd, _)) => anyhow::bail!("Unknown command: {}", cmd),
        None => anyhow::bail!("No command specified, use 'bch --help' for usage information"),
    }
}

fn init_logging(matches: &clap::ArgMatches) {
    let level = if matches.get_flag("debug") {
        LevelFilter::Debug
    } else if matches.get_flag("verbose") {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn handle_gen(matches: &clap::ArgMatches) -> Result<()> {
    let n = *matches.get_one::<usize>("n").context("n is required")?;
    let b = *matches.get_one::<usize>("b").context("b is required")?;
    let d = *matches.get_one::<usize>("d").context("d is required")?;
    let code_file = matches
        .get_one::<String>("code_file")
        .context("CODE_FILE is required")?;

    let code = generate(n, b, d)
        .with_context(|| format!("Failed to generate code for n={}, b={}, d={}", n, b, d))?;

    info!("{}", code);
    info!("r(x) = {}", code.field_poly());
    info!("g(x) = {}", code.generator());

    save_code(code_file, &code).with_context(|| format!("Failed to write {}", code_file))?;
    Ok(())
}

fn handle_enc(matches: &clap::ArgMatches) -> Result<()> {
    let code = load(matches)?;
    let bits = read_input(matches)?;

    let output = if matches.get_flag("block") {
        let reporter = ConsoleBlockReporter::new(!matches.get_flag("verbose"));
        encode_blocks(&code, &bits, &BlockConfig::from_args(matches), &reporter)
            .context("Failed to encode blocks")?
    } else {
        code.encode_bits(trim_trailing_zeros(&bits))
            .context("Failed to encode message")?
    };

    write_output(matches, &output)
}

fn handle_dec(matches: &clap::ArgMatches) -> Result<()> {
    let code = load(matches)?;
    let bits = read_input(matches)?;

    let output = if matches.get_flag("block") {
        let reporter = ConsoleBlockReporter::new(!matches.get_flag("verbose"));
        let decoded = decode_blocks(&code, &bits, &BlockConfig::from_args(matches), &reporter)
            .context("Failed to decode blocks")?;
        info!(
            "Decoded {} block(s), {} needed repair",
            decoded.blocks,
            decoded.corrections.len()
        );
        decoded.bits
    } else {
        code.decode_bits(trim_trailing_zeros(&bits))
            .context("Failed to decode received word")?
    };

    write_output(matches, &output)
}

fn load(matches: &clap::ArgMatches) -> Result<Code> {
    let code_file = matches
        .get_one::<String>("code_file")
        .context("CODE_FILE is required")?;
    let code = load_code(code_file).with_context(|| format!("Failed to load {}", code_file))?;
    info!("Loaded {}", code);
    Ok(code)
}

/// Read FILE, or stdin when FILE is absent or `-`, as coefficients
fn read_input(matches: &clap::ArgMatches) -> Result<Vec<u8>> {
    let raw = match matches.get_one::<String>("input").map(String::as_str) {
        None | Some("-") => {
            let mut buffer = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path))?,
    };

    if matches.get_flag("poly-input") {
        let text = String::from_utf8(raw).context("Polynomial input is not valid UTF-8")?;
        Ok(parse_poly_text(&text)?)
    } else {
        Ok(unpack_bits(&raw))
    }
}

fn write_output(matches: &clap::ArgMatches, bits: &[u8]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if matches.get_flag("poly-output") {
        writeln!(out, "{}", format_poly_text(bits))?;
    } else {
        out.write_all(&pack_bits(bits))?;
    }
    out.flush().context("Failed to write output")?;
    Ok(())
}
