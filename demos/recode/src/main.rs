//! Converts a file's character encoding using `encoding_whatwg`, in the
//! spirit of the teacher crate's own `examples/recode.rs` demo: same
//! `getopts`-based flag shapes (`-f`/`--from-code`, `-t`/`--to-code`,
//! `-o`/`--output`), this crate's one `log`/`env_logger` consumer.
//!
//! Unlike the original, the error policy is not independently selectable
//! at the encoder: `encoding_whatwg::Encoder` only implements the WHATWG
//! `'?'`-substitution policy (see `DESIGN.md`, Open Question 1), so
//! `--fatal` only affects decoding.

use std::env;
use std::fs;
use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use encoding_whatwg::{Decoder, DecoderOptions, Encoder};
use getopts::Options;
use log::info;

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {program} [options] [INPUT]");
    print!("{}", opts.usage(&brief));
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading standard input")?;
            Ok(buf)
        }
        Some(path) => fs::read(path).with_context(|| format!("reading {path}")),
    }
}

fn write_output(path: Option<&str>, bytes: &[u8]) -> Result<()> {
    match path {
        None | Some("-") => io::stdout().write_all(bytes).context("writing standard output"),
        Some(path) => fs::write(path, bytes).with_context(|| format!("writing {path}")),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("f", "from-code", "set input encoding", "NAME");
    opts.optopt("t", "to-code", "set output encoding", "NAME");
    opts.optopt("o", "output", "output file", "FILE");
    opts.optflag(
        "",
        "fatal",
        "fail on malformed input instead of substituting U+FFFD",
    );
    opts.optflag("h", "help", "print this help menu");

    let matches = opts.parse(&args[1..]).context("parsing command-line arguments")?;
    if matches.opt_present("h") {
        print_usage(&program, &opts);
        return Ok(());
    }
    if matches.free.len() > 1 {
        bail!("expected at most one input file, got {}", matches.free.len());
    }

    let from_code = matches.opt_str("f").unwrap_or_else(|| "utf-8".to_string());
    let to_code = matches.opt_str("t").unwrap_or_else(|| "utf-8".to_string());
    let fatal = matches.opt_present("fatal");
    let input_path = matches.free.first().map(String::as_str);
    let output_path = matches.opt_str("o");

    info!("recoding {from_code} -> {to_code}");

    let mut decoder = Decoder::new(
        &from_code,
        DecoderOptions {
            fatal,
            ignore_bom: false,
        },
    )
    .with_context(|| format!("unrecognized input encoding {from_code:?}"))?;
    let mut encoder =
        Encoder::new(&to_code).with_context(|| format!("unrecognized output encoding {to_code:?}"))?;

    let input = read_input(input_path)?;
    let text = decoder.decode(&input, false).context("decoding input")?;
    let output = encoder.encode(&text);

    write_output(output_path.as_deref(), &output)?;
    Ok(())
}
