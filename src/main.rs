//! stable-match - Binary Entry Point
//!
//! ```text
//! stable-match [match|verify] [input] [output] [TIMED]
//! ```
//!
//! `*` in place of a path selects stdin/stdout. In verify mode the third
//! argument names the candidate matching to read; when both are `*` the
//! matching follows the instance on stdin.
//!
//! Results go to stdout (or the output file); logs go to stderr and are
//! filtered with `RUST_LOG`.

mod args;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::time::Instant;

use clap::Parser;
use tracing::{error, info, warn};

use stable_match::engine::MatchingEngine;
use stable_match::io::{read_instance, read_pairs, write_matching, Tokens};
use stable_match::verifier::verify;

use args::{Args, Mode, STDIO};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let begin = Instant::now();

    info!(mode = ?args.mode, input = %args.input, output = %args.output, "starting");

    let produced = match args.mode {
        Mode::Match => run_match(&args)?,
        Mode::Verify => run_verify(&args)?,
    };

    // No timing line after an INVALID instance or an empty match
    if produced && args.is_timed() {
        println!("Elapsed: {} ns", begin.elapsed().as_nanos());
    }

    Ok(())
}

/// Returns true if a matching was written.
fn run_match(args: &Args) -> Result<bool, Box<dyn Error>> {
    let text = read_source(&args.input);
    let instance = match read_instance(&mut Tokens::new(&text)) {
        Ok(instance) => instance,
        Err(err) => {
            println!("INVALID: {err}");
            return Ok(false);
        }
    };
    if instance.n() == 0 {
        return Ok(false);
    }

    let engine = MatchingEngine::from_instance(&instance)?;
    let assignment = engine.solve()?;
    let receipt = assignment.receipt();
    info!(
        agents = receipt.agents,
        proposals = receipt.proposals,
        per_agent = receipt.proposals_per_agent(),
        digest = %receipt.digest_hex(),
        "matching complete"
    );

    let mut out = open_sink(&args.output);
    write_matching(&mut out, &assignment.matching)?;
    out.flush()?;
    Ok(true)
}

/// Returns true if a verdict was printed.
fn run_verify(args: &Args) -> Result<bool, Box<dyn Error>> {
    let text = read_source(&args.input);
    let mut tokens = Tokens::new(&text);
    let instance = match read_instance(&mut tokens) {
        Ok(instance) => instance,
        Err(err) => {
            println!("INVALID: {err}");
            return Ok(false);
        }
    };

    let pairs = if args.shares_stdin() {
        read_pairs(&mut tokens)
    } else {
        let matching_text = read_source(&args.output);
        read_pairs(&mut Tokens::new(&matching_text))
    };

    let verdict = verify(&instance, &pairs);
    info!(n = instance.n(), pairs = pairs.len(), %verdict, "verification complete");
    println!("{verdict}");
    Ok(true)
}

/// Read a whole file, or stdin for `*`.
///
/// An unreadable source yields empty text, so it surfaces as an `INVALID:`
/// verdict (no `n`, or zero pairs) instead of a failed run.
fn read_source(path: &str) -> String {
    let mut text = String::new();
    let result = if path == STDIO {
        io::stdin().lock().read_to_string(&mut text)
    } else {
        File::open(path).and_then(|mut file| file.read_to_string(&mut text))
    };
    if let Err(err) = result {
        warn!(path, %err, "cannot read source, treating it as empty");
        text.clear();
    }
    text
}

/// Buffered writer to a file, or stdout for `*`.
///
/// If the file cannot be created the matching is discarded.
fn open_sink(path: &str) -> Box<dyn Write> {
    if path == STDIO {
        return Box::new(BufWriter::new(io::stdout().lock()));
    }
    match File::create(path) {
        Ok(file) => Box::new(BufWriter::new(file)),
        Err(err) => {
            error!(path, %err, "cannot create output, discarding matching");
            Box::new(io::sink())
        }
    }
}
