use std::fs;

use ascent::{
    interpreter::value::core::Value,
    runtime::{EvaluateOptions, HostInputs, Runtime},
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// ascent is an embeddable scripting language; this binary evaluates one
/// script and prints its result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ascent to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Supplies a query variable, readable as `q.name`. May be repeated.
    #[arg(short, long = "query", value_name = "NAME=NUMBER", value_parser = parse_query)]
    queries: Vec<(String, f64)>,

    /// Compiles the script on every run instead of reusing it.
    #[arg(long)]
    no_cache: bool,

    /// Logs every token and expression while compiling.
    #[arg(short, long)]
    debug: bool,

    /// Evaluates the script this many times.
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,

    contents: String,
}

fn parse_query(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected NAME=NUMBER, got '{arg}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid number for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn init_tracing(debug: bool) {
    let default = if debug { "ascent=trace" } else { "warn,ascent::debug=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(fmt::layer().with_target(true).with_level(true))
                                  .with(filter)
                                  .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let inputs = args.queries
                     .into_iter()
                     .fold(HostInputs::default(), |inputs, (name, value)| {
                         inputs.with_query(name, Value::Number(value))
                     });
    let options = EvaluateOptions { cache: !args.no_cache,
                                    debug: args.debug, };

    let mut runtime = Runtime::new();
    for _ in 0..args.repeat {
        match runtime.evaluate(&script, &inputs, options) {
            Ok(evaluation) => println!("{}", evaluation.value),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}
