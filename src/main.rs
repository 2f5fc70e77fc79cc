use std::{fs, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use safecalc::{
    Calculator,
    interpreter::{
        symbols::{BUILTIN_FUNCTIONS, CONSTANTS},
        whitelist::Whitelist,
    },
    limits::Limits,
    util::format::format_result,
};

/// safecalc evaluates arithmetic expressions in a sandbox: only numbers,
/// `+ - * / % ^`, parentheses, the functions sin, cos, tan, sqrt, abs, log, ln
/// and the constants pi and e are accepted.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file and evaluate each non-empty line that
    /// does not start with `#`.
    #[arg(short, long)]
    file: bool,

    /// Print the detailed reason for a failure instead of the generic
    /// "Invalid expression".
    #[arg(long)]
    explain: bool,

    /// Maximum expression length in bytes.
    #[arg(long, default_value_t = Limits::default().max_length)]
    max_length: usize,

    /// Maximum nesting depth. Parentheses, calls and operators each count one
    /// level.
    #[arg(long, default_value_t = Limits::default().max_depth)]
    max_depth: usize,

    /// Remove a function or constant from the whitelist. May be repeated.
    #[arg(long, value_name = "NAME")]
    deny: Vec<String>,

    /// Log every evaluation at debug level.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate, or a path with `--file`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    let expressions = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script.lines()
                                .map(str::trim)
                                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                                .map(str::to_string)
                                .collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::from(2);
            },
        }
    } else {
        vec![args.contents.clone()]
    };

    for name in &args.deny {
        let known = BUILTIN_FUNCTIONS.contains(&name.as_str())
                    || CONSTANTS.iter().any(|c| c.name == name.as_str());
        if !known {
            log::warn!("--deny {name}: no such function or constant");
        }
    }
    let whitelist = args.deny
                        .iter()
                        .fold(Whitelist::full(), |whitelist, name| whitelist.without_name(name));
    let limits = Limits::default().with_max_length(args.max_length)
                                  .with_max_depth(args.max_depth);
    let calculator = Calculator::new(limits, &whitelist);
    log::debug!("limits: {:?}", calculator.limits());
    log::debug!("functions: {:?}",
                calculator.whitelist().function_names().collect::<Vec<_>>());
    log::debug!("constants: {:?}",
                calculator.whitelist().constant_names().collect::<Vec<_>>());

    let mut status = ExitCode::SUCCESS;
    for expression in &expressions {
        match calculator.evaluate(expression) {
            Ok(value) => println!("{}", format_result(value)),
            Err(failure) => {
                if args.explain {
                    eprintln!("{failure}");
                } else {
                    eprintln!("{}", failure.public_message());
                }
                status = ExitCode::FAILURE;
            },
        }
    }
    status
}
