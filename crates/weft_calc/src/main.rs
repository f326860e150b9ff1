//! weft-calc: evaluate arithmetic expressions.
//!
//! Expressions come from the command line, or one per line from stdin when
//! none are given.

use std::io::{self, BufRead, IsTerminal};

use weft_calc::{init_tracing, CalcError, Calculator};
use weft_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use weft_diagnostic::Report;

struct Options {
    color: ColorMode,
    report: bool,
    defines: Vec<(String, f64)>,
    expressions: Vec<String>,
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            std::process::exit(2);
        }
    };

    let mut calc = Calculator::new();
    for (name, value) in &options.defines {
        calc.define(name, *value);
    }

    let mut failed = false;
    if options.expressions.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("error: reading stdin: {err}");
                    std::process::exit(1);
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            failed |= !run(&calc, &line, &options);
        }
    } else {
        for expression in &options.expressions {
            failed |= !run(&calc, expression, &options);
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn run(calc: &Calculator, source: &str, options: &Options) -> bool {
    match calc.evaluate(source) {
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(err) => {
            report(source, &err, options);
            false
        }
    }
}

fn report(source: &str, err: &CalcError, options: &Options) {
    if options.report {
        eprint!("{}", Report::new(source).render(err.position(), &err.report_message()));
        return;
    }
    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(options.color, is_tty).with_source("<input>", source);
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        color: ColorMode::Auto,
        report: false,
        defines: Vec::new(),
        expressions: Vec::new(),
    };

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = match mode {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                other => return Err(format!("unknown color mode `{other}`")),
            };
        } else if arg == "--report" {
            options.report = true;
        } else if arg == "-D" && i + 1 < args.len() {
            options.defines.push(parse_define(&args[i + 1])?);
            i += 1;
        } else if let Some(define) = arg.strip_prefix("--define=") {
            options.defines.push(parse_define(define)?);
        } else if arg == "--help" || arg == "-h" {
            print_usage();
            std::process::exit(0);
        } else {
            options.expressions.push(arg.clone());
        }
        i += 1;
    }

    Ok(options)
}

fn parse_define(define: &str) -> Result<(String, f64), String> {
    let Some((name, value)) = define.split_once('=') else {
        return Err(format!("expected NAME=VALUE, found `{define}`"));
    };
    let value = Calculator::new()
        .evaluate(value)
        .map_err(|err| format!("bad value for `{name}`: {err}"))?;
    Ok((name.trim().to_owned(), value))
}

fn print_usage() {
    eprintln!("Usage: weft-calc [options] [expression...]");
    eprintln!();
    eprintln!("Reads one expression per line from stdin when none are given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --color=<mode>        Diagnostics color: auto, always, never");
    eprintln!("  --report              Plain caret reports instead of diagnostics");
    eprintln!("  -D, --define=NAME=V   Define a constant");
    eprintln!();
    eprintln!("Set WEFT_LOG (e.g. WEFT_LOG=weft_parse=trace) to trace the parse.");
}
