//! Tarn CLI.

use std::io::IsTerminal;

use tarn_diagnostic::emitter::TerminalEmitter;
use tarnc::commands::{lex_files, LexArgs};

fn main() {
    tarnc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let lex_args = match LexArgs::parse(&args[2..]) {
                Ok(lex_args) => lex_args,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: tarnc lex [--summary] [--no-trivia] [--color=<mode>] <file.tarn>...");
                    std::process::exit(1);
                }
            };

            let is_tty = std::io::stderr().is_terminal();
            let mut emitter = TerminalEmitter::stderr(lex_args.color, is_tty);
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let mut errors = std::io::stderr();
            match lex_files(&lex_args, &mut out, &mut emitter, &mut errors) {
                Ok(report) => {
                    if report.failed() {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("tarnc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Tarn lexer front end");
    println!();
    println!("Usage: tarnc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.tarn>...   Tokenize files and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --summary, -s        Print per-file counts instead of tokens");
    println!("  --no-trivia          Hide spaces, newlines, and comments");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  TARN_LOG             Tracing filter, e.g. tarn_lexer=trace (falls back to RUST_LOG)");
    println!();
    println!("Examples:");
    println!("  tarnc lex main.tarn");
    println!("  tarnc lex --summary src/*.tarn");
    println!("  TARN_LOG=tarn_lexer=debug tarnc lex main.tarn");
}
