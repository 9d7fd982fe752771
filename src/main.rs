use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use rill::{
    interpret,
    interpreter::{evaluator::core::Context, parser::core::parse_source},
};

/// rill is a tiny expression-oriented scripting language with dictionaries,
/// arrays, functions, and loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a script file and print its final value.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// A program to evaluate directly. Without this (or --file) an
    /// interactive prompt starts.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut context = Context::new();

    let source = if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   path.display());
                         std::process::exit(1);
                     });
        Some(script)
    } else {
        args.contents
    };

    if let Some(source) = source {
        match interpret(&source, &mut context) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    repl(&mut context);
}

/// Runs the interactive prompt until an empty line or end of input.
///
/// Each line is a complete program evaluated against one shared context, so
/// bindings persist between lines. The `#pretty` directive toggles printing
/// the parse tree before each result.
fn repl(context: &mut Context) {
    let stdin = io::stdin();
    let mut pretty = false;

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if line == "#pretty" {
            pretty = !pretty;
            continue;
        }

        let root = match parse_source(line) {
            Ok(root) => root,
            Err(e) => {
                eprintln!("{e}");
                continue;
            },
        };

        if pretty {
            print!("{}", root.tree());
        }

        match context.eval(&root) {
            Ok(flow) => println!("{}", flow.into_value()),
            Err(e) => eprintln!("{e}"),
        }
    }
}
