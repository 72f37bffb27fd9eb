use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use colored::Colorize;
use monkey::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse_file,
    render_error,
};

const PROMPT: &str = ">> ";

#[derive(ClapParser)]
#[command(name = "monkey", about = "Parse monkey source into its canonical form")]
struct Cli {
    /// Source file to parse; starts the REPL when omitted
    file: Option<PathBuf>,

    /// Print the token stream instead of the syntax tree
    #[arg(short, long)]
    tokens: bool,

    /// Print phase timings
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    match &args.file {
        Some(path) => run_file(path, &args),
        None => {
            repl(&args);
            ExitCode::SUCCESS
        }
    }
}

fn run_file(path: &Path, args: &Cli) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!(
                "{} failed to read {}: {}",
                "Error:".red().bold(),
                path.display(),
                err
            );
            return ExitCode::FAILURE;
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if process(&source, &file_name, args) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn repl(args: &Cli) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        if line.trim().is_empty() {
            continue;
        }

        process(&line, "shell", args);
    }

    println!("\n( ;ᴗ;)ﾉｼ");
}

/// Lexes or parses one unit of source and prints the result.
///
/// Returns false if the source had parse errors.
fn process(source: &str, file: &str, args: &Cli) -> bool {
    let start = Instant::now();

    if args.tokens {
        for token in Lexer::with_file(source, file) {
            if token.is(TokenKind::Illegal) {
                println!("{}", token.to_string().red());
            } else {
                println!("{}", token);
            }
        }

        if args.verbose {
            println!("Tokenized in {:?}", start.elapsed());
        }
        return true;
    }

    let result = parse_file(source, file);

    if args.verbose {
        println!("Parsed in {:?}", start.elapsed());
    }

    match result {
        Ok(program) => {
            println!("{}", program);
            true
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("{}", render_error(error, source).red());
            }
            false
        }
    }
}
