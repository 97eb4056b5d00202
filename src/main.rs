use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context;
use bigcalc::error::Error;
use bigcalc::shell::{self, Base, Outcome};
use clap::Parser;
use tracing::info;

/// Arbitrary-precision signed integer calculator.
#[derive(Parser, Debug)]
#[command(name = "bigcalc", about = "Arbitrary-precision integer calculator")]
struct Args {
    /// Optional file of expressions to evaluate; reads interactively if omitted.
    input: Option<String>,
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    match args.input {
        Some(path) => run_file(&path),
        None => run_interactive(),
    }
}

fn run_file(path: &str) -> anyhow::Result<()> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => {
            println!("{}", Error::BadInputFile);
            std::process::exit(1);
        }
    };

    let reader = BufReader::new(file);
    let mut base = Base::Decimal;

    for line in reader.lines() {
        let line = line.context("reading input file")?;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim() == "quit" {
            println!("quit");
            break;
        }

        println!("> {}", line);
        if shell::is_unfinished(line) {
            println!("Syntax error!");
        } else {
            dispatch(line, &mut base);
        }
    }

    Ok(())
}

fn run_interactive() -> anyhow::Result<()> {
    info!("starting interactive session");
    let stdin = io::stdin();
    let mut base = Base::Decimal;
    let mut accumulated = String::new();

    loop {
        let prompt = if accumulated.is_empty() { "> " } else { "... " };
        print!("{}", prompt);
        io::stdout().flush().ok();

        let mut line = String::new();
        let bytes = stdin.lock().read_line(&mut line)?;
        if bytes == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim() == "quit" {
            break;
        }

        if !accumulated.is_empty()
            && !matches!(accumulated.chars().last(), Some('x' | 'X' | 'b' | 'B'))
        {
            accumulated.push(' ');
        }
        accumulated.push_str(line);

        if shell::is_unfinished(&accumulated) {
            continue;
        }

        dispatch(&accumulated, &mut base);
        accumulated.clear();
    }

    Ok(())
}

fn dispatch(line: &str, base: &mut Base) {
    match shell::process_line(line, base) {
        Ok(Outcome::Silent) => {}
        Ok(Outcome::Print(text)) => println!("{}", text),
        Ok(Outcome::Quit) => {}
        Err(Error::DivisionByZero) => println!("Division by zero!"),
        Err(Error::NegativeFactorial) => println!("Input of factorial must not be negative!"),
        Err(Error::UnknownCommand(name)) => println!("Invalid command \"{}\"!", name),
        Err(_) => println!("Syntax error!"),
    }
}
