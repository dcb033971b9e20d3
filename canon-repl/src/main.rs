mod error;
mod eval;

use canon_parser::parser::Parser;
use eval::{Ctxt, Value};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Parses and evaluates the given input string, returning the value of each expression statement.
fn parse_eval(input: &str, ctxt: &mut Ctxt) -> Result<Vec<Value>, canon_error::Error> {
    let stmts = Parser::new(input).try_parse_full_many()?;
    debug!(count = stmts.len(), "parsed statements");
    ctxt.eval_stmts(&stmts)
}

/// Parses and evaluates the input, printing each value or reporting the failure.
fn read_eval(input: &str, ctxt: &mut Ctxt) -> io::Result<()> {
    match parse_eval(input, ctxt) {
        Ok(values) => {
            for value in values {
                println!("{}", value);
            }
            Ok(())
        },
        Err(err) => err.report_to_stderr("input", input),
    }
}

fn process_line(rl: &mut DefaultEditor, ctxt: &mut Ctxt) -> Result<(), ReadlineError> {
    let input = rl.readline("> ")?;
    if input.trim().is_empty() {
        return Ok(());
    }

    rl.add_history_entry(&input)?;
    read_eval(&input, ctxt)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args();
    args.next();
    let mut ctxt = Ctxt::new();

    if let Some(filename) = args.next() {
        // run source file
        info!(%filename, "evaluating file");
        let mut file = BufReader::new(File::open(filename)?);
        let mut input = String::new();
        file.read_to_string(&mut input)?;

        read_eval(&input, &mut ctxt)?;
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;

        read_eval(&input, &mut ctxt)?;
    } else {
        let mut rl = DefaultEditor::new()?;
        loop {
            if let Err(err) = process_line(&mut rl, &mut ctxt) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    Ok(())
}
