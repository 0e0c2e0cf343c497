extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Exit, LineSource, Reader, Runtime, TokenQueue};
use crate::{error, lang::Error};
use ansi_term::Style;
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::fs::File;
use std::io::BufReader;
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sally")]
#[command(about = "Sally Forth, a line-oriented stack interpreter", long_about = None)]
pub struct Args {
    /// Program file to run. `-` reads standard input. Without it, an
    /// interactive console is opened.
    pub file: Option<String>,

    /// Log filter such as `sally=trace` (overrides RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,
}

pub fn main() {
    let args = Args::parse();
    init_tracing(args.log.as_deref());
    let status = match main_loop(&args) {
        Ok(Exit::EndOfProgram(_)) => 0,
        Ok(Exit::Fault(_)) => 1,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    };
    std::process::exit(status);
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main_loop(args: &Args) -> Result<Exit, Error> {
    let mut runtime = Runtime::new(std::io::stdout(), std::io::stderr());
    let interrupted = runtime.interrupt_handle();
    if let Err(err) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        return Err(error!(InternalError; &err.to_string()));
    }
    let exit = match args.file.as_deref() {
        None => runtime.execute(&mut TokenQueue::new(Console::new()?)),
        Some("-") => {
            let stdin = std::io::stdin();
            let reader = Reader::new(stdin.lock());
            runtime.execute(&mut TokenQueue::new(reader))
        }
        Some(filename) => {
            let reader = Reader::new(BufReader::new(File::open(filename)?));
            runtime.execute(&mut TokenQueue::new(reader))
        }
    };
    match &exit {
        Exit::EndOfProgram(_) => eprintln!("{}", exit),
        Exit::Fault(_) => eprintln!("{}", Style::new().bold().paint(exit.to_string())),
    }
    Ok(exit)
}

/// Interactive line editing. Ctrl-D ends the program.
pub struct Console {
    interface: Interface<DefaultTerminal>,
}

impl Console {
    pub fn new() -> Result<Console, Error> {
        let interface = Interface::new("sally")?;
        interface.set_prompt("> ")?;
        Ok(Console { interface })
    }
}

impl LineSource for Console {
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        match self.interface.read_line()? {
            ReadResult::Input(line) => {
                if !line.trim().is_empty() {
                    self.interface.add_history_unique(line.clone());
                }
                Ok(Some(line))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}
