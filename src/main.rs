//! `ls8` command-line runner.
//!
//! Usage:
//!
//! ```text
//! ls8 <program.ls8>                 run a program image
//! ls8 --disassemble <program.ls8>   print its listing instead
//! ```
//!
//! Set `RUST_LOG=trace` to see a `TRACE:` line for every executed instruction.

use std::env;
use std::process::ExitCode;

use color_eyre::eyre::{Result, WrapErr};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use ls8::disassembler::formatter::format_listing_line;
use ls8::loader::read_program;
use ls8::{disassemble, load_file, DisassemblyOptions, CPU};

const USAGE: &str = "usage: ls8 [--disassemble] <program.ls8>";

enum Command {
    Run(String),
    Disassemble(String),
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [flag, path] if flag == "--disassemble" || flag == "-d" => {
            Some(Command::Disassemble(path.clone()))
        }
        [path] if !path.starts_with('-') => Some(Command::Run(path.clone())),
        _ => None,
    }
}

fn run(path: &str) -> Result<()> {
    let memory = load_file(path).wrap_err_with(|| format!("failed to load {}", path))?;
    let mut cpu = CPU::new(memory);

    cpu.run()
        .wrap_err_with(|| format!("execution of {} stopped", path))?;

    Ok(())
}

fn print_listing(path: &str) -> Result<()> {
    let image = read_program(path).wrap_err_with(|| format!("failed to load {}", path))?;

    for instr in disassemble(&image, DisassemblyOptions::default()) {
        println!("{}", format_listing_line(&instr));
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Some(command) => command,
        None => {
            eprintln!("{}", USAGE);
            return Ok(ExitCode::from(1));
        }
    };

    match command {
        Command::Run(path) => run(&path)?,
        Command::Disassemble(path) => print_listing(&path)?,
    }

    Ok(ExitCode::SUCCESS)
}
