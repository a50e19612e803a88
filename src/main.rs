use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use mathgenius::{Calculator, problem::Problem};

mod logging;

const NAME: &str = "MathGenius";
const EXIT_COMMAND: &str = "exit";

/// mathgenius solves arithmetic problems made of whole numbers and + - * /,
/// and explains every step it takes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a file holding one problem per line.
    #[arg(short, long)]
    file: bool,

    /// Print a step-by-step explanation after each answer.
    #[arg(short, long)]
    explain: bool,

    /// A problem such as `2+3*4`, or a path with `--file`. Reads problems
    /// from standard input until `exit` when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();
    let mut calculator = Calculator::new();

    let Some(contents) = args.contents else {
        run_interactive(&mut calculator, args.explain);
        return ExitCode::SUCCESS;
    };

    if !args.file {
        return exit_code(solve(&mut calculator, contents.trim(), args.explain));
    }

    let script = match fs::read_to_string(&contents) {
        Ok(script) => script,
        Err(_) => {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        },
    };

    let mut all_solved = true;
    for line in problem_lines(&script) {
        all_solved &= solve(&mut calculator, line, args.explain);
    }

    exit_code(all_solved)
}

fn exit_code(success: bool) -> ExitCode {
    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Non-empty lines that are not `#` comments.
fn problem_lines(script: &str) -> impl Iterator<Item = &str> {
    script.lines()
          .map(str::trim)
          .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Solves one problem and prints it, reporting failures on stderr.
fn solve(calculator: &mut Calculator, expression: &str, explain: bool) -> bool {
    match calculator.calculate(expression) {
        Ok(answer) => {
            println!("{}", Problem::new(format!("{expression}="), answer).solved());
            if explain {
                print!("{}", calculator.explanations_string());
            }
            true
        },
        Err(e) => {
            eprintln!("{expression}: {e}");
            false
        },
    }
}

fn run_interactive(calculator: &mut Calculator, explain: bool) {
    println!("Hello! I'm {NAME}");
    println!("Type a problem such as 2+3*4, or '{EXIT_COMMAND}' to quit.");

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let command = line.trim();
        if command == EXIT_COMMAND {
            break;
        }
        if !command.is_empty() {
            solve(calculator, command, explain);
        }
    }

    println!("Bye. Hope to see you again soon!");
}
