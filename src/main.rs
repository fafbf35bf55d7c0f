use colored::Colorize;
use std::process;

fn main() {
    match studio_args::cli::run() {
        Ok(status) => process::exit(status.code()),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
