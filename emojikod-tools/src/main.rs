// Główny punkt wejścia dla narzędzi CLI
pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli_args = cli::Cli::parse();

    match commands::run(&cli_args) {
        Ok(summary) => {
            log::debug!("{:?}", summary);
            println!("[+] Konwersja zakończona pomyślnie");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[!] {}", e);
            ExitCode::FAILURE
        }
    }
}
