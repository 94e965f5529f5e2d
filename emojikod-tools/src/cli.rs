// Definicja argumentów linii poleceń

use std::path::PathBuf;

use clap::Parser;
use emojikod::DecodePolicy;

/// Emojikod: zamienia pliki binarne na tekst z emoji i z powrotem.
///
/// Kierunek wynika z rozszerzenia pliku wejściowego: `.bin` jest kodowany
/// do tekstu, `.txt` dekodowany do bajtów.
#[derive(Parser, Debug)]
#[command(name = "emojikod-cli")]
#[command(author, version, about = "Koduje pliki binarne jako emoji i odwrotnie", long_about = None)]
pub struct Cli {
    /// Plik wejściowy (.bin albo .txt)
    pub input: PathBuf,

    /// Plik wynikowy
    pub output: PathBuf,

    /// Polityka dekodowania: permissive pomija znaki spoza alfabetu, strict zgłasza błąd
    #[arg(long, default_value = "permissive")]
    pub policy: DecodePolicy,
}
