// Plik dla błędów narzędzi CLI

use std::io;
use std::path::PathBuf;

use emojikod::CodecError;
use thiserror::Error;

/// Typ Result używany w narzędziach.
pub type Result<T> = std::result::Result<T, ToolsError>;

/// Błędy narzędzia: błędy użycia i błędy wejścia/wyjścia.
/// Kodek w trybie pobłażliwym nie zgłasza błędów treści.
#[derive(Debug, Error)]
pub enum ToolsError {
    /// Plik wejściowy nie ma rozszerzenia `.bin` ani `.txt`.
    #[error("Nieobsługiwany typ pliku '{}', użyj rozszerzenia .txt lub .bin", .0.display())]
    UnsupportedExtension(PathBuf),

    /// Nie udało się odczytać pliku wejściowego.
    #[error("Błąd odczytu pliku '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Nie udało się zapisać pliku wynikowego.
    #[error("Błąd zapisu pliku '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Plik tekstowy nie jest poprawnym UTF-8.
    #[error("Plik '{}' nie zawiera poprawnego tekstu UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },

    /// Błąd kodeka (tylko w trybie ścisłym).
    #[error("Błąd kodeka: {0}")]
    Codec(#[from] CodecError),
}
