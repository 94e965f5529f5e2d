// Plik dla błędów specyficznych dla crate emojikod

use thiserror::Error;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Enum reprezentujący błędy kodeka.
///
/// Kodowanie nigdy nie zwraca błędu. Dekodowanie w trybie
/// `DecodePolicy::Permissive` również nie; dwa pierwsze warianty pojawiają
/// się wyłącznie przy `DecodePolicy::Strict`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// W tekście wystąpił znak spoza alfabetu (tryb ścisły).
    #[error("Nierozpoznany symbol {symbol:?} na pozycji {position}")]
    UnrecognizedSymbol { symbol: char, position: usize },

    /// Liczba rozpoznanych symboli jest nieparzysta, ostatni półbajt nie ma pary (tryb ścisły).
    #[error("Nieparzysta liczba symboli ({symbol_count}), ostatni półbajt nie tworzy pełnego bajtu")]
    DanglingNibble { symbol_count: usize },

    /// Nieznana nazwa polityki dekodowania.
    #[error("Nieznana polityka dekodowania: {0}")]
    InvalidPolicy(String),
}
