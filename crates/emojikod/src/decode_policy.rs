// Plik dla polityki dekodowania

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, Result};

/// Sposób traktowania niepoprawnego tekstu przez dekoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodePolicy {
    /// Zachowanie domyślne. Znaki spoza alfabetu są pomijane bez błędu
    /// (nie zajmują miejsca półbajtu i nie psują parowania), a niesparowany
    /// ostatni półbajt jest odrzucany. Dekodowanie nigdy nie zawodzi.
    #[default]
    Permissive,
    /// Pierwszy znak spoza alfabetu albo nieparzysta liczba symboli kończy
    /// dekodowanie błędem.
    Strict,
}

impl DecodePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodePolicy::Permissive => "permissive",
            DecodePolicy::Strict => "strict",
        }
    }
}

impl FromStr for DecodePolicy {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(DecodePolicy::Permissive),
            "strict" => Ok(DecodePolicy::Strict),
            _ => Err(CodecError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
