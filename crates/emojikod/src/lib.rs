//! Odwracalny kodek zamieniający dowolne bajty na tekst z 16 symboli emoji.
//!
//! Każdy bajt daje dwa symbole: najpierw starszy półbajt, potem młodszy.
//! Crate nie wykonuje żadnych operacji wejścia/wyjścia; pliki i linia
//! poleceń należą do `emojikod-tools`.
//!
//! Domyślne dekodowanie jest pobłażliwe (`DecodePolicy::Permissive`): znaki
//! spoza alfabetu są pomijane, a niesparowany ostatni półbajt odrzucany.
//! Tryb ścisły jest dostępny przez [`NibbleCodec::strict`] i [`decode_strict`].

pub mod alphabet;
pub mod decode_policy;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod nibble_codec;
pub mod text_codec_trait;

// Reeksportujemy, aby były łatwiej dostępne
pub use decode_policy::DecodePolicy;
pub use decoder::{count_recognized, decode, decode_strict, decode_with_report, decoded_len, DecodeReport};
pub use encoder::{encode, encoded_byte_len, encoded_len};
pub use error::{CodecError, Result};
pub use nibble_codec::NibbleCodec;
pub use text_codec_trait::TextCodec;
