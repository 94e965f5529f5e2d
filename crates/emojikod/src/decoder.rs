// Dekodowanie: tekst z symboli alfabetu -> bajty

use crate::alphabet::nibble_for;
use crate::error::{CodecError, Result};

/// Składa kolejne półbajty w bajty: pierwszy z pary to starszy półbajt,
/// drugi młodszy.
#[derive(Debug, Default, Clone, Copy)]
struct NibblePacker {
    high: Option<u8>,
}

impl NibblePacker {
    /// Przyjmuje półbajt. Zwraca bajt, gdy para jest kompletna.
    #[inline]
    fn push(&mut self, nibble: u8) -> Option<u8> {
        match self.high.take() {
            Some(high) => Some((high << 4) | nibble),
            None => {
                self.high = Some(nibble);
                None
            }
        }
    }

    /// Starszy półbajt czekający na parę, jeśli taki jest.
    fn pending(&self) -> Option<u8> {
        self.high
    }
}

/// Wynik dekodowania z informacją o tym, co zostało pominięte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeReport {
    /// Zdekodowane bajty.
    pub bytes: Vec<u8>,
    /// Liczba znaków rozpoznanych jako symbole alfabetu.
    pub recognized: usize,
    /// Liczba znaków spoza alfabetu, które zostały pominięte.
    pub skipped: usize,
    /// Odrzucony starszy półbajt, gdy liczba rozpoznanych symboli była nieparzysta.
    pub dangling_nibble: Option<u8>,
}

impl DecodeReport {
    /// `true`, jeśli wejście było poprawnie zbudowanym tekstem zakodowanym.
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.dangling_nibble.is_none()
    }
}

/// Liczba znaków tekstu, które należą do alfabetu.
pub fn count_recognized(text: &str) -> usize {
    text.chars().filter_map(nibble_for).count()
}

/// Długość wyniku `decode(text)` w bajtach.
pub fn decoded_len(text: &str) -> usize {
    count_recognized(text) / 2
}

/// Dekoduje tekst do bajtów w trybie pobłażliwym.
///
/// Dekodowanie NIE jest ścisłe:
/// * znaki spoza alfabetu są pomijane bez błędu; nie zajmują miejsca
///   półbajtu i nie przerywają parowania,
/// * jeśli liczba rozpoznanych symboli jest nieparzysta, ostatni półbajt
///   jest odrzucany i nigdy nie powstaje niepełny bajt.
///
/// Długość wyniku to zawsze `count_recognized(text) / 2`. Do odrzucania
/// niepoprawnego wejścia służy [`decode_strict`].
pub fn decode(text: &str) -> Vec<u8> {
    let mut packer = NibblePacker::default();
    let mut bytes = Vec::with_capacity(text.len() / 8);
    for nibble in text.chars().filter_map(nibble_for) {
        if let Some(byte) = packer.push(nibble) {
            bytes.push(byte);
        }
    }
    bytes
}

/// Jak [`decode`], ale dodatkowo zlicza pominięte znaki i zwraca odrzucony półbajt.
pub fn decode_with_report(text: &str) -> DecodeReport {
    let mut packer = NibblePacker::default();
    let mut report = DecodeReport {
        bytes: Vec::with_capacity(text.len() / 8),
        ..DecodeReport::default()
    };

    for symbol in text.chars() {
        match nibble_for(symbol) {
            Some(nibble) => {
                report.recognized += 1;
                if let Some(byte) = packer.push(nibble) {
                    report.bytes.push(byte);
                }
            }
            None => report.skipped += 1,
        }
    }
    report.dangling_nibble = packer.pending();
    report
}

/// Dekodowanie ścisłe.
///
/// # Błędy
///
/// * `CodecError::UnrecognizedSymbol` dla pierwszego znaku spoza alfabetu
///   (pozycja liczona w znakach, od zera),
/// * `CodecError::DanglingNibble`, gdy liczba symboli jest nieparzysta.
pub fn decode_strict(text: &str) -> Result<Vec<u8>> {
    let mut packer = NibblePacker::default();
    let mut bytes = Vec::with_capacity(text.len() / 8);
    let mut symbol_count = 0;

    for (position, symbol) in text.chars().enumerate() {
        let nibble = nibble_for(symbol)
            .ok_or(CodecError::UnrecognizedSymbol { symbol, position })?;
        symbol_count += 1;
        if let Some(byte) = packer.push(nibble) {
            bytes.push(byte);
        }
    }

    if packer.pending().is_some() {
        return Err(CodecError::DanglingNibble { symbol_count });
    }
    Ok(bytes)
}
