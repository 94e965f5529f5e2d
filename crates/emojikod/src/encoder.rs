// Kodowanie: bajty -> tekst z symboli alfabetu

use crate::alphabet::{symbol_for, SYMBOL_UTF8_LEN};

/// Liczba symboli w zakodowanym tekście dla `byte_len` bajtów wejścia.
#[inline]
pub fn encoded_len(byte_len: usize) -> usize {
    byte_len * 2
}

/// Rozmiar zakodowanego tekstu w bajtach UTF-8 dla `byte_len` bajtów wejścia.
#[inline]
pub fn encoded_byte_len(byte_len: usize) -> usize {
    encoded_len(byte_len) * SYMBOL_UTF8_LEN
}

/// Koduje bufor bajtów jako tekst z symboli alfabetu.
///
/// Bajt `i` daje symbole na pozycjach `2i` (starszy półbajt, bity 7-4)
/// i `2i+1` (młodszy półbajt, bity 3-0). Brak nagłówka, separatorów
/// i dopełnienia. Funkcja jest totalna: pusty bufor daje pusty tekst.
pub fn encode(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(encoded_byte_len(bytes.len()));
    for &byte in bytes {
        text.push(symbol_for(byte >> 4));
        text.push(symbol_for(byte & 0x0F));
    }
    text
}
