// Plik dla alfabetu symboli (emoji) używanego przez kodek półbajtowy

/// Liczba symboli w alfabecie. Jeden symbol na każdą wartość półbajtu (0-15).
pub const ALPHABET_SIZE: usize = 16;

/// Stały alfabet kodeka. Indeks w tablicy to wartość półbajtu.
///
/// Kolejność jest częścią formatu: zmiana dowolnego wpisu lub jego pozycji
/// sprawia, że wcześniej zakodowany tekst przestaje się poprawnie dekodować.
/// Każdy wpis to pojedyncza wartość skalarna Unicode (`char`), więc
/// dopasowanie i emisja zawsze operują na całym symbolu.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    '\u{1F600}', // 0 😀
    '\u{1F601}', // 1 😁
    '\u{1F602}', // 2 😂
    '\u{1F603}', // 3 😃
    '\u{1F604}', // 4 😄
    '\u{1F605}', // 5 😅
    '\u{1F606}', // 6 😆
    '\u{1F609}', // 7 😉
    '\u{1F60A}', // 8 😊
    '\u{1F60B}', // 9 😋
    '\u{1F60E}', // A 😎
    '\u{1F60D}', // B 😍
    '\u{1F618}', // C 😘
    '\u{1F617}', // D 😗
    '\u{1F619}', // E 😙
    '\u{1F61A}', // F 😚
];

/// Liczba bajtów UTF-8 zajmowanych przez każdy symbol alfabetu.
/// Wszystkie wpisy leżą w płaszczyźnie U+1F6xx, więc zawsze 4.
pub const SYMBOL_UTF8_LEN: usize = 4;

/// Zwraca symbol dla wartości półbajtu.
///
/// Brane są pod uwagę tylko 4 najmłodsze bity `nibble`, więc funkcja
/// jest totalna.
#[inline]
pub fn symbol_for(nibble: u8) -> char {
    ALPHABET[(nibble & 0x0F) as usize]
}

/// Odwrotne mapowanie: symbol -> wartość półbajtu.
///
/// Dopasowanie jest dokładne (bez normalizacji, bez porównywania fragmentów
/// symbolu). Zwraca `None` dla znaków spoza alfabetu.
#[inline]
pub fn nibble_for(symbol: char) -> Option<u8> {
    ALPHABET
        .iter()
        .position(|&candidate| candidate == symbol)
        .map(|index| index as u8)
}

/// Sprawdza, czy znak należy do alfabetu.
#[inline]
pub fn is_symbol(symbol: char) -> bool {
    nibble_for(symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_entries_are_distinct() {
        let unique: HashSet<char> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), ALPHABET_SIZE, "Alfabet zawiera powtórzone symbole");
    }

    #[test]
    fn test_every_nibble_round_trips_through_its_symbol() {
        for nibble in 0u8..16 {
            let symbol = symbol_for(nibble);
            assert_eq!(nibble_for(symbol), Some(nibble), "Półbajt {:X} nie wraca z symbolu {}", nibble, symbol);
        }
    }

    #[test]
    fn test_symbol_for_ignores_high_bits() {
        assert_eq!(symbol_for(0xFA), symbol_for(0x0A));
        assert_eq!(symbol_for(0x10), ALPHABET[0]);
    }

    #[test]
    fn test_known_code_points() {
        assert_eq!(symbol_for(0x0) as u32, 0x1F600);
        assert_eq!(symbol_for(0x7) as u32, 0x1F609);
        assert_eq!(symbol_for(0xA) as u32, 0x1F60E);
        assert_eq!(symbol_for(0xB) as u32, 0x1F60D);
        assert_eq!(symbol_for(0xF) as u32, 0x1F61A);
    }

    #[test]
    fn test_non_alphabet_chars_are_rejected() {
        assert_eq!(nibble_for('a'), None);
        assert_eq!(nibble_for(' '), None);
        // Sąsiedzi z tego samego bloku, których nie ma w alfabecie.
        assert_eq!(nibble_for('\u{1F607}'), None);
        assert_eq!(nibble_for('\u{1F608}'), None);
        assert_eq!(nibble_for('\u{1F60C}'), None);
        assert!(!is_symbol('\u{FEFF}'));
        assert!(is_symbol('\u{1F618}'));
    }

    #[test]
    fn test_symbols_are_four_utf8_bytes() {
        for symbol in ALPHABET {
            assert_eq!(symbol.len_utf8(), SYMBOL_UTF8_LEN);
        }
    }
}
