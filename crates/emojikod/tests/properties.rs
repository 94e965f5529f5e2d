use emojikod::alphabet::{is_symbol, ALPHABET};
use emojikod::{
    count_recognized, decode, decode_strict, decode_with_report, decoded_len, encode, encoded_len,
};
use proptest::prelude::*;

prop_compose! {
    /// Tekst przeplatający symbole alfabetu z dowolnymi znakami spoza niego.
    fn arb_noisy_text()(
        parts in prop::collection::vec(
            prop_oneof![
                (0usize..16).prop_map(|i| ALPHABET[i]),
                any::<char>().prop_filter("znak spoza alfabetu", |c| !is_symbol(*c)),
            ],
            0..200,
        )
    ) -> String {
        parts.into_iter().collect()
    }
}

proptest! {
    /// Property: decode(encode(B)) == B
    #[test]
    fn prop_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(decode(&encode(&bytes)), bytes.clone());
        prop_assert_eq!(decode_strict(&encode(&bytes)).unwrap(), bytes);
    }

    /// Property: encoded text has exactly two symbols per byte, all from the alphabet
    #[test]
    fn prop_encoded_length(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let text = encode(&bytes);
        prop_assert_eq!(text.chars().count(), encoded_len(bytes.len()));
        prop_assert!(text.chars().all(is_symbol));
    }

    /// Property: decoded length is floor(recognized / 2)
    #[test]
    fn prop_decoded_length(text in arb_noisy_text()) {
        let bytes = decode(&text);
        prop_assert_eq!(bytes.len(), count_recognized(&text) / 2);
        prop_assert_eq!(bytes.len(), decoded_len(&text));
    }

    /// Property: unrecognized characters inserted anywhere do not change the result
    #[test]
    fn prop_noise_is_ignored(
        bytes in prop::collection::vec(any::<u8>(), 0..256),
        noise in prop::collection::vec(
            (
                any::<prop::sample::Index>(),
                any::<char>().prop_filter("znak spoza alfabetu", |c| !is_symbol(*c)),
            ),
            0..64,
        ),
    ) {
        let mut symbols: Vec<char> = encode(&bytes).chars().collect();
        for (at, c) in noise {
            let position = at.index(symbols.len() + 1);
            symbols.insert(position, c);
        }
        let noisy: String = symbols.into_iter().collect();
        prop_assert_eq!(decode(&noisy), bytes);
    }

    /// Property: report path agrees with plain decode
    #[test]
    fn prop_report_matches_decode(text in arb_noisy_text()) {
        let report = decode_with_report(&text);
        prop_assert_eq!(&report.bytes, &decode(&text));
        prop_assert_eq!(report.recognized + report.skipped, text.chars().count());
        prop_assert_eq!(report.dangling_nibble.is_some(), report.recognized % 2 == 1);
    }

    /// Property: an odd number of valid symbols drops exactly the trailing nibble
    #[test]
    fn prop_odd_tail_is_dropped(bytes in prop::collection::vec(any::<u8>(), 0..256), last in 0usize..16) {
        let mut text = encode(&bytes);
        text.push(ALPHABET[last]);
        prop_assert_eq!(decode(&text), bytes);
        prop_assert!(decode_strict(&text).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    /// Property: round trip holds for megabyte-sized buffers
    #[test]
    fn prop_large_buffer_round_trip(bytes in prop::collection::vec(any::<u8>(), 1usize << 20)) {
        let text = encode(&bytes);
        prop_assert_eq!(text.chars().count(), 2 * bytes.len());
        prop_assert_eq!(decode(&text), bytes);
    }
}

#[test]
fn test_concrete_example_ab() {
    let text = encode(&[0xAB]);
    assert_eq!(text.chars().collect::<Vec<_>>(), vec![ALPHABET[10], ALPHABET[11]]);
    assert_eq!(decode(&text), vec![0xAB]);
}
