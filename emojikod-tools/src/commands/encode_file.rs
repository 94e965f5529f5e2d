// Konwersja pliku binarnego na tekst z emoji

use std::path::Path;

use emojikod::TextCodec;

use super::ConversionSummary;
use crate::error::Result;
use crate::utils::{read_bytes, write_atomically};

pub fn run(input: &Path, output: &Path, codec: &dyn TextCodec) -> Result<ConversionSummary> {
    let bytes = read_bytes(input)?;
    if bytes.is_empty() {
        log::warn!("Plik '{}' jest pusty, wynik będzie pusty", input.display());
    }

    let text = codec.encode(&bytes);
    write_atomically(output, text.as_bytes())?;

    log::info!(
        "Zakodowano {} B z '{}' do {} symboli w '{}'",
        bytes.len(),
        input.display(),
        text.chars().count(),
        output.display()
    );
    Ok(ConversionSummary {
        input_len: bytes.len(),
        output_len: text.len(),
    })
}
