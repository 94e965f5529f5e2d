// Konwersja tekstu z emoji z powrotem na plik binarny

use std::path::Path;

use emojikod::{decode_with_report, DecodePolicy, TextCodec};

use super::ConversionSummary;
use crate::error::Result;
use crate::utils::{read_text, write_atomically};

pub fn run(input: &Path, output: &Path, codec: &dyn TextCodec) -> Result<ConversionSummary> {
    let text = read_text(input)?;

    let bytes = match codec.get_decode_policy() {
        DecodePolicy::Permissive => {
            let report = decode_with_report(&text);
            if report.skipped > 0 {
                log::warn!(
                    "Pominięto {} znaków spoza alfabetu w '{}'",
                    report.skipped,
                    input.display()
                );
            }
            if let Some(nibble) = report.dangling_nibble {
                log::warn!(
                    "Nieparzysta liczba symboli ({}), odrzucono ostatni półbajt {:X}",
                    report.recognized,
                    nibble
                );
            }
            report.bytes
        }
        DecodePolicy::Strict => codec.decode(&text)?,
    };

    write_atomically(output, &bytes)?;

    log::info!(
        "Zdekodowano {} B z '{}' do '{}'",
        bytes.len(),
        input.display(),
        output.display()
    );
    Ok(ConversionSummary {
        input_len: text.len(),
        output_len: bytes.len(),
    })
}
