// Moduły dla poszczególnych kierunków konwersji
pub mod decode_file;
pub mod encode_file;

use emojikod::{NibbleCodec, TextCodec};

use crate::cli::Cli;
use crate::error::Result;
use crate::utils::FileType;

/// Podsumowanie jednej konwersji, do logowania.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input_len: usize,
    pub output_len: usize,
}

/// Wybiera kierunek po rozszerzeniu pliku wejściowego i wykonuje konwersję.
pub fn run(cli: &Cli) -> Result<ConversionSummary> {
    let file_type = FileType::from_path(&cli.input)?;
    let codec: Box<dyn TextCodec> = Box::new(NibbleCodec::new(cli.policy));
    log::debug!(
        "Tryb {:?}, polityka dekodowania {}: '{}' -> '{}'",
        file_type,
        codec.get_decode_policy(),
        cli.input.display(),
        cli.output.display()
    );

    match file_type {
        FileType::Binary => encode_file::run(&cli.input, &cli.output, codec.as_ref()),
        FileType::Text => decode_file::run(&cli.input, &cli.output, codec.as_ref()),
    }
}
