// Pomocnicze funkcje plikowe dla narzędzi CLI

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::{Result, ToolsError};

/// Rodzaj pliku wejściowego, rozpoznawany po rozszerzeniu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// `.bin`: dowolne bajty, kodowane do tekstu.
    Binary,
    /// `.txt`: tekst z symboli, dekodowany do bajtów.
    Text,
}

impl FileType {
    /// Rozpoznaje typ pliku po końcówce nazwy, bez rozróżniania wielkości liter.
    ///
    /// Sama nazwa `.bin` też jest akceptowana (w przeciwieństwie do
    /// `Path::extension`, która traktuje ją jak plik ukryty bez rozszerzenia).
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if name.ends_with(".bin") {
            Ok(FileType::Binary)
        } else if name.ends_with(".txt") {
            Ok(FileType::Text)
        } else {
            Err(ToolsError::UnsupportedExtension(path.to_path_buf()))
        }
    }
}

/// Wczytuje cały plik do pamięci.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| ToolsError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Wczytuje cały plik jako tekst UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).map_err(|_| ToolsError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// Zapisuje dane atomowo: najpierw do pliku tymczasowego w katalogu
/// docelowym, potem zmiana nazwy. Przy błędzie plik tymczasowy jest
/// usuwany, a pod ścieżką docelową nie zostaje obcięty plik.
///
/// Nowy plik dostaje uprawnienia jak przy zwykłym tworzeniu (0666 minus
/// umask); istniejący plik docelowy zachowuje swoje uprawnienia.
pub fn write_atomically(path: &Path, data: &[u8]) -> Result<()> {
    let to_write_error = |e: std::io::Error| ToolsError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut temp_file = builder.tempfile_in(dir).map_err(to_write_error)?;
    if let Ok(metadata) = fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(to_write_error)?;
    }
    temp_file.write_all(data).map_err(to_write_error)?;
    temp_file.flush().map_err(to_write_error)?;
    temp_file.persist(path).map_err(|e| to_write_error(e.error))?;
    Ok(())
}
