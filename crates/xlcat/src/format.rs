//! Supported workbook container formats.

use std::path::Path;

/// Workbook container format, selecting the driver dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Excel 97-2003 binary container (`.xls`)
    LegacyBinary,
    /// Excel Open XML zipped container (`.xlsx`)
    OpenXml,
}

impl FileFormat {
    /// The canonical file extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::LegacyBinary => "xls",
            FileFormat::OpenXml => "xlsx",
        }
    }

    /// Detect the format from a path's extension.
    ///
    /// Returns `None` for unknown or missing extensions; the caller then
    /// has to state the format explicitly.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xls" => Some(FileFormat::LegacyBinary),
            "xlsx" | "xlsm" => Some(FileFormat::OpenXml),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_known_extensions() {
        assert_eq!(
            FileFormat::from_path("book.xls"),
            Some(FileFormat::LegacyBinary)
        );
        assert_eq!(FileFormat::from_path("book.xlsx"), Some(FileFormat::OpenXml));
        assert_eq!(FileFormat::from_path("book.xlsm"), Some(FileFormat::OpenXml));
    }

    #[test]
    fn test_from_path_is_case_insensitive() {
        assert_eq!(
            FileFormat::from_path("BOOK.XLS"),
            Some(FileFormat::LegacyBinary)
        );
        assert_eq!(
            FileFormat::from_path("/tmp/Data.XlSx"),
            Some(FileFormat::OpenXml)
        );
    }

    #[test]
    fn test_from_path_unknown() {
        assert_eq!(FileFormat::from_path("notes.txt"), None);
        assert_eq!(FileFormat::from_path("no_extension"), None);
        assert_eq!(FileFormat::from_path(""), None);
    }

    #[test]
    fn test_extension_round_trip() {
        for format in [FileFormat::LegacyBinary, FileFormat::OpenXml] {
            let name = format!("file.{}", format.extension());
            assert_eq!(FileFormat::from_path(name), Some(format));
        }
    }
}
