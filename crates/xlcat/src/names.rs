//! Sheet-name hygiene - cleaning and filtering the driver catalog.
//!
//! Spreadsheet drivers report worksheet names with a trailing delimiter
//! and mix internal objects into the catalog: hidden ranges named with
//! underscores, and the `FilterDatabase` ranges Excel creates for
//! auto-filters. This module turns that raw catalog into the logical
//! sheet list.

/// Cleaning and exclusion rules applied to raw catalog names.
///
/// The defaults reproduce the conventions of the Excel drivers this crate
/// was written against; other driver versions with different internal
/// naming can supply their own rules.
#[derive(Debug, Clone)]
pub struct SheetNameFilter {
    /// Trailing delimiter the driver appends to worksheet names
    pub delimiter: char,
    /// Reject cleaned names that start or end with an underscore
    /// (driver-internal and system ranges)
    pub exclude_underscore_edges: bool,
    /// Reject cleaned names ending in any of these suffixes
    pub excluded_suffixes: Vec<String>,
}

impl Default for SheetNameFilter {
    fn default() -> Self {
        Self {
            delimiter: '$',
            exclude_underscore_edges: true,
            excluded_suffixes: vec!["FilterDatabase".to_string()],
        }
    }
}

impl SheetNameFilter {
    /// Strip one trailing delimiter and surrounding whitespace
    pub fn clean(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let stripped = trimmed.strip_suffix(self.delimiter).unwrap_or(trimmed);
        stripped.trim().to_string()
    }

    /// Whether a cleaned name survives the exclusion rules
    pub fn accepts(&self, cleaned: &str) -> bool {
        // A bare delimiter cleans to nothing
        if cleaned.is_empty() {
            return false;
        }
        if self.exclude_underscore_edges
            && (cleaned.starts_with('_') || cleaned.ends_with('_'))
        {
            return false;
        }
        !self
            .excluded_suffixes
            .iter()
            .any(|suffix| cleaned.ends_with(suffix.as_str()))
    }

    /// Clean, filter, and de-duplicate a raw catalog listing.
    ///
    /// Surviving names keep the catalog order; a duplicate cleaned name
    /// is kept at its first occurrence.
    pub fn apply<I, S>(&self, raw_names: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted: Vec<String> = Vec::new();
        for raw in raw_names {
            let cleaned = self.clean(raw.as_ref());
            if self.accepts(&cleaned) && !accepted.contains(&cleaned) {
                accepted.push(cleaned);
            }
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> SheetNameFilter {
        SheetNameFilter::default()
    }

    #[test]
    fn test_clean_strips_trailing_delimiter() {
        let f = default_filter();
        assert_eq!(f.clean("Sheet1$"), "Sheet1");
        assert_eq!(f.clean("Sheet1"), "Sheet1");
    }

    #[test]
    fn test_clean_strips_surrounding_whitespace() {
        let f = default_filter();
        assert_eq!(f.clean("  My Sheet$ "), "My Sheet");
        assert_eq!(f.clean(" plain "), "plain");
    }

    #[test]
    fn test_clean_keeps_interior_delimiter() {
        let f = default_filter();
        assert_eq!(f.clean("P$L$"), "P$L");
    }

    #[test]
    fn test_rejects_underscore_edges() {
        let f = default_filter();
        assert!(!f.accepts("_hidden"));
        assert!(!f.accepts("hidden_"));
        assert!(f.accepts("in_the_middle"));
    }

    #[test]
    fn test_rejects_filter_database_suffix() {
        let f = default_filter();
        assert!(!f.accepts("Sheet1FilterDatabase"));
        assert!(!f.accepts("first$FilterDatabase"));
        assert!(f.accepts("FilterDatabaseReport"));
    }

    #[test]
    fn test_rejects_empty_cleaned_name() {
        let f = default_filter();
        assert!(!f.accepts(""));
        assert!(f.apply(["$"]).is_empty());
    }

    #[test]
    fn test_apply_preserves_catalog_order() {
        let f = default_filter();
        let raw = ["first$", "second$", "third$"];
        assert_eq!(f.apply(raw), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_apply_deduplicates_keeping_first() {
        let f = default_filter();
        let raw = ["Sheet1$", "Data$", "Sheet1", "Data$"];
        assert_eq!(f.apply(raw), vec!["Sheet1", "Data"]);
    }

    #[test]
    fn test_apply_full_catalog() {
        let f = default_filter();
        let raw = [
            "first$",
            "_xlnm#_FilterDatabase",
            "second$",
            "second$FilterDatabase",
            "third$",
            "_hidden$",
        ];
        assert_eq!(f.apply(raw), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_custom_rules() {
        let f = SheetNameFilter {
            delimiter: '#',
            exclude_underscore_edges: false,
            excluded_suffixes: vec!["Backup".to_string()],
        };
        assert_eq!(f.clean("Sheet1#"), "Sheet1");
        assert!(f.accepts("_hidden"));
        assert!(!f.accepts("SheetBackup"));
    }
}
