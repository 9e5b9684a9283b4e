//! Resistor catalog: the ordered set of stocked resistance values and
//! their vendor part numbers.
//!
//! The catalog is constructed once and read-only afterwards. Values are
//! kept sorted ascending so that every enumeration over the catalog is
//! deterministic, which the solver relies on for reproducible tie-breaks.

mod parts;

use crate::error::{FbDivError, Result};

use parts::FEEDBACK_E24;

/// One stocked resistor: a resistance value and its vendor part number.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Resistance in ohms
    pub ohms: f64,
    /// Vendor part number
    pub part: String,
}

/// An immutable set of stocked resistor values, sorted ascending.
#[derive(Debug, Clone)]
pub struct ResistorCatalog {
    entries: Vec<CatalogEntry>,
}

impl ResistorCatalog {
    /// Build a catalog from (ohms, part number) pairs.
    ///
    /// Values are sorted ascending. Construction fails on an empty input,
    /// on a value that is not positive and finite, and on duplicate values.
    pub fn from_parts<I, S>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, S)>,
        S: Into<String>,
    {
        let mut entries: Vec<CatalogEntry> = parts
            .into_iter()
            .map(|(ohms, part)| CatalogEntry {
                ohms,
                part: part.into(),
            })
            .collect();

        if entries.is_empty() {
            return Err(FbDivError::EmptyCatalog);
        }

        for entry in &entries {
            if !entry.ohms.is_finite() || entry.ohms <= 0.0 {
                return Err(FbDivError::InvalidCatalogValue { ohms: entry.ohms });
            }
        }

        entries.sort_by(|a, b| a.ohms.total_cmp(&b.ohms));

        for pair in entries.windows(2) {
            if pair[0].ohms == pair[1].ohms {
                return Err(FbDivError::DuplicateCatalogValue { ohms: pair[0].ohms });
            }
        }

        Ok(Self { entries })
    }

    /// The built-in feedback resistor stock: E24 values from 10k to 150k
    /// as Yageo RC0603FR-07 1% parts.
    pub fn feedback_e24() -> Self {
        // The static table is sorted and duplicate-free.
        Self {
            entries: FEEDBACK_E24
                .iter()
                .map(|&(ohms, part)| CatalogEntry {
                    ohms,
                    part: part.to_string(),
                })
                .collect(),
        }
    }

    /// Iterate over resistance values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.ohms)
    }

    /// Iterate over all entries in ascending value order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Look up the part number for an exact resistance value.
    pub fn part_id(&self, ohms: f64) -> Result<&str> {
        self.entries
            .iter()
            .find(|e| e.ohms == ohms)
            .map(|e| e.part.as_str())
            .ok_or(FbDivError::PartNotFound { ohms })
    }

    /// Check whether an exact resistance value is stocked.
    pub fn contains(&self, ohms: f64) -> bool {
        self.entries.iter().any(|e| e.ohms == ohms)
    }

    /// Number of stocked values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_e24_is_valid_through_checked_constructor() {
        let catalog = ResistorCatalog::from_parts(
            FEEDBACK_E24.iter().map(|&(ohms, part)| (ohms, part)),
        )
        .unwrap();
        assert_eq!(catalog.len(), 29);
    }

    #[test]
    fn test_feedback_e24_bounds_and_order() {
        let catalog = ResistorCatalog::feedback_e24();
        let values: Vec<f64> = catalog.values().collect();
        assert_eq!(values.first(), Some(&10_000.0));
        assert_eq!(values.last(), Some(&150_000.0));
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_part_lookup() {
        let catalog = ResistorCatalog::feedback_e24();
        assert_eq!(catalog.part_id(10_000.0).unwrap(), "RC0603FR-0710KL");
        assert_eq!(catalog.part_id(150_000.0).unwrap(), "RC0603FR-07150KL");
        assert!(matches!(
            catalog.part_id(9_999.0),
            Err(FbDivError::PartNotFound { .. })
        ));
    }

    #[test]
    fn test_from_parts_sorts_input() {
        let catalog =
            ResistorCatalog::from_parts(vec![(470.0, "B"), (100.0, "A"), (1_000.0, "C")]).unwrap();
        let values: Vec<f64> = catalog.values().collect();
        assert_eq!(values, vec![100.0, 470.0, 1_000.0]);
        assert_eq!(catalog.part_id(470.0).unwrap(), "B");
    }

    #[test]
    fn test_from_parts_rejects_empty() {
        let parts: Vec<(f64, String)> = Vec::new();
        assert!(matches!(
            ResistorCatalog::from_parts(parts),
            Err(FbDivError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_from_parts_rejects_duplicates() {
        assert!(matches!(
            ResistorCatalog::from_parts(vec![(100.0, "A"), (100.0, "B")]),
            Err(FbDivError::DuplicateCatalogValue { .. })
        ));
    }

    #[test]
    fn test_from_parts_rejects_bad_values() {
        assert!(matches!(
            ResistorCatalog::from_parts(vec![(0.0, "A")]),
            Err(FbDivError::InvalidCatalogValue { .. })
        ));
        assert!(matches!(
            ResistorCatalog::from_parts(vec![(-47.0, "A")]),
            Err(FbDivError::InvalidCatalogValue { .. })
        ));
        assert!(matches!(
            ResistorCatalog::from_parts(vec![(f64::NAN, "A")]),
            Err(FbDivError::InvalidCatalogValue { .. })
        ));
    }

    #[test]
    fn test_nan_query_misses() {
        let catalog = ResistorCatalog::feedback_e24();
        assert!(!catalog.contains(f64::NAN));
        assert!(catalog.part_id(f64::NAN).is_err());
    }
}
