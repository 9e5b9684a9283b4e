//! Error types for the feedback divider designer.
//!
//! This module provides a unified error type [`FbDivError`] that covers
//! all error conditions that can occur during catalog construction,
//! divider solving, and artifact rendering.

use thiserror::Error;

/// Result type alias using [`FbDivError`].
pub type Result<T> = std::result::Result<T, FbDivError>;

/// Unified error type for all fbdiv operations.
#[derive(Error, Debug)]
pub enum FbDivError {
    // ============ Input Errors ============
    /// A solve target was not a finite number
    #[error("Target {name} must be finite, got {value}")]
    NonFiniteTarget { name: &'static str, value: f64 },

    /// A solve target was zero or negative
    #[error("Target {name} must be positive, got {value}")]
    NonPositiveTarget { name: &'static str, value: f64 },

    /// Target voltage falls outside the device's adjustable output range
    #[error("Target voltage {voltage} V is outside the {device} output range {vout_min}-{vout_max} V")]
    VoltageOutOfRange {
        device: &'static str,
        voltage: f64,
        vout_min: f64,
        vout_max: f64,
    },

    // ============ Catalog Errors ============
    /// Catalog has no values to search
    #[error("Resistor catalog is empty")]
    EmptyCatalog,

    /// Catalog value is not a positive finite resistance
    #[error("Catalog value {ohms} ohm is not a positive finite resistance")]
    InvalidCatalogValue { ohms: f64 },

    /// The same resistance was mapped to more than one part
    #[error("Duplicate catalog value {ohms} ohm")]
    DuplicateCatalogValue { ohms: f64 },

    /// No part number is mapped to the requested resistance
    #[error("No part number for {ohms} ohm in catalog")]
    PartNotFound { ohms: f64 },

    // ============ Solver Errors ============
    /// The divider formula produced a non-finite voltage for every
    /// candidate pair, so no pair could be selected
    #[error("Divider formula produced no finite candidate over {pairs} pairs")]
    NoFiniteCandidate { pairs: usize },

    // ============ Device Errors ============
    /// Device tag not present in the parameter table
    #[error("Unknown device '{name}' (supported: TLV62578, TPS54331, LMR33630)")]
    UnknownDevice { name: String },

    // ============ I/O Errors ============
    /// Error writing the rendered design artifact
    #[error("Failed to write design to '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FbDivError {
    /// Create a non-finite target error
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFiniteTarget { name, value }
    }

    /// Create a non-positive target error
    pub fn non_positive(name: &'static str, value: f64) -> Self {
        Self::NonPositiveTarget { name, value }
    }

    /// Create an unknown device error
    pub fn unknown_device(name: impl Into<String>) -> Self {
        Self::UnknownDevice { name: name.into() }
    }
}
