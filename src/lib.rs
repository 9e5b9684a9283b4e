//! # Fbdiv
//!
//! A feedback divider designer for adjustable step-down regulators.
//!
//! This library provides:
//! - A catalog of stocked feedback resistor values with vendor part numbers
//! - A parameter table for supported buck regulators (divider formula,
//!   operating ranges, netlist template)
//! - A solver that picks the (R1, R2) pair best matching a target output
//!   voltage and a target total divider resistance
//! - Rendering of the solved divider into a ready-to-use netlist
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`catalog`] - Stocked resistor values and part numbers
//! - [`devices`] - Regulator parameter table and divider formulas
//! - [`solver`] - The (R1, R2) pair search
//! - [`render`] - Netlist template substitution
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! fbdiv TLV62578 --vout 1.2 --rtotal 40000
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmFeedbackDesign } from 'fbdiv';
//!
//! const design = new WasmFeedbackDesign('TLV62578', 1.2, 40000);
//! console.log(design.netlist);
//! ```
//!
//! ## Selection method
//!
//! For each catalog pair (R1, R2), both drawn independently so that
//! asymmetric formulas see both orderings, the solver computes
//!
//! ```text
//! score = 1e5 * |Vtarget - formula(R1, R2)| + |Rtarget - (R1 + R2)|
//! ```
//!
//! and keeps the strictly smallest score, first encountered winning ties.
//! The weight makes voltage accuracy dominate; total resistance only
//! decides among pairs that hit the voltage equally well.

pub mod catalog;
pub mod devices;
pub mod error;
pub mod render;
pub mod solver;

// Re-export main types for convenience
pub use catalog::ResistorCatalog;
pub use devices::{Device, DeviceParams};
pub use error::{FbDivError, Result};
pub use render::render_design;
pub use solver::{solve, FeedbackSolution, FeedbackTarget};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmFeedbackDesign;

/// Default target for R1 + R2 in ohms.
///
/// Around 40k the divider draws tens of microamps from a low-voltage
/// rail without starving the FB pin of bias current.
pub const DEFAULT_TOTAL_RESISTANCE: f64 = 40_000.0;
