//! WASM bindings for Fbdiv.
//!
//! This module provides JavaScript-friendly bindings so a browser form
//! can drive the solver directly.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmFeedbackDesign, supported_devices } from 'fbdiv';
//!
//! await init();
//!
//! const design = new WasmFeedbackDesign('TLV62578', 1.2, 40000);
//! console.log(design.r1, design.r2, design.achieved_voltage);
//! document.querySelector('#netlist').textContent = design.netlist;
//! ```

use wasm_bindgen::prelude::*;

use crate::catalog::ResistorCatalog;
use crate::devices::Device;
use crate::render::render_design;
use crate::solver::{solve, FeedbackSolution, FeedbackTarget};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A solved feedback divider design, ready for display in a web form.
#[wasm_bindgen]
pub struct WasmFeedbackDesign {
    solution: FeedbackSolution,
    r1_part: String,
    r2_part: String,
    netlist: String,
}

#[wasm_bindgen]
impl WasmFeedbackDesign {
    /// Solve a divider for a device and render its netlist.
    ///
    /// # Arguments
    /// * `device` - Device tag, e.g. "TLV62578" (case-insensitive)
    /// * `target_voltage` - Target output voltage in volts
    /// * `target_total_resistance` - Target R1 + R2 in ohms
    ///
    /// # Returns
    /// A new `WasmFeedbackDesign` or an error string when the device is
    /// unknown, a target is invalid, or the voltage is out of range.
    #[wasm_bindgen(constructor)]
    pub fn new(
        device: &str,
        target_voltage: f64,
        target_total_resistance: f64,
    ) -> Result<WasmFeedbackDesign, JsValue> {
        let device = Device::from_name(device).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let target = FeedbackTarget::new(target_voltage, target_total_resistance)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        device
            .check_vout(target.voltage)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let catalog = ResistorCatalog::feedback_e24();
        let solution = solve(device.divider(), &target, &catalog)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let netlist = render_design(device.params().template, &solution, &catalog)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let r1_part = catalog
            .part_id(solution.r1)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .to_string();
        let r2_part = catalog
            .part_id(solution.r2)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .to_string();

        Ok(WasmFeedbackDesign {
            solution,
            r1_part,
            r2_part,
            netlist,
        })
    }

    /// Upper divider resistor in ohms.
    #[wasm_bindgen(getter)]
    pub fn r1(&self) -> f64 {
        self.solution.r1
    }

    /// Lower divider resistor in ohms.
    #[wasm_bindgen(getter)]
    pub fn r2(&self) -> f64 {
        self.solution.r2
    }

    /// Vendor part number for R1.
    #[wasm_bindgen(getter)]
    pub fn r1_part(&self) -> String {
        self.r1_part.clone()
    }

    /// Vendor part number for R2.
    #[wasm_bindgen(getter)]
    pub fn r2_part(&self) -> String {
        self.r2_part.clone()
    }

    /// Output voltage the picked pair actually produces.
    #[wasm_bindgen(getter)]
    pub fn achieved_voltage(&self) -> f64 {
        self.solution.achieved_voltage
    }

    /// The pair's score under the weighted error sum.
    #[wasm_bindgen(getter)]
    pub fn score(&self) -> f64 {
        self.solution.score
    }

    /// The rendered netlist artifact.
    #[wasm_bindgen(getter)]
    pub fn netlist(&self) -> String {
        self.netlist.clone()
    }
}

/// List the supported device tags.
#[wasm_bindgen]
pub fn supported_devices() -> Vec<String> {
    Device::ALL.iter().map(|d| d.name().to_string()).collect()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
