//! Static parameter table for the supported step-down regulators.
//!
//! Each device contributes its divider formula, its input/output operating
//! ranges, and a netlist template. Formulas are plain functions selected
//! by the [`Device`] tag, so the solver stays formula-agnostic and a
//! device row is just data.

mod templates;

use crate::error::{FbDivError, Result};

/// A pure divider formula: (R1, R2) in ohms to output voltage in volts.
pub type DividerFormula = fn(f64, f64) -> f64;

/// Feedback reference voltage of the TLV62578, in volts.
pub const TLV62578_VREF: f64 = 0.6;

/// Feedback reference voltage of the TPS54331, in volts.
pub const TPS54331_VREF: f64 = 0.8;

/// Feedback reference voltage of the LMR33630, in volts.
pub const LMR33630_VREF: f64 = 1.0;

/// Supported regulator devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    /// TI TLV62578, 1 A buck for 2.5-5.5 V rails
    Tlv62578,
    /// TI TPS54331, 3 A wide-VIN buck
    Tps54331,
    /// TI LMR33630, 3 A wide-VIN synchronous buck
    Lmr33630,
}

/// Operating limits and design template for one device.
#[derive(Debug)]
pub struct DeviceParams {
    /// Minimum input voltage in volts
    pub vin_min: f64,
    /// Maximum input voltage in volts
    pub vin_max: f64,
    /// Minimum adjustable output voltage in volts
    pub vout_min: f64,
    /// Maximum adjustable output voltage in volts
    pub vout_max: f64,
    /// Maximum output current in amps
    pub current_max: f64,
    /// Netlist template with `{vout}`, `{r1}`, `{r1_part}`, `{r2}`,
    /// `{r2_part}` placeholders
    pub template: &'static str,
}

const TLV62578_PARAMS: DeviceParams = DeviceParams {
    vin_min: 2.5,
    vin_max: 5.5,
    vout_min: 0.6,
    vout_max: 5.5,
    current_max: 1.0,
    template: templates::TLV62578_TEMPLATE,
};

const TPS54331_PARAMS: DeviceParams = DeviceParams {
    vin_min: 3.5,
    vin_max: 28.0,
    vout_min: 0.8,
    vout_max: 25.0,
    current_max: 3.0,
    template: templates::TPS54331_TEMPLATE,
};

const LMR33630_PARAMS: DeviceParams = DeviceParams {
    vin_min: 3.8,
    vin_max: 36.0,
    vout_min: 1.0,
    vout_max: 24.0,
    current_max: 3.0,
    template: templates::LMR33630_TEMPLATE,
};

fn vout_tlv62578(r1: f64, r2: f64) -> f64 {
    TLV62578_VREF * (1.0 + r1 / r2)
}

fn vout_tps54331(r1: f64, r2: f64) -> f64 {
    TPS54331_VREF * (1.0 + r1 / r2)
}

fn vout_lmr33630(r1: f64, r2: f64) -> f64 {
    LMR33630_VREF * (1.0 + r1 / r2)
}

impl Device {
    /// All supported devices, in table order.
    pub const ALL: [Device; 3] = [Device::Tlv62578, Device::Tps54331, Device::Lmr33630];

    /// Parse a device tag, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "TLV62578" => Ok(Self::Tlv62578),
            "TPS54331" => Ok(Self::Tps54331),
            "LMR33630" => Ok(Self::Lmr33630),
            _ => Err(FbDivError::unknown_device(name)),
        }
    }

    /// Canonical device name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tlv62578 => "TLV62578",
            Self::Tps54331 => "TPS54331",
            Self::Lmr33630 => "LMR33630",
        }
    }

    /// The device's divider formula.
    pub fn divider(&self) -> DividerFormula {
        match self {
            Self::Tlv62578 => vout_tlv62578,
            Self::Tps54331 => vout_tps54331,
            Self::Lmr33630 => vout_lmr33630,
        }
    }

    /// The device's operating limits and template.
    pub fn params(&self) -> &'static DeviceParams {
        match self {
            Self::Tlv62578 => &TLV62578_PARAMS,
            Self::Tps54331 => &TPS54331_PARAMS,
            Self::Lmr33630 => &LMR33630_PARAMS,
        }
    }

    /// Check that a target output voltage is within the adjustable range.
    pub fn check_vout(&self, voltage: f64) -> Result<()> {
        let params = self.params();
        if voltage < params.vout_min || voltage > params.vout_max {
            return Err(FbDivError::VoltageOutOfRange {
                device: self.name(),
                voltage,
                vout_min: params.vout_min,
                vout_max: params.vout_max,
            });
        }
        Ok(())
    }
}
