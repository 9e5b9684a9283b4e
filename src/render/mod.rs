//! Design artifact rendering.
//!
//! Fills a device netlist template with the values the solver picked.
//! Formatting here is a presentation concern: resistances print the way
//! they are written on a schematic (`22k`, `1.5k`, `470`) and voltages
//! print to two decimal places. The solver's raw f64 output carries the
//! full precision; nothing is rounded before it reaches this module.

use crate::catalog::ResistorCatalog;
use crate::error::Result;
use crate::solver::FeedbackSolution;

/// Fill a netlist template with a solved divider.
///
/// Replaces the `{vout}`, `{r1}`, `{r1_part}`, `{r2}` and `{r2_part}`
/// placeholders. Part numbers are looked up in the catalog, so rendering
/// a solution against a catalog it did not come from fails with
/// [`crate::FbDivError::PartNotFound`] instead of emitting a bogus
/// artifact.
pub fn render_design(
    template: &str,
    solution: &FeedbackSolution,
    catalog: &ResistorCatalog,
) -> Result<String> {
    let r1_part = catalog.part_id(solution.r1)?;
    let r2_part = catalog.part_id(solution.r2)?;

    Ok(template
        .replace("{vout}", &format_voltage(solution.achieved_voltage))
        .replace("{r1}", &format_resistance(solution.r1))
        .replace("{r1_part}", r1_part)
        .replace("{r2}", &format_resistance(solution.r2))
        .replace("{r2_part}", r2_part))
}

/// Format a voltage to two decimal places.
pub fn format_voltage(volts: f64) -> String {
    format!("{volts:.2}")
}

/// Format a resistance the way it is written on a schematic.
///
/// Whole multiples collapse into `k`/`M` suffixes: `470`, `22k`, `1.5k`,
/// `1M`.
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1_000_000.0 {
        scaled(ohms / 1_000_000.0, "M")
    } else if ohms >= 1_000.0 {
        scaled(ohms / 1_000.0, "k")
    } else {
        scaled(ohms, "")
    }
}

fn scaled(value: f64, suffix: &str) -> String {
    if value == value.trunc() {
        format!("{}{}", value as i64, suffix)
    } else {
        format!("{}{}", value, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::Device;
    use crate::solver::{solve, FeedbackTarget};

    #[test]
    fn test_render_fills_every_placeholder() {
        let catalog = ResistorCatalog::feedback_e24();
        let target = FeedbackTarget::new(1.2, 40_000.0).unwrap();
        let device = Device::Tlv62578;
        let best = solve(device.divider(), &target, &catalog).unwrap();

        let netlist = render_design(device.params().template, &best, &catalog).unwrap();

        assert!(!netlist.contains('{'));
        assert!(netlist.contains("VOUT = 1.20 V"));
        assert!(netlist.contains("R1  VOUT FB   20k   ; RC0603FR-0720KL"));
        assert!(netlist.contains("R2  FB   GND  20k   ; RC0603FR-0720KL"));
    }

    #[test]
    fn test_render_rejects_foreign_solution() {
        let catalog = ResistorCatalog::feedback_e24();
        let foreign = FeedbackSolution {
            r1: 123.0,
            r2: 456.0,
            achieved_voltage: 1.0,
            score: 0.0,
        };
        assert!(render_design("{r1} {r2}", &foreign, &catalog).is_err());
    }

    #[test]
    fn test_format_resistance() {
        assert_eq!(format_resistance(470.0), "470");
        assert_eq!(format_resistance(1_500.0), "1.5k");
        assert_eq!(format_resistance(22_000.0), "22k");
        assert_eq!(format_resistance(150_000.0), "150k");
        assert_eq!(format_resistance(1_000_000.0), "1M");
    }

    #[test]
    fn test_format_voltage() {
        assert_eq!(format_voltage(1.2), "1.20");
        assert_eq!(format_voltage(3.2999999), "3.30");
        assert_eq!(format_voltage(5.0), "5.00");
    }
}
