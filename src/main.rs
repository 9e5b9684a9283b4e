//! Fbdiv - Feedback Divider Designer
//!
//! Picks standard feedback resistor values for an adjustable buck
//! regulator and prints the filled-in netlist.
//!
//! # Usage
//!
//! ```bash
//! fbdiv TLV62578 --vout 1.2 --rtotal 40000
//! fbdiv LMR33630 --vout 5.0 --rtotal 100000 --output psu.cir
//! ```

use std::path::PathBuf;

use clap::Parser;
use fbdiv::{
    error::{FbDivError, Result},
    render::{format_resistance, render_design},
    solve, Device, FeedbackTarget, ResistorCatalog, DEFAULT_TOTAL_RESISTANCE,
};

/// Feedback divider designer for adjustable buck regulators
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Regulator to design for (TLV62578, TPS54331, LMR33630)
    #[arg(value_name = "DEVICE")]
    device: String,

    /// Target output voltage in volts
    #[arg(short, long)]
    vout: f64,

    /// Target total feedback resistance (R1 + R2) in ohms
    #[arg(short, long, default_value_t = DEFAULT_TOTAL_RESISTANCE)]
    rtotal: f64,

    /// Write the netlist to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let device = Device::from_name(&args.device)?;

    // Validate the form inputs before they reach the solver
    let target = FeedbackTarget::new(args.vout, args.rtotal)?;
    device.check_vout(target.voltage)?;

    let catalog = ResistorCatalog::feedback_e24();
    let best = solve(device.divider(), &target, &catalog)?;
    let netlist = render_design(device.params().template, &best, &catalog)?;

    eprintln!(
        "{}: R1 = {} ({}), R2 = {} ({}), VOUT = {:.4} V",
        device.name(),
        format_resistance(best.r1),
        catalog.part_id(best.r1)?,
        format_resistance(best.r2),
        catalog.part_id(best.r2)?,
        best.achieved_voltage,
    );

    match args.output {
        Some(path) => {
            std::fs::write(&path, &netlist).map_err(|e| FbDivError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
        }
        None => print!("{netlist}"),
    }

    Ok(())
}
