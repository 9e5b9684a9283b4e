//! Built-in feedback resistor stock.
//!
//! E24 values from 10k to 150k, the range that keeps divider current in
//! the tens of microamps for common rail voltages while staying well
//! below the FB pin leakage floor. Part numbers are Yageo RC0603FR-07
//! 1% thick film, the jellybean choice for feedback duty.

/// (ohms, vendor part number), sorted ascending, no duplicates.
pub(super) const FEEDBACK_E24: &[(f64, &str)] = &[
    (10_000.0, "RC0603FR-0710KL"),
    (11_000.0, "RC0603FR-0711KL"),
    (12_000.0, "RC0603FR-0712KL"),
    (13_000.0, "RC0603FR-0713KL"),
    (15_000.0, "RC0603FR-0715KL"),
    (16_000.0, "RC0603FR-0716KL"),
    (18_000.0, "RC0603FR-0718KL"),
    (20_000.0, "RC0603FR-0720KL"),
    (22_000.0, "RC0603FR-0722KL"),
    (24_000.0, "RC0603FR-0724KL"),
    (27_000.0, "RC0603FR-0727KL"),
    (30_000.0, "RC0603FR-0730KL"),
    (33_000.0, "RC0603FR-0733KL"),
    (36_000.0, "RC0603FR-0736KL"),
    (39_000.0, "RC0603FR-0739KL"),
    (43_000.0, "RC0603FR-0743KL"),
    (47_000.0, "RC0603FR-0747KL"),
    (51_000.0, "RC0603FR-0751KL"),
    (56_000.0, "RC0603FR-0756KL"),
    (62_000.0, "RC0603FR-0762KL"),
    (68_000.0, "RC0603FR-0768KL"),
    (75_000.0, "RC0603FR-0775KL"),
    (82_000.0, "RC0603FR-0782KL"),
    (91_000.0, "RC0603FR-0791KL"),
    (100_000.0, "RC0603FR-07100KL"),
    (110_000.0, "RC0603FR-07110KL"),
    (120_000.0, "RC0603FR-07120KL"),
    (130_000.0, "RC0603FR-07130KL"),
    (150_000.0, "RC0603FR-07150KL"),
];
