//! Netlist templates for the supported regulators.
//!
//! Each template is the minimal application circuit from the device
//! datasheet, SPICE-style, with placeholders for the values the solver
//! picks: `{vout}`, `{r1}`, `{r1_part}`, `{r2}`, `{r2_part}`.

pub(super) const TLV62578_TEMPLATE: &str = "\
* TLV62578 adjustable buck, VOUT = {vout} V
* Feedback: VOUT = 0.6 * (1 + R1/R2)
XU1 VIN EN SW FB GND TLV62578
L1  SW   VOUT 2.2u
CIN VIN  GND  10u
CO  VOUT GND  22u
R1  VOUT FB   {r1}   ; {r1_part}
R2  FB   GND  {r2}   ; {r2_part}
";

pub(super) const TPS54331_TEMPLATE: &str = "\
* TPS54331 adjustable buck, VOUT = {vout} V
* Feedback: VOUT = 0.8 * (1 + R1/R2)
XU1 VIN EN BOOT PH VSNS COMP GND TPS54331
L1  PH   VOUT 10u
CB  BOOT PH   100n
CIN VIN  GND  10u
CO  VOUT GND  47u
R1  VOUT VSNS {r1}   ; {r1_part}
R2  VSNS GND  {r2}   ; {r2_part}
";

pub(super) const LMR33630_TEMPLATE: &str = "\
* LMR33630 adjustable buck, VOUT = {vout} V
* Feedback: VOUT = 1 + R1/R2  (VREF = 1.0 V)
XU1 VIN EN PG SW FB GND LMR33630
L1  SW   VOUT 6.8u
CIN VIN  GND  10u
CO  VOUT GND  44u
CFF VOUT FB   100p
R1  VOUT FB   {r1}   ; {r1_part}
R2  FB   GND  {r2}   ; {r2_part}
";
