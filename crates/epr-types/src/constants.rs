// ─────────────────────────────────────────────────────────────────────
// SCPN EPR Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! CODATA-2018 physical constants used by the unit conversions.

/// Planck constant (J·s), exact since the 2019 SI redefinition.
pub const PLANCK: f64 = 6.62607015e-34;

/// Nuclear magneton (J/T).
pub const NUCLEAR_MAGNETON: f64 = 5.0507837461e-27;

/// Bohr magneton (J/T).
pub const BOHR_MAGNETON: f64 = 9.2740100783e-24;

/// Free-electron g-factor (dimensionless, positive sign convention).
pub const G_ELECTRON: f64 = 2.00231930436256;
