// ─────────────────────────────────────────────────────────────────────
// SCPN EPR Core — EPR Nuclear
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nuclear reference data for hyperfine Hamiltonian construction.
//!
//! Two independent read-only services: the element → isotope catalogue
//! and the isotope → spin property table with its style converter.

pub mod catalogue;
pub mod properties;
