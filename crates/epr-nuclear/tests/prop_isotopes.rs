// ─────────────────────────────────────────────────────────────────────
// SCPN EPR Core — Property-Based Tests (proptest) for epr-nuclear
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for epr-nuclear using proptest.
//!
//! Covers: catalogue/table closure, table-wide physical invariants,
//! unknown-element fallback, style-independence of the converter.

use epr_nuclear::catalogue::{catalogued_elements, isotopes_for_element};
use epr_nuclear::properties::{nuclear_properties, properties_for_isotope};
use epr_types::spin::SpinInfoStyle;
use proptest::prelude::*;

/// Every isotope reachable through the catalogue, flattened.
fn all_catalogued_isotopes() -> Vec<String> {
    catalogued_elements()
        .iter()
        .flat_map(|e| isotopes_for_element(e))
        .collect()
}

// ── Exhaustive table checks (cheap enough to run in full) ────────────

#[test]
fn catalogue_is_closed_over_property_table() {
    for element in catalogued_elements() {
        let isotopes = isotopes_for_element(element);
        assert!(!isotopes.is_empty(), "{element} has an empty listing");
        for isotope in &isotopes {
            assert!(
                properties_for_isotope(isotope).is_ok(),
                "{isotope} catalogued under {element} but missing from table"
            );
        }
    }
}

#[test]
fn table_entries_satisfy_physical_invariants() {
    for isotope in all_catalogued_isotopes() {
        let p = properties_for_isotope(&isotope).unwrap();
        assert!(p.mult >= 1, "{isotope}: multiplicity {} < 1", p.mult);
        assert!(
            (0.0..=1.0).contains(&p.abundance),
            "{isotope}: abundance {} outside [0, 1]",
            p.abundance
        );
        if p.mult == 1 {
            assert_eq!(
                p.gyro, 0.0,
                "{isotope}: spin-0 nucleus with nonzero gyromagnetic ratio"
            );
        }
    }
}

// ── Randomized properties ────────────────────────────────────────────

proptest! {
    /// Unrecognized element symbols round-trip as a singleton list.
    #[test]
    fn unknown_element_falls_back(s in "[A-Za-z0-9]{0,8}") {
        prop_assume!(!catalogued_elements().contains(&s.as_str()));
        prop_assert_eq!(isotopes_for_element(&s), vec![s.clone()]);
    }

    /// The multiplicity column is unaffected by g-factor conversion and
    /// the gyromagnetic column is unaffected by spin-number conversion.
    #[test]
    fn styles_vary_independently(idx in any::<prop::sample::Index>()) {
        let isotopes = all_catalogued_isotopes();
        let isotope = &isotopes[idx.index(isotopes.len())];

        let s1 = nuclear_properties(isotope, SpinInfoStyle::GyroMult).unwrap();
        let s2 = nuclear_properties(isotope, SpinInfoStyle::GyroSpin).unwrap();
        let s3 = nuclear_properties(isotope, SpinInfoStyle::GnMult).unwrap();
        let s4 = nuclear_properties(isotope, SpinInfoStyle::GnSpin).unwrap();

        prop_assert_eq!(s1.spin, s3.spin);
        prop_assert_eq!(s2.spin, s4.spin);
        prop_assert_eq!(s1.value, s2.value);
        prop_assert_eq!(s3.value, s4.value);

        let canonical = properties_for_isotope(isotope).unwrap();
        prop_assert_eq!(s2.spin, (f64::from(canonical.mult) - 1.0) / 2.0);
        prop_assert_eq!(s1.abundance, canonical.abundance);
        prop_assert_eq!(s4.abundance, canonical.abundance);
    }

    /// Conversions never write through to canonical storage: any style
    /// sequence yields the same result as a fresh first call.
    #[test]
    fn conversion_is_idempotent(
        idx in any::<prop::sample::Index>(),
        codes in proptest::collection::vec(1u8..=4, 1..6),
    ) {
        let isotopes = all_catalogued_isotopes();
        let isotope = &isotopes[idx.index(isotopes.len())];

        let baseline: Vec<_> = (1u8..=4)
            .map(|c| nuclear_properties(isotope, SpinInfoStyle::from_code(c).unwrap()).unwrap())
            .collect();

        for code in codes {
            let style = SpinInfoStyle::from_code(code).unwrap();
            let again = nuclear_properties(isotope, style).unwrap();
            prop_assert_eq!(again, baseline[(code - 1) as usize]);
        }
    }
}
