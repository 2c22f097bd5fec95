// -------------------------------------------------------------------------
// SCPN EPR Core -- Nuclear Lookup Benchmark
// Measures the keyed catalogue/table lookups and the full style
// conversion path used per nucleus during spin-system setup.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, Criterion};
use epr_nuclear::catalogue::isotopes_for_element;
use epr_nuclear::properties::{nuclear_properties, properties_for_isotope};
use epr_types::spin::SpinInfoStyle;
use std::hint::black_box;

fn bench_lookups(c: &mut Criterion) {
    c.bench_function("catalogue/Fe", |b| {
        b.iter(|| isotopes_for_element(black_box("Fe")))
    });

    c.bench_function("properties/55Mn", |b| {
        b.iter(|| properties_for_isotope(black_box("55Mn")).unwrap())
    });

    c.bench_function("style_convert/55Mn_gn_spin", |b| {
        b.iter(|| nuclear_properties(black_box("55Mn"), SpinInfoStyle::GnSpin).unwrap())
    });
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
