//! Dispatch benchmarks: the whole API surface is the hot path.
//!
//! Measures: hit position, miss-through-to-fallback, none short-circuit,
//! clause-count scaling, and trace overhead.

use std::any::Any;
use typeswitch::prelude::*;

fn main() {
    divan::main();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Test fixtures
// ═══════════════════════════════════════════════════════════════════════════════

struct Needle(u64);
struct Decoy;

fn needle() -> Box<dyn Any> {
    Box::new(Needle(7))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Core scenario: hit position
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn hit_first_clause(bencher: divan::Bencher) {
    let subject = needle();

    bencher.bench_local(|| {
        TypeSwitch::over(subject.as_ref(), |n: &Needle| {
            divan::black_box(n.0);
        })
        .is_resolved()
    });
}

#[divan::bench]
fn hit_third_clause(bencher: divan::Bencher) {
    let subject = needle();

    bencher.bench_local(|| {
        TypeSwitch::over(subject.as_ref(), |_: &Decoy| {})
            .or_on(|_: &String| {})
            .or_on(|n: &Needle| {
                divan::black_box(n.0);
            })
            .is_resolved()
    });
}

#[divan::bench]
fn miss_into_fallback(bencher: divan::Bencher) {
    let subject = needle();

    bencher.bench_local(|| {
        let mut fell_back = false;
        TypeSwitch::over(subject.as_ref(), |_: &Decoy| {})
            .or_on(|_: &String| {})
            .or_else(|_| fell_back = true);
        fell_back
    });
}

#[divan::bench]
fn none_short_circuit(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        let mut was_none = false;
        TypeSwitch::over(Subject::None, |_: &Decoy| {})
            .or_none(|| was_none = true)
            .or_else(|_| {});
        was_none
    });
}

// ═══════════════════════════════════════════════════════════════════════════════
// Scaling: clause count (first-hit-wins scan cost)
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench(args = [1, 8, 64])]
fn clause_count_miss(bencher: divan::Bencher, n: usize) {
    let subject = needle();

    // Worst case: every clause tests and misses, then the fallback fires.
    bencher.bench_local(|| {
        let chain = (0..n).fold(
            TypeSwitch::over(subject.as_ref(), |_: &Decoy| {}),
            |chain, _| chain.or_on(|_: &Decoy| {}),
        );
        chain.or_raise(0_u8).is_err()
    });
}

#[divan::bench(args = [1, 8, 64])]
fn clause_count_resolved_skips(bencher: divan::Bencher, n: usize) {
    let subject = needle();

    // Resolved on the first clause; the rest only check the flag.
    bencher.bench_local(|| {
        (0..n)
            .fold(
                TypeSwitch::over(subject.as_ref(), |_: &Needle| {}),
                |chain, _| chain.or_on(|_: &Decoy| {}),
            )
            .is_resolved()
    });
}

// ═══════════════════════════════════════════════════════════════════════════════
// Trace overhead: plain vs traced
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn trace_overhead_plain(bencher: divan::Bencher) {
    let subject = needle();

    bencher.bench_local(|| {
        TypeSwitch::over(subject.as_ref(), |_: &Decoy| {})
            .or_on(|_: &String| {})
            .or_on(|_: &Needle| {})
            .is_resolved()
    });
}

#[divan::bench]
fn trace_overhead_traced(bencher: divan::Bencher) {
    let subject = needle();

    bencher.bench_local(|| {
        let mut trace = SwitchTrace::new();
        let resolved = TypeSwitch::traced(subject.as_ref(), &mut trace, |_: &Decoy| {})
            .or_on(|_: &String| {})
            .or_on(|_: &Needle| {})
            .is_resolved();
        (resolved, trace.steps.len())
    });
}
