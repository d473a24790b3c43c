//! Combinator overhead benchmarks.

use std::hint::black_box;

use branded::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};

enum DigitString {}
enum Length4 {}

fn bench_merges(c: &mut Criterion) {
    let rule = digits().and(min_length(4)).and(max_length(10));

    c.bench_function("and_chain_member", |b| {
        b.iter(|| rule.validate(black_box("123456")))
    });
    c.bench_function("and_chain_offender", |b| {
        b.iter(|| rule.validate(black_box("12a")))
    });

    let digit = TypeHandler::<String, DigitString>::new(digits());
    let four = TypeHandler::<String, Length4>::new(exact_length(4));
    let meet = intersection(&digit, &four);
    let candidate = "1234".to_string();

    c.bench_function("handler_intersection_guard", |b| {
        b.iter(|| meet.is(black_box(&candidate)))
    });
}

criterion_group!(benches, bench_merges);
criterion_main!(benches);
