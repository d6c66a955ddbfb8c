criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        solving_atomless_substitution,
        solving_atomless_midpoint,
        solving_atomless_degenerate,
        solving_two_player_equilibrium,
}

use allpay::*;

fn solving_atomless_substitution(c: &mut criterion::Criterion) {
    let value = Value::from_fn(|s, t| 2. - s * t);
    let cost = Cost::default();
    c.bench_function("solve an atomless distribution (substitution)", |b| {
        b.iter(|| Distribution::solve(&value, &cost, 1., DEFAULT_NUM, Method::Substitution))
    });
}

fn solving_atomless_midpoint(c: &mut criterion::Criterion) {
    let value = Value::from_fn(|s, t| 2. - s * t);
    let cost = Cost::default();
    c.bench_function("solve an atomless distribution (midpoint)", |b| {
        b.iter(|| Distribution::solve(&value, &cost, 1., DEFAULT_NUM, Method::Midpoint))
    });
}

fn solving_atomless_degenerate(c: &mut criterion::Criterion) {
    let value = Value::from(1.);
    let cost = Cost::from_fn(|s| s * s);
    c.bench_function("solve an atomless distribution (fixed prize)", |b| {
        b.iter(|| Distribution::solve(&value, &cost, 1., DEFAULT_NUM, Method::default()))
    });
}

fn solving_two_player_equilibrium(c: &mut criterion::Criterion) {
    let costs = (Cost::from_fn(|s| s * s), Cost::default());
    c.bench_function("solve a two-player equilibrium", |b| {
        b.iter(|| equilibrium(1.0, costs.clone(), None, DEFAULT_NUM))
    });
}
