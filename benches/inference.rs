//! Criterion benchmarks for the inference pipeline, using the restaurant
//! tipping system at a few universe resolutions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzy_mamdani::{
    centroid, FuzzySurface, Inputs, MamdaniInference, MembershipFunction, Rules, Terms, Universe, Variable,
    Variables,
};

fn tipping(step: f64) -> (Variables<f64>, Rules, Variable, Variable) {
    let mut vars = Variables::new();
    let service = vars
        .add(
            "service",
            0.0..=10.0,
            Terms::new()
                .with("poor", MembershipFunction::gaussian(0.0, 1.5).unwrap())
                .with("good", MembershipFunction::gaussian(5.0, 1.5).unwrap())
                .with("excellent", MembershipFunction::gaussian(10.0, 1.5).unwrap()),
            Some(step),
        )
        .unwrap();
    let food = vars
        .add(
            "food",
            0.0..=10.0,
            Terms::new()
                .with("rancid", MembershipFunction::trapezoidal(-2.0, 0.0, 1.0, 3.0).unwrap())
                .with("delicious", MembershipFunction::trapezoidal(7.0, 9.0, 10.0, 12.0).unwrap()),
            Some(step),
        )
        .unwrap();
    let tip = vars
        .add(
            "tip",
            0.0..=30.0,
            Terms::new()
                .with("cheap", MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap())
                .with("average", MembershipFunction::triangular(10.0, 15.0, 20.0).unwrap())
                .with("generous", MembershipFunction::triangular(20.0, 25.0, 30.0).unwrap()),
            Some(step),
        )
        .unwrap();
    let mut rules = Rules::new();

    rules.add(service.is("poor").or(food.is("rancid")), tip.term("cheap"));
    rules.add(service.is("good"), tip.term("average"));
    rules.add(service.is("excellent").or(food.is("delicious")), tip.term("generous"));

    (vars, rules, service, food)
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    for step in [0.1, 0.01, 0.001] {
        let (vars, rules, service, food) = tipping(step);
        let engine = MamdaniInference::new();
        let mut inputs = Inputs::new();

        inputs.add(service, 3.0);
        inputs.add(food, 8.0);

        group.bench_with_input(BenchmarkId::from_parameter(step), &inputs, |b, inputs| {
            b.iter(|| engine.eval(black_box(&vars), &rules, inputs).unwrap())
        });
    }

    group.finish();
}

fn bench_centroid(c: &mut Criterion) {
    let universe = Universe::new(0.0, 30.0, 0.001).unwrap();
    let surface = FuzzySurface::implied(&universe, &MembershipFunction::triangular(10.0, 15.0, 20.0).unwrap(), 0.7);

    c.bench_function("centroid_30k_points", |b| b.iter(|| centroid(black_box(&surface)).unwrap()));
}

criterion_group!(benches, bench_eval, bench_centroid);
criterion_main!(benches);
