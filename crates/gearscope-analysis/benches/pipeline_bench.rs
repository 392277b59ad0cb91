use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gearscope_analysis::AnalysisPipeline;
use gearscope_core::{rolling_mean, Table, UploadedDataset};
use gearscope_viz::NullChartRenderer;
use rand::prelude::*;
use rand_distr::Normal;

/// Sine carrier plus gaussian noise, as CSV text
fn generate_signal_csv(rows: usize, noise: f64, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, noise).unwrap();
    let mut csv = String::from("sensor1,sensor2\n");
    for i in 0..rows {
        let t = i as f64 / 20.0;
        csv.push_str(&format!(
            "{},{}\n",
            t.sin() + normal.sample(&mut rng),
            t.cos() + normal.sample(&mut rng)
        ));
    }
    csv
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let reference = Table::from_csv_bytes(generate_signal_csv(1000, 0.05, 7).as_bytes()).unwrap();
    let pipeline = AnalysisPipeline::new(NullChartRenderer);

    for &rows in &[50usize, 500, 5000] {
        let table = Table::from_csv_bytes(generate_signal_csv(rows, 0.4, 42).as_bytes()).unwrap();
        let dataset = UploadedDataset::new("bench", table);
        group.bench_with_input(BenchmarkId::new("run", rows), &dataset, |b, dataset| {
            b.iter(|| pipeline.run(black_box(&reference), Some(dataset)))
        });
    }
    group.finish();
}

fn bench_csv_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_parse");
    for &rows in &[500usize, 5000] {
        let csv = generate_signal_csv(rows, 0.4, 1);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &csv, |b, csv| {
            b.iter(|| Table::from_csv_bytes(black_box(csv.as_bytes())))
        });
    }
    group.finish();
}

fn bench_rolling_mean(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let data: Vec<Option<f64>> = (0..500).map(|_| Some(normal.sample(&mut rng))).collect();
    c.bench_function("rolling_mean_500_w10", |b| {
        b.iter(|| rolling_mean(black_box(&data), 10))
    });
}

criterion_group!(benches, bench_pipeline, bench_csv_parse, bench_rolling_mean);
criterion_main!(benches);
