use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spectral_whitening::{
    whiten, PerRecord, Record, Representation, WhitenConfig, WidthUnit,
};

fn make_batch(records: usize, len: usize) -> Vec<Record> {
    (0..records)
        .map(|r| {
            let samples: Vec<f64> = (0..len)
                .map(|n| {
                    let t = n as f64 * 0.01 + r as f64;
                    (2.0 * std::f64::consts::PI * 5.0 * t).sin() + 0.3 * (17.0 * t).cos()
                })
                .collect();
            Record::new(Representation::Time, samples, 0.01)
        })
        .collect()
}

fn bench_whiten(c: &mut Criterion) {
    let config = WhitenConfig {
        width: PerRecord::Uniform(9.0),
        unit: PerRecord::Uniform(WidthUnit::Samples),
        ..WhitenConfig::default()
    };

    c.bench_function("whiten_8x4096_time", |b| {
        let batch = make_batch(8, 4096);
        b.iter(|| whiten(black_box(&batch), black_box(&config)).unwrap())
    });

    c.bench_function("whiten_1x65536_time", |b| {
        let batch = make_batch(1, 65536);
        b.iter(|| whiten(black_box(&batch), black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_whiten);
criterion_main!(benches);
