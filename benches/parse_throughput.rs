use coordmap::parse_coordinates;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

fn build_input(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 10 {
            0 => String::new(),
            7 => format!("bad line {}", i),
            3 => format!("{:.4}; {:.4}; Site {}", 112.0 + i as f64 * 1e-4, -7.0, i),
            _ => format!("{:.4}, {:.4}", 112.0 + i as f64 * 1e-4, -7.0 - i as f64 * 1e-4),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_coordinates");

    for lines in [100, 10_000] {
        let input = build_input(lines);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(format!("{}_lines", lines), |b| {
            b.iter(|| parse_coordinates(black_box(&input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
