use criterion::{criterion_group, criterion_main, Criterion};
use textdiff::{sequence_ratio, split_lines, unified_diff, DiffInput};

fn synthetic_document(lines: usize, stride: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        if i % stride == 0 {
            text.push_str(&format!("changed line {}\n", i));
        } else {
            text.push_str(&format!("common line {}\n", i % 16));
        }
    }
    text
}

fn unified(c: &mut Criterion) {
    let old = synthetic_document(2_000, 13);
    let new = synthetic_document(2_000, 17);
    let a = split_lines(&old);
    let b = split_lines(&new);

    c.bench_function("unified-diff", |bencher| {
        bencher.iter(|| {
            unified_diff(DiffInput {
                a: &a,
                b: &b,
                from_file: "old",
                to_file: "new",
                ..Default::default()
            })
        });
    });
}

fn ratio(c: &mut Criterion) {
    let old = synthetic_document(2_000, 13);
    let new = synthetic_document(2_000, 17);
    let a = split_lines(&old);
    let b = split_lines(&new);

    c.bench_function("sequence-ratio", |bencher| {
        bencher.iter(|| sequence_ratio(&a, &b));
    });
}

criterion_group!(diff, unified, ratio);
criterion_main!(diff);
