//! Benchmarks for deep copy and container paths of the dynamic value type.
//!
//! Run with: cargo bench -p mvx-value --bench value_bench

use std::collections::BTreeMap;

use criterion::{Criterion, criterion_group, criterion_main};
use mvx_value::Value;
use std::hint::black_box;

/// A map of sequences of maps, `width` entries per level.
fn deep_value(width: usize) -> Value {
    let mut root = BTreeMap::new();
    for i in 0..width {
        let mut items = Vec::with_capacity(width);
        for j in 0..width {
            let mut leaf = BTreeMap::new();
            leaf.insert("index".to_owned(), Value::Int((i * width + j) as i64));
            leaf.insert("label".to_owned(), Value::from("node"));
            items.push(Value::from(leaf));
        }
        root.insert(format!("row{i}"), Value::from(items));
    }
    Value::from(root)
}

fn bench_clone(c: &mut Criterion) {
    let value = deep_value(16);
    c.bench_function("value_clone_deep_16x16", |b| {
        b.iter(|| black_box(value.clone()));
    });
}

fn bench_at_extension(c: &mut Criterion) {
    c.bench_function("value_at_extend_1k", |b| {
        b.iter(|| {
            let mut seq = Value::from(Vec::new());
            seq.at(black_box(1023)).unwrap();
            black_box(seq)
        });
    });
}

fn bench_map_set_get(c: &mut Criterion) {
    let keys: Vec<String> = (0..256).map(|i| format!("key{i}")).collect();
    c.bench_function("value_map_set_get_256", |b| {
        b.iter(|| {
            let mut map = Value::from(BTreeMap::new());
            for key in &keys {
                map.set(key.clone(), 1i64).unwrap();
            }
            for key in &keys {
                black_box(map.get(key).unwrap());
            }
            black_box(map)
        });
    });
}

criterion_group!(benches, bench_clone, bench_at_extension, bench_map_set_get);
criterion_main!(benches);
