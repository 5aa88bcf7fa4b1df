// benches/collections_bench.rs
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seccollections::prelude::*;
use std::hint::black_box;

fn bench_queue_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_steady_state");

    for capacity in [32, 256, 4096].iter() {
        group.bench_with_input(
            BenchmarkId::new("enqueue_dequeue", capacity),
            capacity,
            |b, &capacity| {
                let mut queue = StringQueue::with_capacity(capacity);
                for i in 0..capacity / 2 {
                    queue.enqueue(i.to_string()).unwrap();
                }

                b.iter(|| {
                    queue.enqueue(black_box("payload")).unwrap();
                    let _ = queue.dequeue().unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_queue_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_growth");

    // Presized vs doubling from the default capacity
    for count in [1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("grow_from_default", count), count, |b, &count| {
            b.iter(|| {
                let mut queue = StringQueue::new();
                for _ in 0..count {
                    queue.enqueue(black_box("x")).unwrap();
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("presized", count), count, |b, &count| {
            b.iter(|| {
                let mut queue = StringQueue::with_capacity(count);
                for _ in 0..count {
                    queue.enqueue(black_box("x")).unwrap();
                }
            });
        });
    }

    group.finish();
}

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_heap");

    for count in [100, 1_000, 10_000].iter() {
        let values: Vec<i64> = (0..*count as i64).map(|i| (i * 7919) % 10_007).collect();

        group.bench_with_input(BenchmarkId::new("insert", count), &values, |b, values| {
            b.iter(|| {
                let mut heap = MaxHeap::new();
                for &v in values {
                    heap.insert(black_box(v));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("insert_drain", count), &values, |b, values| {
            b.iter(|| {
                let mut heap = MaxHeap::new();
                for &v in values {
                    heap.insert(v);
                }
                while let Ok(v) = heap.delete() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_queue_steady_state, bench_queue_growth, bench_heap);

criterion_main!(benches);
