// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_bulletin::bulletin::{Bulletin, Priority, PriorityQueue};
use std::hint::black_box;

const PATTERN: [Priority; 7] = [
    Priority::Low,
    Priority::High,
    Priority::Low,
    Priority::Low,
    Priority::High,
    Priority::Required,
    Priority::Low,
];

fn queue_admission_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_admission");

    for size in [8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("mixed_priorities", size), &size, |b, &size| {
            b.iter(|| {
                let mut queue = PriorityQueue::new();
                let mut evicted = 0usize;
                for priority in PATTERN.iter().cycle().take(size) {
                    let bulletin = Bulletin::new(()).with_priority(*priority);
                    if queue.admit(black_box(bulletin)).is_some() {
                        evicted += 1;
                    }
                }
                black_box((queue.len(), evicted))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, queue_admission_benchmark);
criterion_main!(benches);
