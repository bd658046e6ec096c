//! Criterion micro-benchmarks for stack push/pop, heap alloc/free, and deref.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use memarena_arena::{Memory, RawPointer};
use memarena_bench::{interleaved_free_order, mixed_workload, reference_config, stress_config};

fn bench_stack_push_pop(c: &mut Criterion) {
    let mut memory = Memory::new(reference_config()).unwrap();
    let data = [-2i16, 145, 42, 0, -15];
    let wide = [100.23f64, -4532.0, 1234.0];

    c.bench_function("stack_push_pop_nested", |b| {
        b.iter(|| {
            let p1 = memory.push(black_box(&data[..])).unwrap();
            let p2 = memory.push(black_box(&wide[..])).unwrap();
            memory.pop(&p2);
            memory.pop(&p1);
        });
    });
}

fn bench_heap_alloc_free(c: &mut Criterion) {
    let mut memory = Memory::new(stress_config()).unwrap();
    let workload = mixed_workload(256);
    let order = interleaved_free_order(workload.len());
    let mut live: Vec<RawPointer> = Vec::with_capacity(workload.len());

    c.bench_function("heap_alloc_free_256_mixed", |b| {
        b.iter(|| {
            live.clear();
            for &(kind, count) in &workload {
                live.push(memory.alloc_raw(count, kind).unwrap());
            }
            for &i in &order {
                memory.free_raw(&live[i]);
            }
            black_box(memory.free_blocks().len());
        });
    });
}

fn bench_deref_change(c: &mut Criterion) {
    let mut memory = Memory::new(stress_config()).unwrap();
    let ptr = memory.alloc::<f32>(1024).unwrap();
    let data = vec![1.5f32; 512];

    c.bench_function("heap_change_1024_f32", |b| {
        b.iter(|| {
            ptr.change(&mut memory, black_box(&data)).unwrap();
        });
    });

    c.bench_function("heap_deref_sum_1024_f32", |b| {
        b.iter(|| {
            let sum: f32 = ptr.deref(&memory).iter().sum();
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_stack_push_pop,
    bench_heap_alloc_free,
    bench_deref_change
);
criterion_main!(benches);
