#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use pushing_machine_solver::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_practice_1(c: &mut Criterion) {
    // one box, two machines, the box has to be pushed around a corner
    bench_level(c, "levels/Practice/1", 100);
}

#[allow(unused)]
fn bench_push_machine(c: &mut Criterion) {
    // a machine has to be pushed out of the way first
    bench_level(c, "levels/custom/03-push-machine.txt", 100);
}

#[allow(unused)]
fn bench_no_solution(c: &mut Criterion) {
    // exhausts the whole state space
    bench_level(c, "levels/custom/no-solution-pinned.txt", 100);
}

fn bench_level(c: &mut Criterion, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();

    c.bench(
        "bfs",
        Benchmark::new(level_path, move |b| {
            b.iter(|| criterion::black_box(level.solve(criterion::black_box(false))))
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_practice_1,
    bench_push_machine,
    //bench_no_solution,
);
criterion_main!(benches);
