use criterion::{Criterion, criterion_group, criterion_main};
use sapper_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(30, 16, 99).unwrap();
    let mut generator = RandomLayoutGenerator::from_seed(0);

    c.bench_function("generate expert layout", |b| {
        b.iter(|| {
            let mines = generator
                .generate(config.total_cells(), config.mines)
                .unwrap();
            black_box(Board::from_mine_indices(config, &mines).unwrap())
        })
    });
}

fn bench_flood(c: &mut Criterion) {
    let config = GameConfig::new(255, 255, 1).unwrap();
    let board = Board::from_mine_coords(config, &[(254, 254)]).unwrap();

    c.bench_function("flood fill 255x255", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(reveal(&mut board, (0, 0)).unwrap()),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_flood);
criterion_main!(benches);
