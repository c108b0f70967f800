use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dragonglyph::core::{find_matches, resolve_cascades, Grid, ScriptedSource, SimpleRng};
use dragonglyph::engine::find_best_move;
use dragonglyph::types::Difficulty;
use dragonglyph::types::GlyphKind::*;

fn striped_grid(size: usize) -> Grid {
    // Deadlocked diagonal stripes: worst case for the hint scan.
    let kinds = [Fire, Frost, Storm];
    Grid::from_rows(
        (0..size)
            .map(|row| (0..size).map(|col| kinds[(row + col) % 3]).collect())
            .collect(),
    )
}

fn bench_generate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_8x8", |b| {
        b.iter(|| Grid::generate(black_box(8), &mut rng))
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let grid = striped_grid(8);

    c.bench_function("find_matches_8x8", |b| {
        b.iter(|| find_matches(black_box(&grid)))
    });
}

fn bench_hint_search(c: &mut Criterion) {
    let grid = striped_grid(8);

    c.bench_function("hint_search_8x8_no_move", |b| {
        b.iter(|| find_best_move(black_box(&grid)))
    });
}

fn bench_swap_resolution(c: &mut Criterion) {
    c.bench_function("resolve_two_step_cascade", |b| {
        b.iter(|| {
            let mut grid = Grid::from_rows(vec![
                vec![Storm, Shadow, Light, Storm],
                vec![Shadow, Storm, Frost, Shadow],
                vec![Frost, Frost, Fire, Light],
                vec![Fire, Fire, Earth, Storm],
            ]);
            grid.swap(
                dragonglyph::types::GridPos::new(2, 2),
                dragonglyph::types::GridPos::new(3, 2),
            );
            let mut combo = 1;
            let mut source =
                ScriptedSource::new([Shadow, Shadow, Shadow, Light, Earth, Fire]);
            resolve_cascades(
                &mut grid,
                Difficulty::Hatchling,
                &mut combo,
                None,
                &mut source,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_find_matches,
    bench_hint_search,
    bench_swap_resolution
);
criterion_main!(benches);
