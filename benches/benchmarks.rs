criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_arbitrary_game,
        evaluating_row_dominance,
        eliminating_random_strict,
        eliminating_random_weak,
        eliminating_random_very_weak,
        eliminating_dominance_chain,
}

use ieds::engine::*;
use ieds::game::*;
use ieds::*;

fn random(side: usize) -> Game {
    Game::new(Matrix::sample(side, side), Matrix::sample(side, side)).expect("square game")
}

/// every row beats the one above it, every column beats the one left of it
fn chain(side: usize) -> Game {
    let p1 = (0..side)
        .map(|i| (0..side).map(|_| i as Payoff).collect())
        .collect::<Vec<Vec<Payoff>>>();
    Game::symmetric(Matrix::try_from(p1).expect("rectangular")).expect("square game")
}

fn sampling_arbitrary_game(c: &mut criterion::Criterion) {
    c.bench_function("sample an arbitrary Game", |b| b.iter(|| Game::random()));
}

fn evaluating_row_dominance(c: &mut criterion::Criterion) {
    let game = random(64);
    c.bench_function("evaluate row dominance on a 64x64 Game", |b| {
        b.iter(|| game.is_row_dominated(0, 1, Strictness::Weak))
    });
}

fn eliminating_random_strict(c: &mut criterion::Criterion) {
    let game = random(32);
    c.bench_function("eliminate strictly dominated from a 32x32 Game", |b| {
        b.iter(|| Eliminator::new(game.clone(), Strictness::Strict).run())
    });
}

fn eliminating_random_weak(c: &mut criterion::Criterion) {
    let game = random(32);
    c.bench_function("eliminate weakly dominated from a 32x32 Game", |b| {
        b.iter(|| Eliminator::new(game.clone(), Strictness::Weak).run())
    });
}

fn eliminating_random_very_weak(c: &mut criterion::Criterion) {
    let game = random(32);
    c.bench_function("eliminate very weakly dominated from a 32x32 Game", |b| {
        b.iter(|| Eliminator::new(game.clone(), Strictness::VeryWeak).run())
    });
}

fn eliminating_dominance_chain(c: &mut criterion::Criterion) {
    let game = chain(64);
    c.bench_function("eliminate a 64-step dominance chain", |b| {
        b.iter(|| Eliminator::new(game.clone(), Strictness::Strict).run())
    });
}
