use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use chesslog::{map::OrderedMap, system::ChessSystem, types::Winner};

fn populated(tournaments: u32, games_each: u32) -> ChessSystem {
    let mut chess = ChessSystem::new();
    for t in 1..=tournaments {
        chess
            .add_tournament(t, games_each + 1, "Haifa")
            .expect("tournament");
        for i in 0..games_each {
            let _ = chess
                .add_game(t, 2 * i + 1, 2 * i + 2, Winner::First, 30 + i)
                .expect("game");
        }
    }
    chess
}

fn bench_map_inserts(c: &mut Criterion) {
    c.bench_function("map_insert_10k", |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for i in 0..10_000u32 {
                let key = i.wrapping_mul(2_654_435_761) % 16_384;
                map.insert(key, i);
            }
        });
    });
}

fn bench_add_games(c: &mut Criterion) {
    c.bench_function("add_game_5k", |b| {
        b.iter(|| {
            let _ = populated(50, 100);
        });
    });
}

fn bench_statistics_query(c: &mut Criterion) {
    let mut chess = populated(20, 40);
    for t in 1..=20u32 {
        chess.end_tournament(t).expect("end");
    }

    let mut group = c.benchmark_group("statistics_query");
    for n in [1u32, 10, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                for id in 1..=n {
                    let _ = chess.tournament_statistics(id).expect("stats");
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_map_inserts, bench_add_games, bench_statistics_query);
criterion_main!(benches);
