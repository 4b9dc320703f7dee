use std::collections::BTreeSet;

use proptest::prelude::*;

use chesslog::{
    system::ChessSystem,
    types::{PlayerId, Winner},
};

const PLAYER_POOL: PlayerId = 12;

#[derive(Debug, Clone)]
enum Action {
    AddTournament { id: u8, max_games: u8 },
    AddGame { tournament: u8, first: u8, second: u8, winner: u8, duration: u16 },
    RemovePlayer { player: u8 },
    EndTournament { tournament: u8 },
    RemoveTournament { tournament: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (1u8..4, 1u8..4).prop_map(|(id, max_games)| Action::AddTournament { id, max_games }),
        (1u8..4, 1u8..12, 1u8..12, 0u8..3, 1u16..5000).prop_map(
            |(tournament, first, second, winner, duration)| Action::AddGame {
                tournament,
                first,
                second,
                winner,
                duration,
            }
        ),
        (1u8..12).prop_map(|player| Action::RemovePlayer { player }),
        (1u8..4).prop_map(|tournament| Action::EndTournament { tournament }),
        (1u8..4).prop_map(|tournament| Action::RemoveTournament { tournament }),
    ]
}

proptest! {
    #[test]
    fn random_command_sequences_keep_the_registry_consistent(
        actions in prop::collection::vec(action_strategy(), 1..150)
    ) {
        let mut chess = ChessSystem::new();

        for action in actions {
            match action {
                Action::AddTournament { id, max_games } => {
                    let _ = chess.add_tournament(u32::from(id), u32::from(max_games), "Haifa");
                }
                Action::AddGame { tournament, first, second, winner, duration } => {
                    let outcome = match winner {
                        0 => Winner::First,
                        1 => Winner::Second,
                        _ => Winner::Draw,
                    };
                    let _ = chess.add_game(
                        u32::from(tournament),
                        u32::from(first),
                        u32::from(second),
                        outcome,
                        u32::from(duration),
                    );
                }
                Action::RemovePlayer { player } => {
                    let _ = chess.remove_player(u32::from(player));
                }
                Action::EndTournament { tournament } => {
                    let _ = chess.end_tournament(u32::from(tournament));
                }
                Action::RemoveTournament { tournament } => {
                    let _ = chess.remove_tournament(u32::from(tournament));
                }
            }

            let players = chess.player_ids();
            prop_assert!(players.windows(2).all(|pair| pair[0] < pair[1]));
            let tournaments = chess.tournament_ids();
            prop_assert!(tournaments.windows(2).all(|pair| pair[0] < pair[1]));

            for &player in &players {
                prop_assert!(chess.contains_player(player));
                let _ = chess.match_count(player).expect("listed player");
                let level = chess.level(player).expect("listed player");
                prop_assert!((-10.0..=6.0).contains(&level));
                let average = chess.average_play_time(player).expect("listed player");
                prop_assert!(average >= 0.0);
            }

            for &tid in &tournaments {
                let entry = chess.tournament(tid).expect("listed tournament");

                // a tournament participant is always visible system-wide
                for player in 1..=PLAYER_POOL {
                    if entry.is_participant(player) {
                        prop_assert!(chess.contains_player(player));
                    }
                }

                // every match with a surviving participant carries exactly
                // two points in the score table
                let mut occupied = BTreeSet::new();
                let mut score_sum = 0u32;
                for player in 1..=PLAYER_POOL {
                    if let Some(points) = entry.score(player) {
                        score_sum += points;
                        for rec in chess.matches_by_player(tid, player).expect("participant") {
                            occupied.insert(rec.id);
                        }
                    }
                }
                prop_assert_eq!(u64::from(score_sum), 2 * occupied.len() as u64);

                if let Some(winner) = entry.winner() {
                    prop_assert!(entry.is_ended());
                    prop_assert!(entry.score(winner).is_some());
                }
            }
        }
    }
}
