//! In-memory chess tournament registry: match admission, score tables,
//! forfeit cascades, and flat-file statistics reports.
//!
//! # Examples
//!
//! Recording games and ending a tournament:
//! ```
//! use chesslog::{system::ChessSystem, types::Winner};
//!
//! let mut chess = ChessSystem::new();
//! chess.add_tournament(1, 3, "London").expect("tournament");
//! chess.add_game(1, 11, 12, Winner::First, 1800).expect("game");
//! chess.add_game(1, 12, 13, Winner::Draw, 600).expect("game");
//! chess.end_tournament(1).expect("end");
//!
//! let stats = chess.tournament_statistics(1).expect("stats");
//! assert_eq!(stats.winner, Some(11));
//! assert_eq!(stats.match_count, 2);
//! ```
//!
//! Rendering the statistics report into any [`std::io::Write`] sink:
//! ```
//! use chesslog::{report, system::ChessSystem, types::Winner};
//!
//! let mut chess = ChessSystem::new();
//! chess.add_tournament(4, 2, "Paris").expect("tournament");
//! chess.add_game(4, 7, 8, Winner::Draw, 600).expect("game");
//! chess.end_tournament(4).expect("end");
//!
//! let mut out = Vec::new();
//! report::write_tournament_statistics(&chess, &mut out).expect("report");
//! assert_eq!(String::from_utf8(out).expect("utf8"), "7\n600\n600.00\nParis\n1\n2\n\n");
//! ```

/// Match domain records and the owning match store.
pub mod game;
/// Non-owning sequences of match handles.
pub mod ledger;
/// Key-ordered associative container.
pub mod map;
/// Player-level and tournament-statistics report writers.
pub mod report;
/// Top-level registry and cross-tournament queries.
pub mod system;
/// Per-tournament admission, scoring, and lifecycle.
pub mod tournament;
/// Shared primitive types, outcome enum, and errors.
pub mod types;
