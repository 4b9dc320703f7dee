//! Shared primitive IDs, the game outcome enum, and the command-surface error type.

use serde::{Deserialize, Serialize};

/// Player identifier, nonzero for every registered player.
pub type PlayerId = u32;
/// Tournament identifier, nonzero for every registered tournament.
pub type TournamentId = u32;
/// Monotonic match identifier handed out by the match store.
pub type MatchId = u64;
/// Play time in whole seconds.
pub type Seconds = u32;
/// Accumulated tournament points.
pub type Score = u32;

/// Reported outcome of a recorded game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The first named player won.
    First,
    /// The second named player won.
    Second,
    /// Neither player won.
    Draw,
}

/// Validation outcome distinguished by the command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// An id argument was zero, or a game named the same player twice.
    InvalidId,
    /// Locations start with an uppercase ASCII letter followed by lowercase
    /// letters and spaces only.
    InvalidLocation,
    /// The per-player games limit must be nonzero.
    InvalidMaxGames,
    /// A tournament with this id is already registered.
    TournamentAlreadyExists,
    /// No tournament with this id is registered.
    TournamentNotFound,
    /// The player has no entry in the queried scope.
    PlayerNotFound,
    /// The pairing was already played in this tournament.
    GameAlreadyExists,
    /// The tournament has ended and its history is frozen.
    TournamentEnded,
    /// A participant already reached the tournament's games limit.
    GamesExceeded,
    /// A tournament cannot end before any game was played.
    NoGamesPlayed,
}

/// Convenience alias for fallible command-surface calls.
pub type ChessResult<T> = Result<T, ChessError>;
