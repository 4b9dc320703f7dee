//! Match domain record and the owning match store.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    ledger::MatchIndex,
    types::{MatchId, PlayerId, Seconds, TournamentId},
};

/// Fully materialized record of one played game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Stable match identifier.
    pub id: MatchId,
    /// Tournament in which the game was played.
    pub tournament: TournamentId,
    /// First participant, vacated once the player is removed.
    pub first: Option<PlayerId>,
    /// Second participant, vacated once the player is removed.
    pub second: Option<PlayerId>,
    /// Winning participant, `None` for a draw or a voided match.
    pub winner: Option<PlayerId>,
    /// Play time in seconds.
    pub duration_secs: Seconds,
}

impl MatchRecord {
    /// Returns true when `player` still occupies a participant slot.
    pub fn has_participant(&self, player: PlayerId) -> bool {
        self.first == Some(player) || self.second == Some(player)
    }

    /// Returns true when this match pits `a` against `b`, in either order.
    ///
    /// Vacated slots never match, so a forfeited pairing does not block a
    /// rematch.
    pub fn pits(&self, a: PlayerId, b: PlayerId) -> bool {
        match (self.first, self.second) {
            (Some(x), Some(y)) => (x == a && y == b) || (x == b && y == a),
            _ => false,
        }
    }

    /// Returns true when both records describe the same pairing in the same
    /// tournament; a record with a vacated slot compares unequal to everything.
    pub fn same_pairing(&self, other: &Self) -> bool {
        self.tournament == other.tournament
            && match (other.first, other.second) {
                (Some(a), Some(b)) => self.pits(a, b),
                _ => false,
            }
    }

    /// Vacates `player`'s slot and re-scores the match in the opponent's
    /// favor; with the opponent already gone the match becomes a void draw.
    ///
    /// Returns the winner recorded before the forfeit so the caller can
    /// derive the score delta.
    pub fn forfeit(&mut self, player: PlayerId) -> Option<PlayerId> {
        let previous = self.winner;
        if self.first == Some(player) {
            self.first = None;
            self.winner = self.second;
        } else if self.second == Some(player) {
            self.second = None;
            self.winner = self.first;
        }
        previous
    }
}

#[derive(Debug, Default)]
pub struct MatchStore {
    records: HashMap<MatchId, MatchRecord>,
    ledger: MatchIndex,
    next_match_id: MatchId,
}

impl MatchStore {
    pub fn new() -> Self {
        Self {
            next_match_id: 1,
            ..Self::default()
        }
    }

    pub fn insert(
        &mut self,
        tournament: TournamentId,
        first: PlayerId,
        second: PlayerId,
        winner: Option<PlayerId>,
        duration_secs: Seconds,
    ) -> MatchId {
        let id = self.next_match_id;
        self.next_match_id += 1;

        let rec = MatchRecord {
            id,
            tournament,
            first: Some(first),
            second: Some(second),
            winner,
            duration_secs,
        };
        self.records.insert(id, rec);
        self.ledger.prepend(id);
        id
    }

    pub fn get(&self, id: MatchId) -> Option<&MatchRecord> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: MatchId) -> Option<&mut MatchRecord> {
        self.records.get_mut(&id)
    }

    pub fn get_cloned(&self, id: MatchId) -> Option<MatchRecord> {
        self.get(id).cloned()
    }

    pub fn remove(&mut self, id: MatchId) -> Option<MatchRecord> {
        let rec = self.records.remove(&id)?;
        self.ledger.remove_id(id);
        Some(rec)
    }

    pub fn remove_tournament(&mut self, tournament: TournamentId) -> Vec<MatchId> {
        let dropped: Vec<MatchId> = self
            .ledger
            .iter()
            .filter(|id| {
                self.records
                    .get(id)
                    .is_some_and(|rec| rec.tournament == tournament)
            })
            .collect();
        for id in &dropped {
            self.remove(*id);
        }
        dropped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ledger(&self) -> &MatchIndex {
        &self.ledger
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchRecord> + '_ {
        self.ledger.iter().filter_map(move |id| self.records.get(&id))
    }
}
