use tracing::{debug, info};

use crate::{
    game::MatchStore,
    ledger::MatchIndex,
    map::OrderedMap,
    types::{ChessError, ChessResult, MatchId, PlayerId, Score, Seconds, TournamentId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRemoval {
    Removed,
    Retained,
}

#[derive(Debug, Clone)]
pub struct Tournament {
    id: TournamentId,
    location: String,
    max_games_per_player: u32,
    ledger: MatchIndex,
    scores: OrderedMap<PlayerId, Score>,
    ended: bool,
    winner: Option<PlayerId>,
}

impl Tournament {
    pub fn new(id: TournamentId, max_games_per_player: u32, location: &str) -> Self {
        Self {
            id,
            location: location.to_string(),
            max_games_per_player,
            ledger: MatchIndex::new(),
            scores: OrderedMap::new(),
            ended: false,
            winner: None,
        }
    }

    pub fn id(&self) -> TournamentId {
        self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn max_games_per_player(&self) -> u32 {
        self.max_games_per_player
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn match_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_participant(&self, player: PlayerId) -> bool {
        self.scores.contains_key(&player)
    }

    pub fn score(&self, player: PlayerId) -> Option<Score> {
        self.scores.get(&player).copied()
    }

    pub fn player_count(&self, store: &MatchStore) -> usize {
        self.ledger.distinct_players(store)
    }

    pub fn longest_game_secs(&self, store: &MatchStore) -> Seconds {
        self.ledger.longest_duration(store)
    }

    pub fn average_game_secs(&self, store: &MatchStore) -> f64 {
        self.ledger.average_duration(store)
    }

    pub fn check_admission(
        &self,
        store: &MatchStore,
        first: PlayerId,
        second: PlayerId,
    ) -> ChessResult<()> {
        if self.ended {
            return Err(ChessError::TournamentEnded);
        }
        if self.ledger.contains_pairing(store, first, second) {
            return Err(ChessError::GameAlreadyExists);
        }
        // A participant may only enter while strictly below the limit.
        let limit = self.max_games_per_player as usize;
        if self.games_played(store, first) >= limit || self.games_played(store, second) >= limit {
            return Err(ChessError::GamesExceeded);
        }
        Ok(())
    }

    pub fn record_result(
        &mut self,
        id: MatchId,
        first: PlayerId,
        second: PlayerId,
        winner: Option<PlayerId>,
    ) {
        self.ledger.prepend(id);
        match winner {
            Some(won) => {
                let lost = if won == first { second } else { first };
                self.bump_score(won, 2);
                self.bump_score(lost, 0);
            }
            None => {
                self.bump_score(first, 1);
                self.bump_score(second, 1);
            }
        }
    }

    pub fn end(&mut self) -> ChessResult<()> {
        if self.ended {
            return Err(ChessError::TournamentEnded);
        }
        if self.ledger.is_empty() {
            return Err(ChessError::NoGamesPlayed);
        }

        // Ascending scan, replace only on a strictly greater score: score
        // ties resolve to the lower player id.
        let mut best: Option<(PlayerId, Score)> = None;
        for (player, score) in self.scores.iter() {
            match best {
                Some((_, top)) if *score <= top => {}
                _ => best = Some((*player, *score)),
            }
        }
        self.winner = best.map(|(player, _)| player);
        self.ended = true;
        info!("tournament {} ended, winner {:?}", self.id, self.winner);
        Ok(())
    }

    pub fn remove_player(
        &mut self,
        store: &mut MatchStore,
        player: PlayerId,
    ) -> ChessResult<PlayerRemoval> {
        if !self.scores.contains_key(&player) {
            return Err(ChessError::PlayerNotFound);
        }
        if self.ended {
            return Ok(PlayerRemoval::Retained);
        }

        let ids: Vec<MatchId> = self.ledger.iter().collect();
        for id in ids {
            let Some(rec) = store.get_mut(id) else {
                continue;
            };
            if !rec.has_participant(player) {
                continue;
            }
            let previous = rec.forfeit(player);
            let verdict = rec.winner;
            if let Some(opponent) = verdict {
                let delta = if previous == Some(opponent) {
                    0
                } else if previous.is_none() {
                    1
                } else {
                    2
                };
                if delta > 0 {
                    self.bump_score(opponent, delta);
                }
            }
        }
        self.scores.remove(&player);
        debug!("player {player} forfeited out of tournament {}", self.id);
        Ok(PlayerRemoval::Removed)
    }

    pub fn matches_by_player(&self, store: &MatchStore, player: PlayerId) -> ChessResult<MatchIndex> {
        if !self.scores.contains_key(&player) {
            return Err(ChessError::PlayerNotFound);
        }
        Ok(self.ledger.filter_by_participant(store, player))
    }

    fn games_played(&self, store: &MatchStore, player: PlayerId) -> usize {
        self.ledger.filter_by_participant(store, player).len()
    }

    fn bump_score(&mut self, player: PlayerId, delta: Score) {
        let next = self.scores.get(&player).copied().unwrap_or(0) + delta;
        self.scores.insert(player, next);
    }
}
