use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    game::{MatchRecord, MatchStore},
    ledger::MatchIndex,
    map::OrderedMap,
    tournament::{PlayerRemoval, Tournament},
    types::{ChessError, ChessResult, MatchId, PlayerId, Seconds, TournamentId, Winner},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentStats {
    pub id: TournamentId,
    pub location: String,
    pub winner: Option<PlayerId>,
    pub ended: bool,
    pub longest_game_secs: Seconds,
    pub average_game_secs: f64,
    pub match_count: usize,
    pub player_count: usize,
}

#[derive(Debug)]
pub struct ChessSystem {
    tournaments: OrderedMap<TournamentId, Tournament>,
    players: OrderedMap<PlayerId, MatchIndex>,
    matches: MatchStore,
}

impl ChessSystem {
    pub fn new() -> Self {
        Self {
            tournaments: OrderedMap::new(),
            players: OrderedMap::new(),
            matches: MatchStore::new(),
        }
    }

    pub fn add_tournament(
        &mut self,
        id: TournamentId,
        max_games_per_player: u32,
        location: &str,
    ) -> ChessResult<()> {
        if id == 0 {
            return Err(ChessError::InvalidId);
        }
        if !valid_location(location) {
            return Err(ChessError::InvalidLocation);
        }
        if max_games_per_player == 0 {
            return Err(ChessError::InvalidMaxGames);
        }
        if self.tournaments.contains_key(&id) {
            return Err(ChessError::TournamentAlreadyExists);
        }
        self.tournaments
            .insert(id, Tournament::new(id, max_games_per_player, location));
        debug!("tournament {id} registered at {location}");
        Ok(())
    }

    pub fn add_game(
        &mut self,
        tournament: TournamentId,
        first: PlayerId,
        second: PlayerId,
        winner: Winner,
        duration_secs: Seconds,
    ) -> ChessResult<MatchId> {
        if tournament == 0 || first == 0 || second == 0 || first == second {
            return Err(ChessError::InvalidId);
        }
        let entry = self
            .tournaments
            .get(&tournament)
            .ok_or(ChessError::TournamentNotFound)?;

        // Both players are registered as seen even when admission rejects
        // the game; their indices stay empty until a game is admitted.
        if !self.players.contains_key(&first) {
            self.players.insert(first, MatchIndex::new());
        }
        if !self.players.contains_key(&second) {
            self.players.insert(second, MatchIndex::new());
        }

        entry.check_admission(&self.matches, first, second)?;

        let winner_id = match winner {
            Winner::First => Some(first),
            Winner::Second => Some(second),
            Winner::Draw => None,
        };
        let id = self
            .matches
            .insert(tournament, first, second, winner_id, duration_secs);
        if let Some(entry) = self.tournaments.get_mut(&tournament) {
            entry.record_result(id, first, second, winner_id);
        }
        if let Some(index) = self.players.get_mut(&first) {
            index.prepend(id);
        }
        if let Some(index) = self.players.get_mut(&second) {
            index.prepend(id);
        }
        debug!("match {id} recorded in tournament {tournament}: {first} vs {second}");
        Ok(id)
    }

    pub fn remove_tournament(&mut self, id: TournamentId) -> ChessResult<()> {
        if self.tournaments.remove(&id).is_none() {
            return Err(ChessError::TournamentNotFound);
        }
        for dropped in self.matches.remove_tournament(id) {
            for (_, index) in self.players.iter_mut() {
                index.remove_id(dropped);
            }
        }
        debug!("tournament {id} removed");
        Ok(())
    }

    pub fn remove_player(&mut self, id: PlayerId) -> ChessResult<()> {
        if id == 0 {
            return Err(ChessError::InvalidId);
        }
        if !self.players.contains_key(&id) {
            return Err(ChessError::PlayerNotFound);
        }

        // An ended tournament keeps its frozen participation, in which case
        // the player also stays visible in the system index.
        let mut retained = false;
        for (_, tournament) in self.tournaments.iter_mut() {
            if let Ok(PlayerRemoval::Retained) = tournament.remove_player(&mut self.matches, id) {
                retained = true;
            }
        }
        if !retained {
            self.players.remove(&id);
        }
        debug!("player {id} removed, history retained: {retained}");
        Ok(())
    }

    pub fn end_tournament(&mut self, id: TournamentId) -> ChessResult<()> {
        let tournament = self
            .tournaments
            .get_mut(&id)
            .ok_or(ChessError::TournamentNotFound)?;
        tournament.end()
    }

    pub fn average_play_time(&self, player: PlayerId) -> ChessResult<f64> {
        let index = self
            .players
            .get(&player)
            .ok_or(ChessError::PlayerNotFound)?;
        let played = index.filter_by_participant(&self.matches, player);
        Ok(played.average_duration(&self.matches))
    }

    pub fn level(&self, player: PlayerId) -> ChessResult<f64> {
        let index = self
            .players
            .get(&player)
            .ok_or(ChessError::PlayerNotFound)?;
        Ok(level_of(&self.matches, player, index))
    }

    pub fn contains_tournament(&self, id: TournamentId) -> bool {
        self.tournaments.contains_key(&id)
    }

    pub fn contains_player(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.get(&id)
    }

    pub fn tournament_ids(&self) -> Vec<TournamentId> {
        self.tournaments.keys().collect()
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.keys().collect()
    }

    pub fn match_count(&self, player: PlayerId) -> ChessResult<usize> {
        let index = self
            .players
            .get(&player)
            .ok_or(ChessError::PlayerNotFound)?;
        Ok(index.len())
    }

    pub fn matches_by_player(
        &self,
        tournament: TournamentId,
        player: PlayerId,
    ) -> ChessResult<Vec<MatchRecord>> {
        let entry = self
            .tournaments
            .get(&tournament)
            .ok_or(ChessError::TournamentNotFound)?;
        let index = entry.matches_by_player(&self.matches, player)?;
        Ok(index
            .iter()
            .filter_map(|id| self.matches.get_cloned(id))
            .collect())
    }

    pub fn tournament_statistics(&self, id: TournamentId) -> ChessResult<TournamentStats> {
        let entry = self
            .tournaments
            .get(&id)
            .ok_or(ChessError::TournamentNotFound)?;
        Ok(self.stats_of(entry))
    }

    pub fn statistics(&self) -> Vec<TournamentStats> {
        self.tournaments
            .iter()
            .map(|(_, entry)| self.stats_of(entry))
            .collect()
    }

    pub fn any_tournament_ended(&self) -> bool {
        self.tournaments.iter().any(|(_, entry)| entry.is_ended())
    }

    pub fn player_levels(&self) -> Vec<(PlayerId, f64)> {
        self.players
            .iter()
            .filter(|(_, index)| !index.is_empty())
            .map(|(player, index)| (*player, level_of(&self.matches, *player, index)))
            .collect()
    }

    fn stats_of(&self, tournament: &Tournament) -> TournamentStats {
        TournamentStats {
            id: tournament.id(),
            location: tournament.location().to_string(),
            winner: tournament.winner(),
            ended: tournament.is_ended(),
            longest_game_secs: tournament.longest_game_secs(&self.matches),
            average_game_secs: tournament.average_game_secs(&self.matches),
            match_count: tournament.match_count(),
            player_count: tournament.player_count(&self.matches),
        }
    }
}

impl Default for ChessSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn level_of(store: &MatchStore, player: PlayerId, index: &MatchIndex) -> f64 {
    let played = index.len();
    if played == 0 {
        return 0.0;
    }

    // Forfeited matches count against the player, voided ones as draws.
    let mut wins = 0i64;
    let mut draws = 0i64;
    let mut losses = 0i64;
    for rec in index.records(store) {
        match rec.winner {
            Some(won) if won == player => wins += 1,
            None => draws += 1,
            Some(_) => losses += 1,
        }
    }
    (6 * wins - 10 * losses + 2 * draws) as f64 / played as f64
}

fn valid_location(location: &str) -> bool {
    let mut chars = location.chars();
    match chars.next() {
        Some(head) => {
            head.is_ascii_uppercase() && chars.all(|c| c.is_ascii_lowercase() || c == ' ')
        }
        None => false,
    }
}
