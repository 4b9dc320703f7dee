use hashbrown::HashSet;

use crate::{
    game::{MatchRecord, MatchStore},
    types::{MatchId, PlayerId, Seconds},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIndex {
    ids: Vec<MatchId>,
}

impl MatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&mut self, id: MatchId) {
        self.ids.insert(0, id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: MatchId) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.ids.iter().copied()
    }

    pub fn records<'a>(
        &'a self,
        store: &'a MatchStore,
    ) -> impl Iterator<Item = &'a MatchRecord> + 'a {
        self.ids.iter().filter_map(move |id| store.get(*id))
    }

    pub fn remove_id(&mut self, id: MatchId) -> bool {
        if let Some(at) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(at);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, store: &MatchStore, target: &MatchRecord) -> bool {
        let found = self
            .ids
            .iter()
            .position(|id| store.get(*id).is_some_and(|rec| rec.same_pairing(target)));
        match found {
            Some(at) => {
                self.ids.remove(at);
                true
            }
            None => false,
        }
    }

    pub fn concat(&mut self, other: &MatchIndex) {
        self.ids.extend_from_slice(&other.ids);
    }

    pub fn contains_pairing(&self, store: &MatchStore, a: PlayerId, b: PlayerId) -> bool {
        self.records(store).any(|rec| rec.pits(a, b))
    }

    pub fn filter_by_participant(&self, store: &MatchStore, player: PlayerId) -> MatchIndex {
        Self {
            ids: self
                .ids
                .iter()
                .copied()
                .filter(|id| store.get(*id).is_some_and(|rec| rec.has_participant(player)))
                .collect(),
        }
    }

    pub fn total_duration(&self, store: &MatchStore) -> u64 {
        self.records(store)
            .map(|rec| u64::from(rec.duration_secs))
            .sum()
    }

    pub fn longest_duration(&self, store: &MatchStore) -> Seconds {
        self.records(store)
            .map(|rec| rec.duration_secs)
            .max()
            .unwrap_or(0)
    }

    pub fn average_duration(&self, store: &MatchStore) -> f64 {
        if self.ids.is_empty() {
            return 0.0;
        }
        self.total_duration(store) as f64 / self.ids.len() as f64
    }

    pub fn distinct_players(&self, store: &MatchStore) -> usize {
        let mut seen: HashSet<PlayerId> = HashSet::new();
        for rec in self.records(store) {
            if let Some(player) = rec.first {
                seen.insert(player);
            }
            if let Some(player) = rec.second {
                seen.insert(player);
            }
        }
        seen.len()
    }
}
