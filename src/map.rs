//! Key-ordered associative container with snapshot key iteration.

/// Dictionary keyed by `K`, kept sorted ascending by [`Ord`] at all times.
///
/// Lookups locate entries by binary search and insertion of an existing key
/// replaces the value in place, so keys stay unique. [`OrderedMap::keys`]
/// hands out an owned snapshot of the key sequence, so a traversal never
/// observes mutations made after it started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Visits entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Visits entries in ascending key order with mutable access to values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> + '_ {
        self.entries.iter_mut().map(|(key, value)| (&*key, value))
    }

    /// Returns an owning iterator over a snapshot of the keys, ascending.
    ///
    /// The snapshot is taken when this is called; later insertions and
    /// removals do not show up in the traversal.
    pub fn keys(&self) -> Keys<K>
    where
        K: Clone,
    {
        let snapshot: Vec<K> = self.entries.iter().map(|(key, _)| key.clone()).collect();
        Keys {
            inner: snapshot.into_iter(),
        }
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Inserts `value` under `key`, returning the replaced value if the key
    /// was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Ok(at) => Some(std::mem::replace(&mut self.entries[at].1, value)),
            Err(at) => {
                self.entries.insert(at, (key, value));
                None
            }
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).ok().map(|at| &self.entries[at].1)
    }

    /// Returns the value stored under `key` for in-place mutation.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.position(key) {
            Ok(at) => Some(&mut self.entries[at].1),
            Err(_) => None,
        }
    }

    /// Removes and returns the value stored under `key`; a missing key is a
    /// no-op reporting `None`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let at = self.position(key).ok()?;
        Some(self.entries.remove(at).1)
    }

    /// Returns true when `key` has an entry.
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_ok()
    }

    fn position(&self, key: &K) -> Result<usize, usize> {
        self.entries.binary_search_by(|(probe, _)| probe.cmp(key))
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owning key iterator over a snapshot taken by [`OrderedMap::keys`].
#[derive(Debug, Clone)]
pub struct Keys<K> {
    inner: std::vec::IntoIter<K>,
}

impl<K> Iterator for Keys<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Keys<K> {}
