//! Compact set of place indices used as part of search state keys.

/// Fixed-capacity bit set over place indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    /// An empty set able to hold indices `0..capacity`.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            len: 0,
        }
    }

    const fn locate(index: usize) -> (usize, u64) {
        (index >> 6, 1_u64 << (index & 63))
    }

    /// Whether `index` is in the set.
    pub(crate) fn contains(&self, index: usize) -> bool {
        let (word, mask) = Self::locate(index);
        self.words.get(word).is_some_and(|bits| bits & mask != 0)
    }

    /// Add `index`, returning `true` if it was not already present.
    /// Indices beyond the capacity are ignored.
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        let (word, mask) = Self::locate(index);
        match self.words.get_mut(word) {
            Some(bits) if *bits & mask == 0 => {
                *bits |= mask;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Remove `index`, returning `true` if it was present.
    pub(crate) fn remove(&mut self, index: usize) -> bool {
        let (word, mask) = Self::locate(index);
        match self.words.get_mut(word) {
            Some(bits) if *bits & mask != 0 => {
                *bits &= !mask;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of members.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }
}
