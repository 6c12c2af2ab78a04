use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use super::SonglistError;
use crate::song::{Attrs, Song};

#[derive(Debug, Default)]
struct Inner {
    name: String,
    songs: Vec<Song>,
    /// Fields of the most recent sort, in the order they were applied.
    sort_fields: Vec<String>,
}

/// A named, ordered sequence of songs shared between threads.
///
/// Every operation takes the internal lock for its own duration. Callers
/// that need several operations to observe a consistent list hold a
/// [`SonglistGuard`] from [`Songlist::lock`] instead.
#[derive(Debug, Default)]
pub struct Songlist {
    inner: Mutex<Inner>,
}

/// Exclusive access to a songlist for multi-step work.
pub struct SonglistGuard<'a> {
    inner: MutexGuard<'a, Inner>,
}

impl Songlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                name: name.into(),
                ..Inner::default()
            }),
        }
    }

    /// Build a songlist from daemon attribute sets, preserving their order.
    pub fn from_attrs(name: impl Into<String>, attrs: &[Attrs]) -> Self {
        let list = Self::new(name);
        list.add_from_attrs(attrs);
        list
    }

    /// Acquire the list lock until the returned guard is dropped.
    ///
    /// Do not call other `Songlist` methods on the same list while holding
    /// the guard; use the guard's own methods.
    pub fn lock(&self) -> SonglistGuard<'_> {
        // A panic while holding the lock cannot leave `Vec<Song>` in a torn
        // state, so a poisoned lock is still usable.
        SonglistGuard {
            inner: self.inner.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    pub fn name(&self) -> String {
        self.lock().name().to_string()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.lock().set_name(name);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn in_range(&self, index: usize) -> bool {
        self.lock().in_range(index)
    }

    /// A copy of the song at `index`, or `None` when out of range.
    pub fn song(&self, index: usize) -> Option<Song> {
        self.lock().song(index).cloned()
    }

    /// A snapshot of all songs in order.
    pub fn songs(&self) -> Vec<Song> {
        self.lock().songs().to_vec()
    }

    /// The tag most recently used to order this list.
    pub fn sort_key(&self) -> String {
        self.lock().sort_fields().last().cloned().unwrap_or_default()
    }

    /// Every field of the most recent sort, in the order they were applied.
    pub fn sort_fields(&self) -> Vec<String> {
        self.lock().sort_fields().to_vec()
    }

    pub fn add(&self, song: Song) {
        self.lock().add(song);
    }

    /// Append every song of `other`, in order.
    pub fn add_list(&self, other: &Self) {
        // Snapshot first: `other` may be `self`.
        let songs = other.songs();
        self.lock().extend(songs);
    }

    pub fn add_from_attrs(&self, attrs: &[Attrs]) {
        self.lock().add_from_attrs(attrs);
    }

    pub fn remove(&self, index: usize) -> Result<(), SonglistError> {
        self.lock().remove(index)
    }

    pub fn remove_indices(&self, indices: &[usize]) -> Result<(), SonglistError> {
        self.lock().remove_indices(indices)
    }

    pub fn replace(&self, index: usize, song: Song) -> Result<(), SonglistError> {
        self.lock().replace(index, song)
    }

    pub fn truncate(&self, len: usize) -> Result<(), SonglistError> {
        self.lock().truncate(len)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn locate(&self, song: &Song) -> Result<usize, SonglistError> {
        self.lock().locate(song)
    }

    pub fn sort<S: AsRef<str>>(&self, fields: &[S]) -> Result<(), SonglistError> {
        self.lock().sort(fields)
    }

    /// Replace the contents of `dest` with copies of this list's songs.
    ///
    /// The two locks are taken one after the other, so duplicating a list
    /// into itself is harmless.
    pub fn duplicate(&self, dest: &Self) {
        let songs = self.songs();
        let mut dest = dest.lock();
        dest.clear();
        dest.extend(songs);
    }
}

impl SonglistGuard<'_> {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.inner.name = name.into();
    }

    pub fn len(&self) -> usize {
        self.inner.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.songs.is_empty()
    }

    pub fn in_range(&self, index: usize) -> bool {
        index < self.len()
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.inner.songs.get(index)
    }

    pub fn song_mut(&mut self, index: usize) -> Option<&mut Song> {
        self.inner.songs.get_mut(index)
    }

    pub fn songs(&self) -> &[Song] {
        &self.inner.songs
    }

    pub fn sort_fields(&self) -> &[String] {
        &self.inner.sort_fields
    }

    pub fn add(&mut self, song: Song) {
        self.inner.songs.push(song);
    }

    pub fn extend(&mut self, songs: impl IntoIterator<Item = Song>) {
        self.inner.songs.extend(songs);
    }

    pub fn add_from_attrs(&mut self, attrs: &[Attrs]) {
        self.extend(attrs.iter().map(Song::from_attrs));
    }

    fn check_index(&self, index: usize) -> Result<(), SonglistError> {
        if self.in_range(index) {
            Ok(())
        } else {
            Err(SonglistError::OutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<(), SonglistError> {
        self.check_index(index)?;
        log::debug!(
            "removing song number {index} from songlist '{}'",
            self.inner.name
        );
        self.inner.songs.remove(index);
        Ok(())
    }

    /// Remove several songs by index.
    ///
    /// Indices are applied highest first so earlier removals never shift
    /// later ones. Duplicates are ignored. The first failing index aborts
    /// the operation; songs removed before it stay removed.
    pub fn remove_indices(&mut self, indices: &[usize]) -> Result<(), SonglistError> {
        let mut ordered = indices.to_vec();
        ordered.sort_unstable_by(|a, b| b.cmp(a));
        ordered.dedup();
        for index in ordered {
            self.remove(index)?;
        }
        Ok(())
    }

    pub fn replace(&mut self, index: usize, song: Song) -> Result<(), SonglistError> {
        self.check_index(index)?;
        self.inner.songs[index] = song;
        Ok(())
    }

    /// Keep only the first `len` songs.
    pub fn truncate(&mut self, len: usize) -> Result<(), SonglistError> {
        if len > self.len() {
            return Err(SonglistError::InvalidLength {
                requested: len,
                len: self.len(),
            });
        }
        log::debug!("truncating songlist '{}' to {len} songs", self.inner.name);
        self.inner.songs.truncate(len);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.inner.songs.clear();
    }

    /// Index of the first song matching `song`.
    pub fn locate(&self, song: &Song) -> Result<usize, SonglistError> {
        self.inner
            .songs
            .iter()
            .position(|candidate| song.matches(candidate))
            .ok_or_else(|| SonglistError::NotFound {
                name: self.inner.name.clone(),
            })
    }

    /// Order the list by `fields`.
    ///
    /// The first field establishes the order with an unstable sort. Every
    /// following field is applied with a stable sort, so songs that compare
    /// equal on it keep the order left by the earlier passes. The last
    /// field is therefore the most significant one.
    pub fn sort<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<(), SonglistError> {
        let (first, rest) = fields.split_first().ok_or(SonglistError::NoSortFields)?;
        self.sort_pass(first.as_ref(), false);
        for field in rest {
            self.sort_pass(field.as_ref(), true);
        }
        self.inner.sort_fields = fields.iter().map(|f| f.as_ref().to_string()).collect();
        Ok(())
    }

    fn sort_pass(&mut self, field: &str, stable: bool) {
        let timer = Instant::now();
        let inner = &mut *self.inner;
        let by_field = |a: &Song, b: &Song| a.sort_key(field).cmp(b.sort_key(field));
        if stable {
            inner.songs.sort_by(by_field);
        } else {
            inner.songs.sort_unstable_by(by_field);
        }
        log::debug!(
            "{}sorted '{}' by '{field}' in {:?}",
            if stable { "stable " } else { "" },
            inner.name,
            timer.elapsed()
        );
    }
}
