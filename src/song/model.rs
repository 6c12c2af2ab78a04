use std::collections::BTreeMap;
use std::fmt;

use super::sort_tags::sort_value;

/// Raw attribute set as returned by a daemon song listing.
pub type Attrs = BTreeMap<String, String>;

/// Identifier assigned by the daemon to a queued song.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SongId {
    /// The song sits in the daemon queue under this id.
    Known(u32),
    /// The song exists only in the client's view, e.g. a library entry.
    #[default]
    Unassigned,
}

impl SongId {
    pub fn known(self) -> Option<u32> {
        match self {
            Self::Known(id) => Some(id),
            Self::Unassigned => None,
        }
    }

    pub fn is_unassigned(self) -> bool {
        self == Self::Unassigned
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(id) => write!(f, "{id}"),
            Self::Unassigned => f.write_str("-"),
        }
    }
}

/// A single song record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Song {
    pub id: SongId,
    /// Display tags, keyed by lowercase tag name (`file`, `title`, ...).
    pub tags: BTreeMap<String, String>,
    /// Ordering keys derived from `tags`.
    pub sort_tags: BTreeMap<String, String>,
}

impl Song {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a song from one daemon attribute set.
    ///
    /// Keys are lowercased and every pair is copied into `tags`, its
    /// ordering key into `sort_tags`. The `id` attribute is also parsed into
    /// the song identifier.
    pub fn from_attrs(attrs: &Attrs) -> Self {
        let mut song = Self::new();
        for (key, value) in attrs {
            let key = key.to_ascii_lowercase();
            if key == "id" {
                song.id = value
                    .trim()
                    .parse()
                    .map(SongId::Known)
                    .unwrap_or(SongId::Unassigned);
            }
            song.set_tag(&key, value);
        }
        song
    }

    /// Set a display tag and refresh its ordering key.
    pub fn set_tag(&mut self, key: &str, value: &str) {
        let key = key.to_ascii_lowercase();
        self.sort_tags.insert(key.clone(), sort_value(&key, value));
        self.tags.insert(key, value.to_string());
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Ordering key for `field`; absent tags order as the empty string.
    pub fn sort_key(&self, field: &str) -> &str {
        self.sort_tags.get(field).map(String::as_str).unwrap_or("")
    }

    /// The daemon-relative path of the song.
    pub fn file(&self) -> Option<&str> {
        self.tag("file")
    }

    /// Whether `self` and `other` refer to the same song.
    ///
    /// Identifiers decide when both are known; otherwise the `file` tags
    /// must be present and equal.
    pub fn matches(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.id.known(), other.id.known()) {
            return a == b;
        }
        matches!((self.file(), other.file()), (Some(a), Some(b)) if a == b)
    }
}
