//! Filter state types controlling image searches.
//!
//! This module defines [`FilterState`] and its value enums [`SortOrder`] and
//! [`MimeType`]. Filter mutations never trigger a fetch by themselves; the
//! explicit apply event owns the reset-and-refetch (see
//! [`crate::app::handler`]).
//!
//! # Defaults
//!
//! The documented default filter is `{ breed_id: "", mime_types: [jpg],
//! order: Random }`, matching the gallery's initial load.

use serde::{Deserialize, Serialize};

/// Result ordering requested from the image search endpoint.
///
/// Wire values are the upstream API's `order` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Most popular first (`DESC`).
    Desc,

    /// Oldest uploads first (`ASC`).
    Asc,

    /// Server-side random order (`RANDOM`). The default.
    #[default]
    Random,
}

impl SortOrder {
    /// Returns the wire value for the `order` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desc => "DESC",
            Self::Asc => "ASC",
            Self::Random => "RANDOM",
        }
    }
}

/// Image file type constraint for searches.
///
/// Wire values are the lowercase extensions joined into the `mime_types`
/// CSV query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeType {
    /// JPEG images.
    Jpg,
    /// PNG images.
    Png,
    /// Animated GIFs.
    Gif,
}

impl MimeType {
    /// Returns the wire value for the `mime_types` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }
}

/// Current breed, order, and image-type selections.
///
/// A value type: mutation events produce a new selection, and the selection
/// only reaches the network when filters are applied. `reset` restores the
/// documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected breed id; empty string means no breed filter.
    pub breed_id: String,

    /// Selected image types; joined as CSV in the search query. May be empty,
    /// in which case the parameter is omitted and the API applies its own
    /// default.
    pub mime_types: Vec<MimeType>,

    /// Requested result ordering.
    pub order: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            breed_id: String::new(),
            mime_types: vec![MimeType::Jpg],
            order: SortOrder::Random,
        }
    }
}

impl FilterState {
    /// Returns whether a breed filter is active.
    #[must_use]
    pub fn has_breed(&self) -> bool {
        !self.breed_id.is_empty()
    }

    /// Adds the mime type if absent, removes it if present.
    ///
    /// Preserves the relative order of the remaining selections. Toggling the
    /// last remaining type is allowed; an empty selection simply omits the
    /// query parameter.
    pub fn toggle_mime(&mut self, mime: MimeType) {
        if let Some(pos) = self.mime_types.iter().position(|m| *m == mime) {
            self.mime_types.remove(pos);
        } else {
            self.mime_types.push(mime);
        }
    }

    /// Restores the documented defaults: no breed, `[jpg]`, random order.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let filters = FilterState::default();
        assert_eq!(filters.breed_id, "");
        assert_eq!(filters.mime_types, vec![MimeType::Jpg]);
        assert_eq!(filters.order, SortOrder::Random);
        assert!(!filters.has_breed());
    }

    #[test]
    fn toggle_mime_adds_and_removes() {
        let mut filters = FilterState::default();
        filters.toggle_mime(MimeType::Gif);
        assert_eq!(filters.mime_types, vec![MimeType::Jpg, MimeType::Gif]);

        filters.toggle_mime(MimeType::Jpg);
        assert_eq!(filters.mime_types, vec![MimeType::Gif]);

        filters.toggle_mime(MimeType::Gif);
        assert!(filters.mime_types.is_empty());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut filters = FilterState {
            breed_id: "beng".to_string(),
            mime_types: vec![MimeType::Png, MimeType::Gif],
            order: SortOrder::Desc,
        };
        filters.reset();
        assert_eq!(filters, FilterState::default());
    }
}
