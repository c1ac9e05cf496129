//! View model types computed from application state.
//!
//! View models are immutable snapshots prepared for rendering: fallback text
//! for breed-less cats is resolved here, favorite markers are precomputed,
//! and the renderer below stays a dumb formatter. The fallback strings match
//! the original web gallery's copy.

use crate::app::{AppState, GalleryPhase};
use crate::domain::ImageItem;

/// Fallback title for images without breed data.
const NO_BREED_NAME: &str = "Gato sin raza definida";

/// Fallback temperament line.
const NO_TEMPERAMENT: &str = "Personalidad misteriosa";

/// Fallback origin label.
const NO_ORIGIN: &str = "Origen desconocido";

/// Fallback for unavailable detail fields.
const NOT_AVAILABLE: &str = "No disponible";

/// Message shown when a filter combination returns nothing.
const EMPTY_GALLERY: &str = "No encontramos gatos con esos filtros. Prueba con otra combinación.";

/// One gallery card ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Image id, shown so commands can reference the card.
    pub id: String,

    /// Breed name or the no-breed fallback.
    pub name: String,

    /// Temperament or its fallback.
    pub temperament: String,

    /// Origin or its fallback.
    pub origin: String,

    /// Whether the image is currently a favorite.
    pub favorite: bool,
}

impl CardView {
    fn from_item(item: &ImageItem, favorite: bool) -> Self {
        let breed = item.breed();
        Self {
            id: item.id.clone(),
            name: breed.map_or(NO_BREED_NAME.to_string(), |b| b.name.clone()),
            temperament: breed
                .filter(|b| !b.temperament.is_empty())
                .map_or(NO_TEMPERAMENT.to_string(), |b| b.temperament.clone()),
            origin: breed
                .filter(|b| !b.origin.is_empty())
                .map_or(NO_ORIGIN.to_string(), |b| b.origin.clone()),
            favorite,
        }
    }
}

/// Detail view for a selected image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Breed name or the no-breed fallback.
    pub title: String,

    /// Image URL.
    pub url: String,

    /// Temperament, origin, metric weight, and life span, each falling back
    /// to "No disponible".
    pub temperament: String,
    /// Origin line.
    pub origin: String,
    /// Weight in kilograms.
    pub weight: String,
    /// Life span in years.
    pub life_span: String,

    /// Long-form description or its fallback.
    pub description: String,
}

impl DetailView {
    fn from_item(item: &ImageItem) -> Self {
        let breed = item.breed();
        let field = |value: Option<&String>| {
            value
                .filter(|v| !v.is_empty())
                .map_or(NOT_AVAILABLE.to_string(), Clone::clone)
        };

        Self {
            title: breed.map_or(NO_BREED_NAME.to_string(), |b| b.name.clone()),
            url: item.url.clone(),
            temperament: field(breed.map(|b| &b.temperament)),
            origin: field(breed.map(|b| &b.origin)),
            weight: field(breed.map(|b| &b.weight.metric)),
            life_span: field(breed.map(|b| &b.life_span)),
            description: field(breed.map(|b| &b.description)),
        }
    }
}

/// Complete renderable snapshot of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    /// Header line with the page number and favorite count.
    pub header: String,

    /// Cards for the loaded items.
    pub cards: Vec<CardView>,

    /// Status line: loading indicator, error message, or the empty-gallery
    /// hint. `None` when items are showing normally.
    pub status: Option<String>,

    /// Cards for the favorites panel, `None` when the panel is collapsed.
    pub favorites: Option<Vec<CardView>>,

    /// Detail view for the selected image, when open.
    pub detail: Option<DetailView>,
}

impl GalleryView {
    /// Computes the view model from a state snapshot.
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let favorite_ids = state.favorite_ids();

        let cards: Vec<CardView> = state
            .items
            .iter()
            .map(|item| CardView::from_item(item, favorite_ids.contains(item.id.as_str())))
            .collect();

        let status = match state.phase {
            GalleryPhase::Loading => Some("Cargando...".to_string()),
            GalleryPhase::Error | GalleryPhase::Idle => state.error.clone().or_else(|| {
                if cards.is_empty() && state.phase == GalleryPhase::Idle {
                    Some(EMPTY_GALLERY.to_string())
                } else {
                    None
                }
            }),
        };

        let favorites = state.favorites_open.then(|| {
            state
                .favorites
                .iter()
                .map(|record| CardView::from_item(&record.to_item(), true))
                .collect()
        });

        Self {
            header: format!(
                "CatGallery — página {} · {} imágenes · {} favoritos",
                state.page,
                state.items.len(),
                state.favorites.len()
            ),
            cards,
            status,
            favorites,
            detail: state.selected.as_ref().map(DetailView::from_item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Breed, BreedWeight};

    fn item_with_breed(id: &str) -> ImageItem {
        ImageItem {
            id: id.to_string(),
            url: format!("http://x/{id}.jpg"),
            breeds: vec![Breed {
                id: "abys".to_string(),
                name: "Abyssinian".to_string(),
                temperament: "Active, Curious".to_string(),
                origin: "Egypt".to_string(),
                life_span: "14 - 15".to_string(),
                weight: BreedWeight {
                    metric: "3 - 5".to_string(),
                },
                description: "Lively and playful.".to_string(),
            }],
        }
    }

    fn bare_item(id: &str) -> ImageItem {
        ImageItem {
            id: id.to_string(),
            url: format!("http://x/{id}.jpg"),
            breeds: vec![],
        }
    }

    #[test]
    fn cards_use_breed_data_when_present() {
        let mut state = AppState::new(vec![]);
        state.items = vec![item_with_breed("a")];

        let view = GalleryView::from_state(&state);
        assert_eq!(view.cards[0].name, "Abyssinian");
        assert_eq!(view.cards[0].origin, "Egypt");
        assert!(!view.cards[0].favorite);
    }

    #[test]
    fn breed_less_cards_fall_back_to_placeholders() {
        let mut state = AppState::new(vec![]);
        state.items = vec![bare_item("a")];

        let view = GalleryView::from_state(&state);
        assert_eq!(view.cards[0].name, NO_BREED_NAME);
        assert_eq!(view.cards[0].temperament, NO_TEMPERAMENT);
        assert_eq!(view.cards[0].origin, NO_ORIGIN);
    }

    #[test]
    fn empty_idle_gallery_shows_hint() {
        let state = AppState::new(vec![]);
        let view = GalleryView::from_state(&state);
        assert_eq!(view.status.as_deref(), Some(EMPTY_GALLERY));
    }

    #[test]
    fn error_message_wins_over_empty_hint() {
        let mut state = AppState::new(vec![]);
        state.error = Some("boom".to_string());
        let view = GalleryView::from_state(&state);
        assert_eq!(view.status.as_deref(), Some("boom"));
    }

    #[test]
    fn detail_fields_fall_back_individually() {
        let mut state = AppState::new(vec![]);
        state.selected = Some(bare_item("a"));

        let detail = GalleryView::from_state(&state).detail.expect("detail");
        assert_eq!(detail.title, NO_BREED_NAME);
        assert_eq!(detail.weight, NOT_AVAILABLE);
        assert_eq!(detail.description, NOT_AVAILABLE);
    }

    #[test]
    fn favorites_panel_appears_only_when_open() {
        let mut state = AppState::new(vec![]);
        state.toggle_favorite(&bare_item("fav"));

        assert!(GalleryView::from_state(&state).favorites.is_none());

        state.favorites_open = true;
        let favorites = GalleryView::from_state(&state)
            .favorites
            .expect("panel open");
        assert_eq!(favorites.len(), 1);
        assert!(favorites[0].favorite);
    }
}
