//! Plain-text rendering of the gallery view model.
//!
//! The renderer is a dumb formatter over [`GalleryView`]: it writes lines to
//! stdout and makes no decisions about fallbacks or visibility, which all
//! happen in the view model.

use crate::app::AppState;
use crate::ui::viewmodel::{CardView, GalleryView};

/// Renders the current state to stdout.
pub fn render(state: &AppState) {
    let view = GalleryView::from_state(state);

    println!();
    println!("{}", view.header);
    println!("{}", "─".repeat(view.header.chars().count()));

    if let Some(status) = &view.status {
        println!("  {status}");
    }

    for card in &view.cards {
        print_card(card);
    }

    if let Some(favorites) = &view.favorites {
        println!();
        println!("Mis favoritos ({})", favorites.len());
        if favorites.is_empty() {
            println!("  Aún no hay favoritos guardados.");
        }
        for card in favorites {
            print_card(card);
        }
    }

    if let Some(detail) = &view.detail {
        println!();
        println!("Detalle completo: {}", detail.title);
        println!("  {}", detail.url);
        println!("  Personalidad: {}", detail.temperament);
        println!("  Procedencia:  {}", detail.origin);
        println!("  Peso:         {} kg", detail.weight);
        println!("  Esperanza de vida: {} años", detail.life_span);
        println!("  {}", detail.description);
    }
}

fn print_card(card: &CardView) {
    let marker = if card.favorite { "♥" } else { " " };
    println!(
        "  {marker} [{}] {} — {} ({})",
        card.id, card.name, card.temperament, card.origin
    );
}
