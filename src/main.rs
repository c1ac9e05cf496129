//! Terminal runtime and entry point.
//!
//! This binary is the thin integration layer between the `cat_gallery`
//! library and the terminal: it reads commands from stdin, translates them
//! to library events, executes the returned actions on the tokio runtime
//! (HTTP fetches, favorites persistence), and feeds fetch completions back
//! into the event handler before rendering.
//!
//! # Commands
//!
//! - `next` (or `n`): advance one page, appending results
//! - `apply`: apply the current filters (reset to page 0)
//! - `reset`: restore default filters (does not fetch)
//! - `breed <name>`: select a breed by fuzzy name match; `breed -` clears
//! - `order <popular|recent|random>`: select result ordering
//! - `mime <jpg|png|gif>`: toggle an image type
//! - `fav <id>`: toggle an image as favorite
//! - `open <id>` / `close`: open or close the detail view
//! - `favs`: expand or collapse the favorites panel
//! - `help`, `quit`

use cat_gallery::api::{CatApiClient, SearchRequest};
use cat_gallery::app::{handle_event, Action, AppState, Event, MimeType, SortOrder};
use cat_gallery::storage::{FavoritesStore, JsonFavorites, FAVORITES_FILE};
use cat_gallery::{initialize, observability, ui, Config, GalleryError};
use std::io::{BufRead, Write};
use std::time::Duration;

/// Parsed user input, one step above raw events.
enum Command {
    /// Translate directly into a library event.
    Emit(Event),
    /// Select a breed by fuzzy name; needs the catalog from state.
    Breed(String),
    /// Print the command reference.
    Help,
    /// Exit the program.
    Quit,
    /// Anything unrecognized.
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or("");
    let rest = words.collect::<Vec<_>>().join(" ");

    match verb {
        "next" | "n" => Command::Emit(Event::AdvancePage),
        "apply" => Command::Emit(Event::ApplyFilters),
        "reset" => Command::Emit(Event::ResetFilters),
        "breed" => Command::Breed(rest),
        "order" => match rest.as_str() {
            "popular" => Command::Emit(Event::SetOrder(SortOrder::Desc)),
            "recent" => Command::Emit(Event::SetOrder(SortOrder::Asc)),
            "random" => Command::Emit(Event::SetOrder(SortOrder::Random)),
            other => Command::Unknown(format!("order {other}")),
        },
        "mime" => match rest.as_str() {
            "jpg" => Command::Emit(Event::ToggleMime(MimeType::Jpg)),
            "png" => Command::Emit(Event::ToggleMime(MimeType::Png)),
            "gif" => Command::Emit(Event::ToggleMime(MimeType::Gif)),
            other => Command::Unknown(format!("mime {other}")),
        },
        "fav" => Command::Emit(Event::ToggleFavorite { id: rest }),
        "open" => Command::Emit(Event::SelectImage { id: rest }),
        "close" => Command::Emit(Event::CloseDetail),
        "favs" => Command::Emit(Event::ToggleFavoritesPanel),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

const HELP: &str = "\
Comandos:
  next | n            siguiente página (agrega resultados)
  apply               aplicar filtros (vuelve a la página 0)
  reset               restaurar filtros por defecto
  breed <nombre|->    filtrar por raza (búsqueda difusa) o limpiar
  order <popular|recent|random>
  mime <jpg|png|gif>  alternar tipo de imagen
  fav <id>            marcar/quitar favorito
  open <id> | close   ver/cerrar detalle
  favs                mostrar/ocultar favoritos
  quit                salir";

/// Extracts the user-facing text from a fetch failure.
fn user_message(error: GalleryError) -> String {
    match error {
        GalleryError::Network(message) => message,
        other => other.to_string(),
    }
}

/// Runtime wiring: state machine plus the effectful collaborators.
struct Runtime {
    state: AppState,
    client: CatApiClient,
    storage: JsonFavorites,
}

impl Runtime {
    /// Feeds an event through the handler and executes the returned actions,
    /// recursing into completion events until the queue drains.
    async fn dispatch(&mut self, event: Event) -> bool {
        let mut rendered = false;
        let mut queue = vec![event];

        while !queue.is_empty() {
            let mut completions = Vec::new();
            for event in queue.drain(..) {
                match handle_event(&mut self.state, &event) {
                    Ok((should_render, actions)) => {
                        rendered |= should_render;
                        for action in actions {
                            if let Some(completion) = self.execute(action).await {
                                completions.push(completion);
                            }
                        }
                    }
                    Err(e) => tracing::error!(error = %e, "event handling failed"),
                }
            }
            queue = completions;
        }

        rendered
    }

    /// Executes one action, returning the completion event for fetches.
    async fn execute(&mut self, action: Action) -> Option<Event> {
        match action {
            Action::FetchBreeds => match self.client.fetch_breeds().await {
                Ok(breeds) => Some(Event::BreedsLoaded { breeds }),
                Err(e) => Some(Event::BreedsFailed {
                    message: user_message(e),
                }),
            },
            Action::FetchPage(request) => Some(self.fetch_page(request).await),
            Action::PersistFavorites(records) => {
                if let Err(e) = self.storage.save(&records) {
                    tracing::error!(error = %e, "failed to persist favorites");
                }
                None
            }
        }
    }

    async fn fetch_page(&self, request: SearchRequest) -> Event {
        match self.client.search(&request).await {
            Ok(items) => Event::PageLoaded {
                epoch: request.epoch,
                reset: request.reset,
                items,
            },
            Err(e) => Event::PageFailed {
                epoch: request.epoch,
                reset: request.reset,
                message: user_message(e),
            },
        }
    }

    /// Resolves a breed command against the loaded catalog.
    fn breed_event(&self, query: &str) -> Option<Event> {
        if query.is_empty() || query == "-" {
            return Some(Event::SetBreed(String::new()));
        }

        match self.state.resolve_breed(query) {
            Some(breed) => {
                println!("Raza seleccionada: {} ({})", breed.name, breed.id);
                Some(Event::SetBreed(breed.id.clone()))
            }
            None => {
                if self.state.breeds.is_empty() {
                    println!("El catálogo de razas no está disponible.");
                } else {
                    println!("No se encontró ninguna raza para '{query}'.");
                }
                None
            }
        }
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return std::process::ExitCode::FAILURE;
        }
    };
    observability::init_tracing(&config);

    let client = match CatApiClient::new(
        &config.api_base,
        Duration::from_secs(config.request_timeout_secs),
        config.api_key.clone(),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    let storage = match JsonFavorites::new(config.data_dir().join(FAVORITES_FILE)) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("{e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    let favorites = storage.load();
    let state = initialize(&config, favorites);
    let mut runtime = Runtime {
        state,
        client,
        storage,
    };

    println!("CatGallery — explorador de gatos usando The Cat API");
    println!("Escribe 'help' para ver los comandos.");

    if runtime.dispatch(Event::Started).await {
        ui::render(&runtime.state);
    }

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to read input");
                break;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match parse_command(line) {
            Command::Emit(event) => event,
            Command::Breed(query) => match runtime.breed_event(&query) {
                Some(event) => event,
                None => continue,
            },
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
            Command::Unknown(what) => {
                println!("Comando desconocido: '{what}'. Escribe 'help'.");
                continue;
            }
        };

        if runtime.dispatch(event).await {
            ui::render(&runtime.state);
        }
    }

    std::process::ExitCode::SUCCESS
}
