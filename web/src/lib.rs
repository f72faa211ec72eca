use std::rc::Rc;

use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;

const DEFAULT_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameOptions,
}

impl Args {
    /// Parses `#-vv&--autostart` style fragments, the leading empty segment
    /// standing in for the binary name.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

fn default_grid() -> Result<trove_core::GridModel, trove_core::GameError> {
    trove_core::GridModel::from_json(DEFAULT_CATALOG)
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("options: {:?}", args.game);

    let grid = match default_grid() {
        Ok(grid) => grid,
        Err(err) => {
            log::error!("could not load catalog: {}", err);
            return;
        }
    };

    let root = document()
        .get_element_by_id("trove")
        .expect("Could not find id=\"trove\" element");

    let props = game::GameProps {
        grid: Rc::new(grid),
        options: args.game,
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_a_three_by_three_grid() {
        let grid = default_grid().unwrap();

        assert_eq!(grid.len(), 9);
        assert_eq!(grid.side(), 3);
        assert_eq!(grid.discovered_count(), 0);
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert!(!args.game.autostart);
    }

    #[test]
    fn hash_flags_are_parsed() {
        let args = Args::from_location_hash("#-vv&--autostart").unwrap();

        assert!(args.game.autostart);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }
}
