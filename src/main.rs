use crate::config::AppConfig;
use crate::loader::{seed_stays, StayFetch};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use crate::store::StayStore;
use astra::Server;
use std::sync::Arc;

mod config;
mod domain;
mod errors;
mod loader;
mod render;
mod responses;
mod router;
mod search;
mod state;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = AppConfig::from_env();

    // A malformed embedded seed is a build defect, not a simulated
    // network failure.
    let seed = match seed_stays() {
        Ok(stays) => stays,
        Err(e) => {
            eprintln!("Stay seed is malformed: {e}");
            std::process::exit(1);
        }
    };

    let fetch = if config.fail_fetch {
        StayFetch::rejected("bad connection")
    } else {
        StayFetch::resolved(seed)
    };

    // Fetch failure is logged and swallowed; the page comes up empty.
    let store = match fetch.take() {
        Ok(stays) => {
            println!("Loaded {} stays", stays.len());
            StayStore::from_stays(stays)
        }
        Err(e) => {
            eprintln!("{e}; starting with an empty listing");
            StayStore::empty()
        }
    };

    let addr = config.addr;
    let state = Arc::new(AppState::new(store, config));

    println!("Starting server at http://{addr}");
    let server = Server::bind(addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
