use crate::domain::filter::filter_stays;
use crate::errors::{ResultResp, ServerError};
use crate::render::revealed_results;
use crate::responses::{css_response, html_response, no_content, see_other};
use crate::search::{city_suggestions, GuestKind, GuestOp, SearchModal};
use crate::state::AppState;
use crate::templates::components::{
    city_field, guest_steppers, guest_trigger, search_modal, suggestion_list,
};
use crate::templates::pages::stays_page;
use astra::Request;
use maud::html;
use std::collections::HashMap;
use std::io::Read;
use std::sync::MutexGuard;
use url::form_urlencoded;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => stays_page_response(state),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        ("GET", "/stays/cards") => reveal_response(state, &parse_query(&req)),
        ("GET", "/search/modal") => open_modal_response(state),
        ("POST", "/search/close") => close_modal_response(state),
        ("GET", "/search/cities") => suggestions_response(state, &parse_query(&req)),
        ("POST", "/search/city") => {
            let form = parse_form(&mut req)?;
            choose_city_response(state, &form)
        }
        ("POST", "/search/guests") => {
            let form = parse_form(&mut req)?;
            bump_guest_response(state, &form)
        }
        ("POST", "/search/apply") => {
            let form = parse_form(&mut req)?;
            apply_response(state, &form)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn lock_search<'a>(state: &'a AppState) -> Result<MutexGuard<'a, SearchModal>, ServerError> {
    state.search.lock().map_err(|_| ServerError::LockPoisoned)
}

fn stays_page_response(state: &AppState) -> ResultResp {
    let search = lock_search(state)?;
    let results = filter_stays(
        state.store.stays(),
        &search.applied.city_query,
        search.applied.total_guests(),
    );
    html_response(stays_page(
        &search,
        &results,
        state.config.render,
        &state.reveal,
    ))
}

/// The delayed reveal firing. A stale generation means a newer render
/// already owns the region, so the reveal is dropped with a 204.
fn reveal_response(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let generation = params
        .get("gen")
        .and_then(|g| g.parse::<u64>().ok())
        .ok_or_else(|| ServerError::BadRequest("missing reveal generation".into()))?;

    if !state.reveal.is_current(generation) {
        return no_content();
    }

    let search = lock_search(state)?;
    let results = filter_stays(
        state.store.stays(),
        &search.applied.city_query,
        search.applied.total_guests(),
    );
    html_response(revealed_results(&results, !search.applied.is_identity()))
}

fn open_modal_response(state: &AppState) -> ResultResp {
    let mut search = lock_search(state)?;
    search.open();
    html_response(search_modal(&search.pending))
}

fn close_modal_response(state: &AppState) -> ResultResp {
    let mut search = lock_search(state)?;
    search.close();
    // Empty fragment clears the modal mount.
    html_response(html! {})
}

fn suggestions_response(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let query = params.get("city").map(String::as_str).unwrap_or("");
    let matches = city_suggestions(state.store.stays(), query);
    html_response(suggestion_list(&matches))
}

fn choose_city_response(state: &AppState, form: &HashMap<String, String>) -> ResultResp {
    let city = form
        .get("city")
        .ok_or_else(|| ServerError::BadRequest("missing city".into()))?;
    let country = form
        .get("country")
        .ok_or_else(|| ServerError::BadRequest("missing country".into()))?;

    let mut search = lock_search(state)?;
    search.choose_city(city, country);
    html_response(city_field(&search.pending.city_query))
}

fn bump_guest_response(state: &AppState, form: &HashMap<String, String>) -> ResultResp {
    let kind: GuestKind = form
        .get("kind")
        .and_then(|k| k.parse().ok())
        .ok_or_else(|| ServerError::BadRequest("unknown guest kind".into()))?;
    let op: GuestOp = form
        .get("op")
        .and_then(|o| o.parse().ok())
        .ok_or_else(|| ServerError::BadRequest("unknown guest op".into()))?;

    let mut search = lock_search(state)?;
    search.bump_guest(kind, op);

    // Steppers for the panel, plus an out-of-band refresh of the
    // combined label above it.
    html_response(html! {
        (guest_steppers(&search.pending))
        (guest_trigger(search.pending.total_guests(), true))
    })
}

fn apply_response(state: &AppState, form: &HashMap<String, String>) -> ResultResp {
    let city = form.get("city").map(String::as_str).unwrap_or("");
    let mut search = lock_search(state)?;
    search.apply(city);
    see_other("/")
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(form_urlencoded::parse(&buf).into_owned().collect())
}
