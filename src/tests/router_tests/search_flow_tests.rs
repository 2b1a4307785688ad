use crate::router::handle;
use crate::tests::utils::{app_state, body_string, form_request, request, scenario_stays};
use http::Method;

#[test]
fn opening_the_modal_focuses_the_city_field() {
    let state = app_state(scenario_stays());

    let resp = handle(request(Method::GET, "/search/modal"), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("search-overlay"));
    assert!(body.contains(r#"id="city-input""#));
    assert!(body.contains("autofocus"));
    assert!(body.contains("Add guests"));

    // The page now renders the modal inline while it stays open.
    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());
    assert!(body.contains("search-overlay"));
}

#[test]
fn closing_the_modal_clears_the_mount() {
    let state = app_state(scenario_stays());

    handle(request(Method::GET, "/search/modal"), &state).unwrap();
    let resp = handle(form_request("/search/close", ""), &state).unwrap();
    assert_eq!(body_string(resp), "");

    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());
    assert!(!body.contains("search-overlay"));
}

#[test]
fn city_suggestions_use_the_raw_query() {
    let state = app_state(scenario_stays());

    let resp = handle(request(Method::GET, "/search/cities?city=par"), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Paris, France"));
    assert!(body.contains("Paris Region, France"));
    assert!(!body.contains("Lyon"));
}

#[test]
fn choosing_a_suggestion_fills_the_city_field() {
    let state = app_state(scenario_stays());

    let resp = handle(
        form_request("/search/city", "city=Paris&country=France"),
        &state,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains(r#"value="Paris, France""#));
    // The replaced field comes back with an empty suggestion list.
    assert!(body.contains(r#"id="city-suggestions""#));
}

#[test]
fn steppers_update_counts_and_combined_label() {
    let state = app_state(scenario_stays());

    let resp = handle(
        form_request("/search/guests", "kind=adults&op=inc"),
        &state,
    )
    .unwrap();
    let body = body_string(resp);
    assert!(body.contains("1 guest"));
    assert!(body.contains(r#"id="adult-count""#));
    assert!(body.contains("hx-swap-oob"));

    let resp = handle(
        form_request("/search/guests", "kind=children&op=inc"),
        &state,
    )
    .unwrap();
    assert!(body_string(resp).contains("2 guests"));
}

#[test]
fn decrement_at_zero_keeps_the_placeholder_label() {
    let state = app_state(scenario_stays());

    let resp = handle(
        form_request("/search/guests", "kind=children&op=dec"),
        &state,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains("Add guests"));
}

#[test]
fn applying_filters_narrows_the_page() {
    let state = app_state(scenario_stays());

    // Two adults and one child, then confirm with a picked city.
    for body in ["kind=adults&op=inc", "kind=adults&op=inc", "kind=children&op=inc"] {
        handle(form_request("/search/guests", body), &state).unwrap();
    }

    let resp = handle(
        form_request("/search/apply", "city=Paris%2C+France"),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());
    assert!(body.contains("Suburban house"));
    assert!(!body.contains("Left bank loft"));
    assert!(!body.contains("Old town flat"));
    assert!(body.contains("1 Stay"));

    // Summary labels reflect the applied criteria.
    assert!(body.contains("Paris, France"));
    assert!(body.contains("3 guests"));
    // Confirming closed the modal.
    assert!(!body.contains("search-overlay"));
}

#[test]
fn applying_an_empty_city_falls_back_to_add_location() {
    let state = app_state(scenario_stays());

    let resp = handle(form_request("/search/apply", "city="), &state).unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());
    assert!(body.contains("Add location"));
    assert!(body.contains("3 Stays"));
}

#[test]
fn zero_matches_show_the_empty_state_message() {
    let state = app_state(scenario_stays());

    handle(form_request("/search/apply", "city=Nowhere"), &state).unwrap();

    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());
    assert!(body.contains("0 Stays"));
    assert!(body.contains("No stays match your search."));
}
