use crate::errors::ServerError;
use crate::render::REVEAL_DELAY_MS;
use crate::router::handle;
use crate::tests::utils::{animated_state, body_string, request, scenario_stays};
use http::Method;

#[test]
fn animated_page_schedules_the_reveal() {
    let state = animated_state(scenario_stays());

    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());

    assert!(body.contains("skeleton-card"));
    assert!(body.contains(&format!("load delay:{REVEAL_DELAY_MS}ms")));
    assert!(body.contains("/stays/cards?gen=1"));
    assert!(!body.contains("Left bank loft"));
}

#[test]
fn current_generation_reveals_the_cards() {
    let state = animated_state(scenario_stays());

    handle(request(Method::GET, "/"), &state).unwrap();

    let resp = handle(request(Method::GET, "/stays/cards?gen=1"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Left bank loft"));
    assert!(body.contains("Old town flat"));
}

#[test]
fn stale_generation_is_dropped() {
    let state = animated_state(scenario_stays());

    // Two renders: generation 1 is superseded by generation 2.
    handle(request(Method::GET, "/"), &state).unwrap();
    handle(request(Method::GET, "/"), &state).unwrap();

    let resp = handle(request(Method::GET, "/stays/cards?gen=1"), &state).unwrap();
    assert_eq!(resp.status(), 204);
    assert_eq!(body_string(resp), "");
}

#[test]
fn reveal_without_generation_is_rejected() {
    let state = animated_state(scenario_stays());

    let result = handle(request(Method::GET, "/stays/cards"), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}
