use crate::config::AppConfig;
use crate::domain::Stay;
use crate::render::RenderMode;
use crate::state::AppState;
use crate::store::StayStore;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub fn stay(title: &str, city: &str, country: &str, max_guests: u32) -> Stay {
    Stay {
        title: title.into(),
        city: city.into(),
        country: country.into(),
        kind: "Entire apartment".into(),
        beds: Some(2),
        max_guests,
        rating: 4.5,
        super_host: false,
        photo: "https://example.com/photo.jpg".into(),
    }
}

/// The three-city fixture used throughout the filter and router tests.
pub fn scenario_stays() -> Vec<Stay> {
    vec![
        stay("Left bank loft", "Paris", "France", 2),
        stay("Suburban house", "Paris Region", "France", 5),
        stay("Old town flat", "Lyon", "France", 4),
    ]
}

pub fn app_state(stays: Vec<Stay>) -> AppState {
    AppState::new(StayStore::from_stays(stays), AppConfig::default())
}

pub fn animated_state(stays: Vec<Stay>) -> AppState {
    let config = AppConfig {
        render: RenderMode::Animated,
        ..AppConfig::default()
    };
    AppState::new(StayStore::from_stays(stays), config)
}

pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn form_request(uri: &str, body: &str) -> Request {
    let mut req = request(Method::POST, uri);
    *req.body_mut() = Body::from(body.to_string());
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
