use crate::domain::labels::guests_label;
use crate::domain::Stay;
use crate::search::SearchCriteria;
use maud::{html, Markup};

/// The main search bar: summary labels from the last-applied criteria
/// plus two theme-specific triggers (one hidden at a time, swapped by
/// the theme toggle).
pub fn search_bar(applied: &SearchCriteria) -> Markup {
    let city = if applied.city_query.trim().is_empty() {
        "Add location".to_string()
    } else {
        applied.city_query.clone()
    };

    html! {
        div class="search-bar" {
            span id="bar-city" class="search-bar-city" { (city) }
            span id="bar-guests" class="search-bar-guests" { (guests_label(applied.total_guests())) }
            button id="search-trigger" class="search-trigger" type="button"
                hx-get="/search/modal" hx-target="#modal-mount" hx-swap="innerHTML" {
                (magnifier_icon("#eb5757"))
            }
            button id="search-trigger-dark" class="search-trigger search-trigger-dark" type="button" hidden
                hx-get="/search/modal" hx-target="#modal-mount" hx-swap="innerHTML" {
                (magnifier_icon("#f2f2f2"))
            }
        }
    }
}

fn magnifier_icon(stroke: &str) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="18"
            height="18"
            viewBox="0 0 24 24"
            fill="none"
            stroke=(stroke)
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        {
            circle cx="11" cy="11" r="8" {}
            path d="m21 21-4.3-4.3" {}
        }
    }
}

/// The open modal. Clicking the overlay itself (not the dialog) closes
/// it; confirming posts the form and re-renders the page.
pub fn search_modal(pending: &SearchCriteria) -> Markup {
    html! {
        div id="search-overlay" class="search-overlay"
            hx-post="/search/close"
            hx-trigger="click[target.id=='search-overlay']"
            hx-target="#modal-mount"
            hx-swap="innerHTML" {
            form class="search-modal" method="post" action="/search/apply" {
                (city_field(&pending.city_query))
                (guest_field(pending))
                button type="submit" class="apply-button" { "Search" }
            }
        }
    }
}

/// City input plus its live suggestion list. Replaced wholesale when a
/// suggestion is picked, which also clears the list.
pub fn city_field(value: &str) -> Markup {
    html! {
        div id="city-field" class="modal-field" {
            label class="modal-field-label" for="city-input" { "Location" }
            input id="city-input" class="city-input" type="text" name="city"
                value=(value) placeholder="Add location" autocomplete="off" autofocus
                hx-get="/search/cities"
                hx-trigger="input changed delay:250ms"
                hx-target="#city-suggestions"
                hx-swap="innerHTML";
            ul id="city-suggestions" class="city-suggestions" {}
        }
    }
}

/// One entry per matching stay, the way the original listed them;
/// repeated cities are intentional.
pub fn suggestion_list(matches: &[&Stay]) -> Markup {
    html! {
        @for stay in matches {
            li {
                button type="button" class="city-suggestion"
                    hx-post="/search/city"
                    hx-vals=(serde_json::json!({ "city": stay.city, "country": stay.country }).to_string())
                    hx-target="#city-field"
                    hx-swap="outerHTML" {
                    (stay.city) ", " (stay.country)
                }
            }
        }
    }
}

fn guest_field(pending: &SearchCriteria) -> Markup {
    html! {
        div class="modal-field" {
            span class="modal-field-label" { "Guests" }
            (guest_trigger(pending.total_guests(), false))
            div id="guest-controls" class="guest-controls" hidden {
                (guest_steppers(pending))
            }
        }
    }
}

/// Combined guest label; also folds the stepper panel in and out. The
/// `oob` form rides along with stepper responses to keep the label in
/// step with the counters.
pub fn guest_trigger(total: u32, oob: bool) -> Markup {
    html! {
        button id="guest-input" type="button" class="guest-input"
            hx-swap-oob=[oob.then_some("true")]
            onclick="document.getElementById('guest-controls').toggleAttribute('hidden')" {
            (guests_label(total))
        }
    }
}

pub fn guest_steppers(pending: &SearchCriteria) -> Markup {
    html! {
        (guest_row("Adults", "Ages 13 or above", "adults", "adult-count", pending.adults))
        (guest_row("Children", "Ages 2-12", "children", "child-count", pending.children))
    }
}

fn guest_row(title: &str, hint: &str, kind: &str, count_id: &str, count: u32) -> Markup {
    html! {
        div class="guest-row" {
            div {
                p class="guest-row-title" { (title) }
                p class="guest-row-hint" { (hint) }
            }
            div class="guest-row-controls" {
                button type="button" class="guest-step"
                    hx-post="/search/guests"
                    hx-vals=(format!(r#"{{"kind":"{kind}","op":"dec"}}"#))
                    hx-target="#guest-controls"
                    hx-swap="innerHTML" { "\u{2212}" }
                span id=(count_id) class="guest-count" { (count) }
                button type="button" class="guest-step"
                    hx-post="/search/guests"
                    hx-vals=(format!(r#"{{"kind":"{kind}","op":"inc"}}"#))
                    hx-target="#guest-controls"
                    hx-swap="innerHTML" { "+" }
            }
        }
    }
}
