use crate::domain::Stay;
use crate::templates::components::stay_card;
use maud::{html, Markup};

pub fn stay_grid(results: &[&Stay]) -> Markup {
    html! {
        div id="stays-grid" class="stays-grid" {
            @for stay in results {
                (stay_card(stay))
            }
        }
    }
}

/// Placeholder cards shown while the animated variant waits out the
/// reveal delay.
pub fn skeleton_grid() -> Markup {
    html! {
        div class="stays-grid" {
            @for _ in 0..6 {
                div class="skeleton-card" {
                    div class="skeleton-photo" {}
                    div class="skeleton-line" {}
                    div class="skeleton-line skeleton-line-short" {}
                }
            }
        }
    }
}

pub fn empty_results() -> Markup {
    html! {
        div id="stays-grid" class="stays-empty" {
            p { "No stays match your search." }
        }
    }
}
