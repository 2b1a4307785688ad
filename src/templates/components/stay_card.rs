use crate::domain::Stay;
use maud::{html, Markup};

pub fn stay_card(stay: &Stay) -> Markup {
    html! {
        article class="stay-card" {
            div class="stay-card-photo" {
                img src=(stay.photo) alt=(stay.title) loading="lazy";
            }
            div class="stay-card-body" {
                div class="stay-card-meta" {
                    @if stay.super_host {
                        span class="badge" { "SUPERHOST" }
                    }
                    span class="stay-card-kind" {
                        (stay.kind)
                        // beds segment drops out when the seed has none
                        @if let Some(beds) = stay.beds {
                            " · " (beds) " beds"
                        }
                    }
                    span class="stay-card-rating" { "★ " (stay.rating) }
                }
                p class="stay-card-title" { (stay.title) }
                p class="stay-card-city" { (stay.city) ", " (stay.country) }
                p class="stay-card-guests" { "Up to " (stay.max_guests) " guests" }
            }
        }
    }
}
