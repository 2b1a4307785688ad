use crate::domain::Stay;
use crate::render::{results_region, RenderMode, RevealGate};
use crate::search::SearchModal;
use crate::templates::components::{search_bar, search_modal};
use crate::templates::page_layout;
use maud::{html, Markup};

pub fn stays_page(
    search: &SearchModal,
    results: &[&Stay],
    mode: RenderMode,
    gate: &RevealGate,
) -> Markup {
    page_layout(
        "staylist",
        html! {
            main class="container" {
                div class="toolbar" {
                    (search_bar(&search.applied))
                }
                (results_region(results, !search.applied.is_identity(), mode, gate))
            }
            div id="modal-mount" {
                @if search.is_open() {
                    (search_modal(&search.pending))
                }
            }
        },
    )
}
