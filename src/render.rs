use crate::domain::labels::stays_label;
use crate::domain::Stay;
use crate::templates::components::{empty_results, skeleton_grid, stay_grid};
use maud::{html, Markup};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Reveal delay of the animated variant. Every card appears at once
/// when this much time has elapsed; the reveal is not staggered.
pub const REVEAL_DELAY_MS: u64 = 1700;

/// How the results region comes up on a page render. Selected by
/// configuration; both variants share one rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Cards render directly into the region.
    Plain,
    /// The region shows a loading skeleton first and schedules a single
    /// reveal of the whole card set after `REVEAL_DELAY_MS`.
    Animated,
}

impl FromStr for RenderMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(RenderMode::Plain),
            "animated" => Ok(RenderMode::Animated),
            _ => Err(()),
        }
    }
}

/// Cancellation for scheduled reveals.
///
/// Each render of the results region advances the generation and stamps
/// it into the pending reveal's URL. A reveal that fires with an older
/// generation has been superseded by a newer render and is dropped, so
/// the newest render always wins the region.
pub struct RevealGate(AtomicU64);

impl RevealGate {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Invalidates every outstanding reveal and returns the generation
    /// the next one should carry.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

/// The results region: count heading plus either the revealed cards or,
/// in animated mode, a skeleton that replaces itself with the cards
/// after the reveal delay.
pub fn results_region(
    results: &[&Stay],
    filtered: bool,
    mode: RenderMode,
    gate: &RevealGate,
) -> Markup {
    html! {
        section class="stays" {
            h2 id="stays-count" class="stays-count" { (stays_label(results.len())) }
            @match mode {
                RenderMode::Plain => {
                    (revealed_results(results, filtered))
                }
                RenderMode::Animated => {
                    div id="stays-pending"
                        hx-get=(format!("/stays/cards?gen={}", gate.advance()))
                        hx-trigger=(format!("load delay:{REVEAL_DELAY_MS}ms"))
                        hx-swap="outerHTML"
                    {
                        (skeleton_grid())
                    }
                }
            }
        }
    }
}

/// The revealed form of the region's contents: one card per stay in
/// input order, or the empty-state message when a filter matched
/// nothing. An empty *unfiltered* set (the fetch failed) stays blank.
pub fn revealed_results(results: &[&Stay], filtered: bool) -> Markup {
    if results.is_empty() && filtered {
        return empty_results();
    }
    stay_grid(results)
}
