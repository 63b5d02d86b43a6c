//! Retrieval and ranking over the catalog.
//!
//! Filter, score, stable-sort, truncate. Scoring is a pure function of
//! (item, intent) with no hidden state, and each item is scored exactly
//! once per turn.

use phoneguide_core::types::CatalogItem;

use crate::types::Intent;

/// Grace band above the stated budget ceiling, in INR. Keeps near-boundary
/// phones in play instead of returning an empty result set.
pub const BUDGET_GRACE_INR: u32 = 3000;

/// Maximum number of items in a ranked result.
pub const MAX_RESULTS: usize = 3;

/// Neutral midpoint used when an item has no score for a requested feature.
/// Absence of data must not rank an item below presence of poor data.
const NEUTRAL_SCORE: f64 = 7.0;

const CAMERA_WEIGHT: f64 = 1.5;
const BATTERY_WEIGHT: f64 = 1.3;
const PERFORMANCE_WEIGHT: f64 = 1.2;

/// Score a single item against an intent.
pub fn score_item(item: &CatalogItem, intent: &Intent) -> f64 {
    let mut score = 0.0;

    if let Some(budget_max) = intent.budget_max {
        // Full credit inside the budget, partial credit in the grace band.
        score += if item.price_inr <= budget_max {
            1.0
        } else {
            0.4
        };
    }

    if let Some(ref brands) = intent.brands {
        if brand_matches(item, brands) {
            score += 1.0;
        }
    }

    if let Some(ref features) = intent.features {
        let scores = &item.scores;
        if features.iter().any(|f| f == "camera") {
            score += scores.camera.unwrap_or(NEUTRAL_SCORE) / 10.0 * CAMERA_WEIGHT;
        }
        if features.iter().any(|f| f == "battery") {
            score += scores.battery.unwrap_or(NEUTRAL_SCORE) / 10.0 * BATTERY_WEIGHT;
        }
        if features.iter().any(|f| f == "performance") {
            score += scores.performance.unwrap_or(NEUTRAL_SCORE) / 10.0 * PERFORMANCE_WEIGHT;
        }
    }

    score
}

/// Filter and rank the catalog against an intent, returning at most
/// [`MAX_RESULTS`] items.
///
/// The sort is stable and descending, so equally scored items keep catalog
/// (insertion) order. Catalog order is the deterministic tiebreak.
pub fn rank(intent: &Intent, catalog: &[CatalogItem]) -> Vec<CatalogItem> {
    let mut candidates: Vec<&CatalogItem> = catalog.iter().collect();

    if let Some(budget_max) = intent.budget_max {
        candidates.retain(|item| item.price_inr <= budget_max + BUDGET_GRACE_INR);
    }

    if let Some(ref brands) = intent.brands {
        let matching: Vec<&CatalogItem> = candidates
            .iter()
            .copied()
            .filter(|item| brand_matches(item, brands))
            .collect();
        // A brand miss alone must not empty the result set; fall back to
        // the unfiltered candidates instead.
        if !matching.is_empty() {
            candidates = matching;
        }
    }

    let mut scored: Vec<(&CatalogItem, f64)> = candidates
        .into_iter()
        .map(|item| (item, score_item(item, intent)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(MAX_RESULTS)
        .map(|(item, _)| item.clone())
        .collect()
}

fn brand_matches(item: &CatalogItem, brands: &[String]) -> bool {
    brands.iter().any(|b| b.eq_ignore_ascii_case(&item.brand))
}

// =============================================================================
// Tests
// =============================================================================
