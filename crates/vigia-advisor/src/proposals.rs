//! Driver-to-proposal synthesis.

use vigia_core::{Priority, Proposal};

use crate::rounding::round_half_up;

/// Delivery estimate attached to every proposal.
pub const PROPOSAL_ETA: &str = "2-4 semanas";

/// Technical-details placeholder attached to every proposal.
pub const PROPOSAL_TECH_DETAILS: &str = "Análisis técnico preliminar";

/// Impact shown when the computed impact rounds to zero.
const IMPACT_FLOOR: i64 = 10;

/// Two-threshold priority: `> 0.5` is `Alta`, `> 0.25` is `Media`.
#[must_use]
pub fn priority_for(score: f64) -> Priority {
    if score > 0.5 {
        Priority::Alta
    } else if score > 0.25 {
        Priority::Media
    } else {
        Priority::Baja
    }
}

/// Build the proposal for the driver at zero-based `index`.
///
/// The title is the text before the first colon (the whole text when there is
/// none), trimmed, or `Driver {index + 1}` if that is empty. Expected impact is
/// `score * 100 / (index + 1)` rounded, replaced by 10 when it rounds to 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_proposal(driver: &str, index: usize, score: f64) -> Proposal {
    let position = index + 1;

    let title = driver
        .split(':')
        .next()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map_or_else(|| format!("Driver {position}"), str::to_string);

    let impact = round_half_up(score * 100.0 / position as f64);
    let expected_impact_pct = if impact == 0 { IMPACT_FLOOR } else { impact };

    Proposal {
        id: format!("p{index}"),
        title,
        description: driver.to_string(),
        priority: priority_for(score),
        expected_impact_pct,
        eta: PROPOSAL_ETA.to_string(),
        cost: format!("${}", position * 1000),
        tech_details: PROPOSAL_TECH_DETAILS.to_string(),
    }
}

/// One proposal per driver, for at most the first `max` drivers.
#[must_use]
pub fn synthesize(drivers: &[String], score: f64, max: usize) -> Vec<Proposal> {
    drivers
        .iter()
        .take(max)
        .enumerate()
        .map(|(index, driver)| build_proposal(driver, index, score))
        .collect()
}
