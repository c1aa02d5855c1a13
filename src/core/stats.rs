use std::collections::HashSet;

use crate::models::{Deal, DealStats};

/// Calculate headline figures for a deal collection
///
/// Runs over the full collection as given (no visibility filtering):
/// deal count, donations (price zero), distinct merchants and the summed
/// difference between original and deal prices.
pub fn calculate_stats(deals: &[Deal]) -> DealStats {
    let merchants: HashSet<&str> = deals.iter().map(|d| d.merchant_id.as_str()).collect();

    DealStats {
        total_deals: deals.len(),
        free_deals: deals.iter().filter(|d| d.is_free()).count(),
        active_merchants: merchants.len(),
        total_savings: deals.iter().map(Deal::savings).sum(),
    }
}
