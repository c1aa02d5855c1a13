use chrono::{DateTime, Utc};

use crate::core::{filters::matches_filters, stats::calculate_stats};
use crate::models::{Deal, DealFilters, ListedDeal, ListingResponse};

/// Filter a collection of deals, keeping their original order
///
/// Returns the subsequence of `deals` that is listable and satisfies every
/// constraint in `filters` and `query`. The input is never reordered or
/// mutated, so filtering an already filtered result again is a no-op.
pub fn filter_deals<'a, I>(deals: I, filters: &DealFilters, query: &str) -> Vec<&'a Deal>
where
    I: IntoIterator<Item = &'a Deal>,
{
    deals
        .into_iter()
        .filter(|deal| matches_filters(deal, filters, query))
        .collect()
}

/// Result of a listing pass
#[derive(Debug)]
pub struct ListingResult {
    pub deals: Vec<ListedDeal>,
    pub total_deals: usize,
}

impl ListingResult {
    pub fn filtered_count(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

/// Listing orchestrator - runs the filter pipeline and annotates survivors
///
/// # Pipeline Stages
/// 1. Visibility (active, stock left)
/// 2. Category and free-only checks
/// 3. Free-text search
/// 4. Radius around the viewer
/// 5. Distance annotation and optional truncation
#[derive(Debug, Clone, Default)]
pub struct DealLister {
    max_results: Option<usize>,
}

impl DealLister {
    pub fn new(max_results: Option<usize>) -> Self {
        Self { max_results }
    }

    pub fn unlimited() -> Self {
        Self { max_results: None }
    }

    /// List the deals a viewer should see
    ///
    /// # Arguments
    /// * `deals` - The full deal collection
    /// * `filters` - Viewer constraints
    /// * `query` - Free-text search, may be empty
    ///
    /// # Returns
    /// ListingResult with matching deals in catalog order
    pub fn list(&self, deals: &[Deal], filters: &DealFilters, query: &str) -> ListingResult {
        let total_deals = deals.len();
        let limit = self.max_results.unwrap_or(usize::MAX);

        let listed: Vec<ListedDeal> = filter_deals(deals, filters, query)
            .into_iter()
            .take(limit)
            .map(|deal| ListedDeal {
                distance_km: filters
                    .user_location
                    .as_ref()
                    .map(|viewer| viewer.distance_to(&deal.location.point())),
                deal: deal.clone(),
            })
            .collect();

        tracing::debug!(
            "Listed {} of {} deals (category: {}, free only: {}, radius: {:?}, query: {:?})",
            listed.len(),
            total_deals,
            filters.category.map(|c| c.as_str()).unwrap_or("any"),
            filters.free_only,
            filters.radius_km,
            query
        );

        ListingResult {
            deals: listed,
            total_deals,
        }
    }

    /// Build the full listing response, including collection-wide stats
    pub fn respond(
        &self,
        deals: &[Deal],
        filters: &DealFilters,
        query: &str,
        now: DateTime<Utc>,
    ) -> ListingResponse {
        let result = self.list(deals, filters, query);

        ListingResponse {
            filtered_count: result.filtered_count(),
            total_deals: result.total_deals,
            active_filters: filters.active_count(),
            stats: calculate_stats(deals),
            deals: result.deals,
            generated_at: now,
        }
    }
}
