use serde::{Deserialize, Serialize};
use crate::models::domain::Deal;

/// A deal as shown in the listing, with its distance from the viewer when known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedDeal {
    #[serde(flatten)]
    pub deal: Deal,
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none", default)]
    pub distance_km: Option<f64>,
}

/// Aggregate figures over the whole (unfiltered) collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DealStats {
    #[serde(rename = "totalDeals")]
    pub total_deals: usize,
    #[serde(rename = "freeDeals")]
    pub free_deals: usize,
    #[serde(rename = "activeMerchants")]
    pub active_merchants: usize,
    #[serde(rename = "totalSavings")]
    pub total_savings: f64,
}

/// Response of the deal listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub deals: Vec<ListedDeal>,
    #[serde(rename = "filteredCount")]
    pub filtered_count: usize,
    #[serde(rename = "totalDeals")]
    pub total_deals: usize,
    #[serde(rename = "activeFilters")]
    pub active_filters: usize,
    pub stats: DealStats,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
