// Core algorithm exports
pub mod distance;
pub mod eligibility;
pub mod filters;
pub mod listing;
pub mod stats;

pub use distance::{haversine_distance, distance_between, format_distance};
pub use eligibility::{claim_availability, ClaimAvailability};
pub use filters::{matches_filters, matches_search, matches_radius, is_listable};
pub use listing::{filter_deals, DealLister, ListingResult};
pub use stats::calculate_stats;
