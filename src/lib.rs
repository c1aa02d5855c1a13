//! Surplus Deals - listing logic for the Surplus & Local marketplace
//!
//! This library filters surplus-goods deals for a viewer (search, category,
//! free-only, radius), summarises the catalog and decides claim availability.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{DealLister, ListingResult, filter_deals, calculate_stats, claim_availability, ClaimAvailability, distance::haversine_distance};
pub use models::{Deal, DealFilters, DealStats, GeoPoint, ListingRequest, ListingResponse, Session};
pub use services::{Catalog, CatalogError};
