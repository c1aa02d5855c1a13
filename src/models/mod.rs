// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod session;

pub use domain::{
    Deal, DealCategory, DealFilters, DealStatus, FoodSafetyChecklist, GeoPoint, Location, Merchant,
    ReasonTag, TemperatureBand, User, UserRole,
};
pub use requests::{FilterError, ListingRequest};
pub use responses::{DealStats, ListedDeal, ListingResponse};
pub use session::Session;
