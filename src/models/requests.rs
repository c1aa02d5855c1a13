use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{DealCategory, DealFilters, GeoPoint};

/// Errors raised while turning a listing request into filters
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid radius: {0} (must be a finite, non-negative number of kilometers)")]
    InvalidRadius(f64),

    #[error("Invalid location: lat={lat}, lng={lng}")]
    InvalidLocation { lat: f64, lng: f64 },

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Request to list deals for a viewer
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ListingRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: Option<DealCategory>,
    #[serde(alias = "free_only", rename = "freeOnly", default)]
    pub free_only: bool,
    #[serde(alias = "radius_km", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default)]
    pub lng: Option<f64>,
}

impl ListingRequest {
    /// Validate the request and build the filters it describes
    ///
    /// A radius of zero means "any distance". Negative or non-finite radii
    /// are rejected, as is a location with only one coordinate.
    pub fn to_filters(&self) -> Result<DealFilters, FilterError> {
        self.validate()?;

        let radius_km = match self.radius_km {
            Some(r) if !r.is_finite() || r < 0.0 => return Err(FilterError::InvalidRadius(r)),
            Some(r) if r == 0.0 => None,
            other => other,
        };

        let user_location = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some(GeoPoint::new(lat, lng)),
            (None, None) => None,
            (lat, lng) => {
                return Err(FilterError::InvalidLocation {
                    lat: lat.unwrap_or(f64::NAN),
                    lng: lng.unwrap_or(f64::NAN),
                })
            }
        };

        Ok(DealFilters {
            category: self.category,
            free_only: self.free_only,
            radius_km,
            user_location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tel_aviv_request() -> ListingRequest {
        ListingRequest {
            lat: Some(32.0853),
            lng: Some(34.7818),
            ..ListingRequest::default()
        }
    }

    #[test]
    fn test_to_filters_basic() {
        let mut req = tel_aviv_request();
        req.radius_km = Some(2.0);
        req.free_only = true;

        let filters = req.to_filters().unwrap();
        assert_eq!(filters.radius_km, Some(2.0));
        assert!(filters.free_only);
        assert_eq!(filters.user_location, Some(GeoPoint::new(32.0853, 34.7818)));
    }

    #[test]
    fn test_zero_radius_means_any_distance() {
        let mut req = tel_aviv_request();
        req.radius_km = Some(0.0);

        assert_eq!(req.to_filters().unwrap().radius_km, None);
    }

    #[test]
    fn test_negative_and_nan_radius_rejected() {
        let mut req = tel_aviv_request();
        req.radius_km = Some(-1.0);
        assert!(matches!(req.to_filters(), Err(FilterError::InvalidRadius(_))));

        req.radius_km = Some(f64::NAN);
        assert!(matches!(req.to_filters(), Err(FilterError::InvalidRadius(_))));

        req.radius_km = Some(f64::INFINITY);
        assert!(matches!(req.to_filters(), Err(FilterError::InvalidRadius(_))));
    }

    #[test]
    fn test_location_validation() {
        let mut req = tel_aviv_request();
        req.lat = Some(120.0);
        assert!(matches!(req.to_filters(), Err(FilterError::Validation(_))));

        let mut req = tel_aviv_request();
        req.lng = None;
        assert!(matches!(req.to_filters(), Err(FilterError::InvalidLocation { .. })));
    }

    #[test]
    fn test_request_wire_names() {
        let req: ListingRequest = serde_json::from_str(
            r#"{"query":"bakery","category":"food","freeOnly":true,"radiusKm":5,"lat":32.0853,"lng":34.7818}"#,
        )
        .unwrap();

        assert_eq!(req.category, Some(DealCategory::Food));
        assert_eq!(req.radius_km, Some(5.0));
        assert!(req.free_only);
    }
}
