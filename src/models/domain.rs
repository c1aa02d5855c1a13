use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Pickup windows ending within this many minutes are flagged as expiring soon
pub const EXPIRING_SOON_MINUTES: i64 = 120;

/// Top-level deal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealCategory {
    Food,
    Retail,
    Services,
}

impl DealCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealCategory::Food => "food",
            DealCategory::Retail => "retail",
            DealCategory::Services => "services",
        }
    }
}

/// Why the merchant is offering the deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonTag {
    Surplus,
    NearExpiry,
    Overstock,
    LastSlot,
}

impl ReasonTag {
    /// Human readable label ("near expiry", "last slot", ...)
    pub fn label(&self) -> &'static str {
        match self {
            ReasonTag::Surplus => "surplus",
            ReasonTag::NearExpiry => "near expiry",
            ReasonTag::Overstock => "overstock",
            ReasonTag::LastSlot => "last slot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    Active,
    SoldOut,
    Expired,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Merchant,
    Ngo,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Cold,
    Ambient,
    Hot,
}

/// Marketplace user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub verified: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Business offering deals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Merchant {
    pub id: String,
    #[serde(rename = "ownerUserId")]
    pub owner_user_id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Bare latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another point in kilometers
    #[inline]
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        crate::core::distance::haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Pickup location of a deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Food safety declaration attached to food deals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSafetyChecklist {
    pub packaging: bool,
    #[serde(rename = "temperatureBand")]
    pub temperature_band: TemperatureBand,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(rename = "useByDate")]
    pub use_by_date: NaiveDate,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Time-boxed offer of goods or services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    #[serde(rename = "merchantId")]
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<Merchant>,
    pub title: String,
    pub description: String,
    #[serde(rename = "mainCategory")]
    pub category: DealCategory,
    #[serde(rename = "reasonTag")]
    pub reason_tag: ReasonTag,
    #[serde(rename = "wasPrice")]
    pub was_price: f64,
    #[serde(rename = "dealPrice")]
    pub deal_price: f64,
    #[serde(rename = "qtyTotal")]
    pub qty_total: u32,
    #[serde(rename = "qtyRemaining")]
    pub qty_remaining: u32,
    #[serde(rename = "pickupStart")]
    pub pickup_start: DateTime<Utc>,
    #[serde(rename = "pickupEnd")]
    pub pickup_end: DateTime<Utc>,
    #[serde(rename = "photoUrl", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub status: DealStatus,
    pub location: Location,
    #[serde(rename = "foodSafety", default, skip_serializing_if = "Option::is_none")]
    pub food_safety: Option<FoodSafetyChecklist>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "viewCount", default)]
    pub view_count: Option<u32>,
    #[serde(rename = "claimCount", default)]
    pub claim_count: Option<u32>,
}

impl Deal {
    /// Donations are deals priced at zero
    #[inline]
    pub fn is_free(&self) -> bool {
        self.deal_price == 0.0
    }

    /// Amount saved against the original price
    #[inline]
    pub fn savings(&self) -> f64 {
        self.was_price - self.deal_price
    }

    /// Only active deals with stock left are shown to viewers
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.status == DealStatus::Active && self.qty_remaining > 0
    }

    pub fn merchant_name(&self) -> Option<&str> {
        self.merchant.as_ref().map(|m| m.name.as_str())
    }

    /// Pickup window closes in less than two hours (or already closed)
    pub fn is_expiring_soon(&self, now: DateTime<Utc>) -> bool {
        self.pickup_end - now < Duration::minutes(EXPIRING_SOON_MINUTES)
    }

    pub fn is_pickup_open(&self, now: DateTime<Utc>) -> bool {
        self.pickup_end > now
    }

    pub fn format_price(&self) -> String {
        format_price(self.deal_price)
    }

    /// Pickup window as `HH:MM–HH:MM` (UTC)
    pub fn formatted_pickup_window(&self) -> String {
        format!(
            "{}–{}",
            self.pickup_start.format("%H:%M"),
            self.pickup_end.format("%H:%M")
        )
    }
}

/// Render a price in shekels, with zero shown as "Free"
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("₪{}", price)
    }
}

/// Viewer-selected listing constraints
///
/// Every field is optional; an unset field places no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealFilters {
    #[serde(default)]
    pub category: Option<DealCategory>,
    #[serde(rename = "freeOnly", default)]
    pub free_only: bool,
    #[serde(rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[serde(rename = "userLocation", default)]
    pub user_location: Option<GeoPoint>,
}

impl DealFilters {
    /// Filters with only a viewer location set
    pub fn at(location: GeoPoint) -> Self {
        Self {
            user_location: Some(location),
            ..Self::default()
        }
    }

    /// Number of viewer-chosen constraints in effect (location excluded)
    pub fn active_count(&self) -> usize {
        [
            self.category.is_some(),
            self.free_only,
            self.radius_km.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Drop every constraint but keep the viewer location
    pub fn cleared(&self) -> Self {
        Self {
            user_location: self.user_location,
            ..Self::default()
        }
    }

    /// Toggle a category: selecting the current one clears it
    pub fn toggle_category(&mut self, category: DealCategory) {
        self.category = if self.category == Some(category) { None } else { Some(category) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_deal(deal_price: f64, qty_remaining: u32, status: DealStatus) -> Deal {
        let start = Utc.with_ymd_and_hms(2024, 1, 20, 18, 0, 0).unwrap();
        Deal {
            id: "deal-1".to_string(),
            merchant_id: "merchant-1".to_string(),
            merchant: None,
            title: "Fresh Challah & Pastries".to_string(),
            description: "End-of-day pastries".to_string(),
            category: DealCategory::Food,
            reason_tag: ReasonTag::Surplus,
            was_price: 45.0,
            deal_price,
            qty_total: 8,
            qty_remaining,
            pickup_start: start,
            pickup_end: start + Duration::hours(2),
            photo_url: None,
            status,
            location: Location {
                lat: 32.0853,
                lng: 34.7818,
                address: "123 Ben Yehuda St, Tel Aviv".to_string(),
            },
            food_safety: None,
            created_at: start,
            view_count: None,
            claim_count: None,
        }
    }

    #[test]
    fn test_visibility() {
        assert!(create_test_deal(18.0, 5, DealStatus::Active).is_visible());
        assert!(!create_test_deal(18.0, 0, DealStatus::Active).is_visible());
        assert!(!create_test_deal(18.0, 5, DealStatus::Closed).is_visible());
    }

    #[test]
    fn test_price_helpers() {
        let deal = create_test_deal(18.0, 5, DealStatus::Active);
        assert_eq!(deal.savings(), 27.0);
        assert_eq!(deal.format_price(), "₪18");
        assert!(!deal.is_free());

        let free = create_test_deal(0.0, 5, DealStatus::Active);
        assert!(free.is_free());
        assert_eq!(free.format_price(), "Free");
        assert_eq!(format_price(12.5), "₪12.5");
        assert_eq!(format_price(9.99), "₪9.99");
    }

    #[test]
    fn test_expiring_soon() {
        let deal = create_test_deal(18.0, 5, DealStatus::Active);
        let early = Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 20, 19, 0, 0).unwrap();

        assert!(!deal.is_expiring_soon(early));
        assert!(deal.is_expiring_soon(late));
        assert!(deal.is_pickup_open(late));
        assert_eq!(deal.formatted_pickup_window(), "18:00–20:00");
    }

    #[test]
    fn test_deal_wire_names() {
        let json = r#"{
            "id": "deal-2",
            "merchantId": "merchant-2",
            "title": "Organic Vegetable Box",
            "description": "Mixed seasonal box",
            "mainCategory": "food",
            "reasonTag": "near-expiry",
            "wasPrice": 35,
            "dealPrice": 0,
            "qtyTotal": 12,
            "qtyRemaining": 8,
            "pickupStart": "2024-01-20T19:00:00Z",
            "pickupEnd": "2024-01-20T20:30:00Z",
            "status": "active",
            "location": { "lat": 32.0754, "lng": 34.7749, "address": "456 Dizengoff St" },
            "foodSafety": {
                "packaging": true,
                "temperatureBand": "cold",
                "allergens": [],
                "useByDate": "2024-01-22"
            },
            "createdAt": "2024-01-20T12:00:00Z"
        }"#;

        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.reason_tag, ReasonTag::NearExpiry);
        assert!(deal.is_free());
        assert_eq!(
            deal.food_safety.unwrap().temperature_band,
            TemperatureBand::Cold
        );
    }

    #[test]
    fn test_filters_active_count() {
        let mut filters = DealFilters::at(GeoPoint::new(32.0853, 34.7818));
        assert_eq!(filters.active_count(), 0);

        filters.free_only = true;
        filters.radius_km = Some(2.0);
        filters.toggle_category(DealCategory::Food);
        assert_eq!(filters.active_count(), 3);

        filters.toggle_category(DealCategory::Food);
        assert_eq!(filters.category, None);

        let cleared = filters.cleared();
        assert_eq!(cleared.active_count(), 0);
        assert!(cleared.user_location.is_some());
    }
}
