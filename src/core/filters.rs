use crate::models::{Deal, DealCategory, DealFilters, GeoPoint};

/// Check if a deal matches a free-text search
///
/// Case-insensitive substring match against the title, description and
/// merchant name. An empty or whitespace-only query matches everything;
/// any other query is matched as typed, surrounding whitespace included.
#[inline]
pub fn matches_search(deal: &Deal, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    deal.title.to_lowercase().contains(&needle)
        || deal.description.to_lowercase().contains(&needle)
        || deal
            .merchant_name()
            .map(|name| name.to_lowercase().contains(&needle))
            .unwrap_or(false)
}

#[inline]
pub fn matches_category(deal: &Deal, category: Option<DealCategory>) -> bool {
    category.map_or(true, |c| deal.category == c)
}

#[inline]
pub fn matches_free_only(deal: &Deal, free_only: bool) -> bool {
    !free_only || deal.is_free()
}

/// Check if a deal lies within `radius_km` of the viewer
///
/// Skipped (always true) unless both a radius and a viewer location are known.
/// A zero or NaN radius counts as unset.
#[inline]
pub fn matches_radius(deal: &Deal, radius_km: Option<f64>, user_location: Option<&GeoPoint>) -> bool {
    match (radius_km, user_location) {
        (Some(radius), Some(viewer)) if radius != 0.0 && !radius.is_nan() => {
            super::distance::distance_between(viewer, &deal.location.point()) <= radius
        }
        _ => true,
    }
}

/// Active with stock left. Applied to every listing regardless of filters.
#[inline]
pub fn is_listable(deal: &Deal) -> bool {
    deal.is_visible()
}

/// Check a deal against every listing constraint in one pass
///
/// Cheap checks run first so the haversine only runs for survivors.
#[inline]
pub fn matches_filters(deal: &Deal, filters: &DealFilters, query: &str) -> bool {
    is_listable(deal)
        && matches_category(deal, filters.category)
        && matches_free_only(deal, filters.free_only)
        && matches_search(deal, query)
        && matches_radius(deal, filters.radius_km, filters.user_location.as_ref())
}
