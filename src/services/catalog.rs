use crate::models::{Deal, Merchant, User};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a deal catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),

    #[error("Invalid deal {id}: {reason}")]
    InvalidDeal { id: String, reason: String },
}

/// In-memory deal catalog
///
/// Loaded once from a JSON document of the form
/// `{ "users": [...], "merchants": [...], "deals": [...] }` and never mutated
/// afterwards. Deals without an embedded merchant get it attached from the
/// `merchants` section by `merchantId`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub users: Vec<User>,
    pub merchants: Vec<Merchant>,
    pub deals: Vec<Deal>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Loading catalog from: {}", path.display());

        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let json: Value = serde_json::from_str(raw)?;

        let users: Vec<User> = parse_section(&json, "users")?;
        let merchants: Vec<Merchant> = parse_section(&json, "merchants")?;

        let deal_docs = json
            .get("deals")
            .and_then(|d| d.as_array())
            .ok_or_else(|| CatalogError::InvalidFormat("Missing deals array".into()))?;

        let mut deals = Vec::with_capacity(deal_docs.len());
        for doc in deal_docs {
            let mut deal: Deal = serde_json::from_value(doc.clone())?;
            validate_deal(&deal)?;

            if deal.merchant.is_none() {
                match merchants.iter().find(|m| m.id == deal.merchant_id) {
                    Some(merchant) => deal.merchant = Some(merchant.clone()),
                    None => tracing::warn!(
                        "Deal {} references unknown merchant {}",
                        deal.id,
                        deal.merchant_id
                    ),
                }
            }

            deals.push(deal);
        }

        tracing::info!(
            "Catalog loaded: {} deals, {} merchants, {} users",
            deals.len(),
            merchants.len(),
            users.len()
        );

        Ok(Self {
            users,
            merchants,
            deals,
        })
    }

    /// Look up a deal by id
    pub fn deal(&self, id: &str) -> Option<&Deal> {
        self.deals.iter().find(|d| d.id == id)
    }

    pub fn merchant(&self, id: &str) -> Option<&Merchant> {
        self.merchants.iter().find(|m| m.id == id)
    }
}

/// Parse an optional top-level array; a missing key yields an empty list
fn parse_section<T>(json: &Value, key: &str) -> Result<Vec<T>, CatalogError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    match json.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| serde_json::from_value(item.clone()).map_err(CatalogError::from))
            .collect(),
        Some(_) => Err(CatalogError::InvalidFormat(format!("{} must be an array", key))),
    }
}

/// Reject deals with impossible quantities, prices or pickup windows
fn validate_deal(deal: &Deal) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidDeal {
        id: deal.id.clone(),
        reason,
    };

    if deal.qty_remaining > deal.qty_total {
        return Err(invalid(format!(
            "remaining quantity {} exceeds total {}",
            deal.qty_remaining, deal.qty_total
        )));
    }

    if !(deal.deal_price >= 0.0 && deal.was_price >= 0.0) {
        return Err(invalid("prices must be non-negative".to_string()));
    }

    if deal.deal_price > 0.0 && deal.was_price > 0.0 && deal.deal_price > deal.was_price {
        return Err(invalid(format!(
            "deal price {} exceeds original price {}",
            deal.deal_price, deal.was_price
        )));
    }

    if deal.pickup_end < deal.pickup_start {
        return Err(invalid("pickup window ends before it starts".to_string()));
    }

    Ok(())
}
