use crate::tier::DesignTier;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Per-tier unit prices that replace the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceOverrides {
    prices: HashMap<String, f64>,
}

impl PriceOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the stored JSON object, keeping only usable prices.
    ///
    /// Anything other than a JSON object yields an empty map. Within the object,
    /// entries whose value is not a finite positive number are dropped, so the
    /// tier keeps its default price.
    pub fn parse(raw: &str) -> Self {
        let object: Map<String, Value> = match serde_json::from_str(raw) {
            Ok(Value::Object(object)) => object,
            Ok(other) => {
                warn!("Ignoring price overrides: expected a JSON object, got {other}");
                return Self::default();
            }
            Err(e) => {
                warn!("Ignoring malformed price overrides: {e}");
                return Self::default();
            }
        };

        let prices = object
            .into_iter()
            .filter_map(|(id, value)| match value.as_f64() {
                Some(price) if price.is_finite() && price > 0.0 => Some((id, price)),
                _ => {
                    debug!("Skipping override for '{id}': unusable value {value}");
                    None
                }
            })
            .collect();

        Self { prices }
    }

    pub fn insert(&mut self, id: impl Into<String>, price: f64) {
        self.prices.insert(id.into(), price);
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.prices.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Overwrites the unit price of every tier with a matching id.
    /// Returns the number of tiers changed.
    pub fn apply(&self, tiers: &mut [DesignTier]) -> usize {
        let mut applied = 0;
        for tier in tiers.iter_mut() {
            if let Some(price) = self.get(&tier.id) {
                debug!(
                    "Override for '{}': {} -> {}",
                    tier.id, tier.unit_price, price
                );
                tier.unit_price = price;
                applied += 1;
            }
        }
        applied
    }
}
