use crate::{
    constants::{DEFAULT_TIER_ID, PRICE_OVERRIDES_KEY},
    dimension::Dimension,
    format,
    overrides::PriceOverrides,
    storage::KeyValueStore,
    tier::{DesignTier, default_tiers},
};
use log::{debug, info, warn};

/// Price derived from the current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// cm²
    pub area: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Current quote selections plus the tier table they are priced against.
#[derive(Debug, Clone)]
pub struct PriceModel {
    tiers: Vec<DesignTier>,
    width: Dimension,
    height: Dimension,
    selected_tier_id: String,
}

impl Default for PriceModel {
    fn default() -> Self {
        Self::with_tiers(default_tiers())
    }
}

impl PriceModel {
    pub fn with_tiers(tiers: Vec<DesignTier>) -> Self {
        Self {
            tiers,
            width: Dimension::default(),
            height: Dimension::default(),
            selected_tier_id: DEFAULT_TIER_ID.to_string(),
        }
    }

    /// Builds the default tier table and merges any stored price overrides.
    ///
    /// Store errors and malformed data leave the defaults in place.
    pub fn initialize<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut model = Self::default();

        let raw = match store.get(PRICE_OVERRIDES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored price overrides");
                return model;
            }
            Err(e) => {
                warn!("Could not read price overrides, using defaults: {e}");
                return model;
            }
        };

        let applied = model.apply_overrides(&PriceOverrides::parse(&raw));
        if applied > 0 {
            info!("Applied {applied} stored price override(s)");
        }
        model
    }

    pub fn apply_overrides(&mut self, overrides: &PriceOverrides) -> usize {
        overrides.apply(&mut self.tiers)
    }

    pub fn tiers(&self) -> &[DesignTier] {
        &self.tiers
    }

    pub fn tier(&self, id: &str) -> Option<&DesignTier> {
        self.tiers.iter().find(|t| t.id == id)
    }

    pub fn width(&self) -> Dimension {
        self.width
    }

    pub fn height(&self) -> Dimension {
        self.height
    }

    pub fn selected_tier_id(&self) -> &str {
        &self.selected_tier_id
    }

    /// `None` when the selected id matches no tier.
    pub fn selected_tier(&self) -> Option<&DesignTier> {
        self.tier(&self.selected_tier_id)
    }

    pub fn set_width(&mut self, width: Dimension) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: Dimension) {
        self.height = height;
    }

    /// Any id is accepted; an unknown one prices the quote at zero.
    pub fn select_tier(&mut self, id: &str) {
        if self.tier(id).is_none() {
            debug!("Selected unknown tier '{id}', quote falls back to zero");
        }
        self.selected_tier_id = id.to_string();
    }

    pub fn compute_quote(&self) -> Quote {
        let area = self.width.cm() * self.height.cm();
        let unit_price = self.selected_tier().map_or(0.0, |t| t.unit_price);
        Quote {
            area,
            unit_price,
            total_price: f64::from(area) * unit_price,
        }
    }

    pub fn format_currency(&self, amount: f64) -> String {
        format::format_currency(amount)
    }

    pub fn format_number(&self, amount: f64) -> String {
        format::format_number(amount)
    }
}
