pub mod config;
pub mod constants;
pub mod dimension;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod overrides;
pub mod storage;
pub mod summary;
pub mod tier;

pub use config::Config;
pub use constants::{DEFAULT_TIER_ID, DIMENSION_OPTIONS_CM, PRICE_OVERRIDES_KEY};
pub use dimension::Dimension;
pub use error::{QuoteError, Result};
pub use export::export_price_sheet;
pub use format::{format_currency, format_number};
pub use model::{PriceModel, Quote};
pub use overrides::PriceOverrides;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use summary::QuoteSummary;
pub use tier::{DesignTier, ImageRef, default_tiers};
