/// Key under which the price override map lives in the local store
pub const PRICE_OVERRIDES_KEY: &str = "carpetPrices";

/// File name of the on-disk local store
pub const STORE_FILE_NAME: &str = "local_storage.json";

/// Allowed rug sides, centimetres
pub const DIMENSION_OPTIONS_CM: [u32; 11] = [60, 70, 80, 90, 100, 120, 150, 180, 200, 250, 300];
pub const DEFAULT_DIMENSION_CM: u32 = 90;

pub const DEFAULT_TIER_ID: &str = "intermedio";

/// Display strings shown under the quote
pub const ESTIMATE_DISCLAIMER: &str = "El precio calculado es una estimación orientativa. \
El valor final puede variar según el diseño, nivel de detalle y materiales seleccionados, \
para una cotización más precisa enviar un mensaje por instagram.";
pub const CONTACT_HANDLE: &str = "@homespun.rugs";
pub const CONTACT_URL: &str = "https://www.instagram.com/homespun.rugs/";
