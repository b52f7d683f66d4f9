/// Opaque reference to the sample picture of a tier. The crate never loads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A design complexity level and its price per cm².
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTier {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    pub image: ImageRef,
}

impl DesignTier {
    pub fn new(id: &str, name: &str, unit_price: f64, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            unit_price,
            image: ImageRef::new(image),
        }
    }
}

pub fn default_tiers() -> Vec<DesignTier> {
    vec![
        DesignTier::new("intermedio", "Intermedio", 15.0, "img/nike.jpg"),
        DesignTier::new("dificil", "Dificil", 20.0, "img/gengar.jpg"),
    ]
}
