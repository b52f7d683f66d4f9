use crate::{
    constants::{CONTACT_HANDLE, ESTIMATE_DISCLAIMER},
    format::{format_currency, format_number},
    model::{PriceModel, Quote},
};
use std::fmt;

/// Text shown for a quote: the headline price and the calculation detail.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSummary {
    pub quote: Quote,
    pub headline: String,
    pub dimensions_line: String,
    pub area_line: String,
    pub tier_line: String,
}

impl QuoteSummary {
    pub fn from_model(model: &PriceModel) -> Self {
        let quote = model.compute_quote();
        let area = format_number(f64::from(quote.area));
        let tier_name = model
            .selected_tier()
            .map_or(model.selected_tier_id(), |t| t.name.as_str());

        Self {
            quote,
            headline: format_currency(quote.total_price),
            dimensions_line: format!(
                "Dimensiones: {} × {} cm",
                model.width().cm(),
                model.height().cm()
            ),
            area_line: format!("Área total: {area} cm²"),
            tier_line: format!(
                "Nivel {tier_name}: ${} × {area} cm²",
                format_number(quote.unit_price)
            ),
        }
    }
}

impl fmt::Display for QuoteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cotización: {}", self.headline)?;
        writeln!(f, "Detalle del cálculo:")?;
        writeln!(f, "  {}", self.dimensions_line)?;
        writeln!(f, "  {}", self.area_line)?;
        writeln!(f, "  {}", self.tier_line)?;
        writeln!(f)?;
        writeln!(f, "{ESTIMATE_DISCLAIMER}")?;
        write!(f, "{CONTACT_HANDLE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    #[test]
    fn test_summary_default_model() {
        let summary = QuoteSummary::from_model(&PriceModel::default());
        assert_eq!(summary.headline, "$\u{a0}121.500");
        assert_eq!(summary.dimensions_line, "Dimensiones: 90 × 90 cm");
        assert_eq!(summary.area_line, "Área total: 8.100 cm²");
        assert_eq!(summary.tier_line, "Nivel Intermedio: $15 × 8.100 cm²");
    }

    #[test]
    fn test_summary_unknown_tier() {
        let mut model = PriceModel::default();
        model.set_width(Dimension::new(120).unwrap());
        model.select_tier("simple");

        let summary = QuoteSummary::from_model(&model);
        assert_eq!(summary.headline, "$\u{a0}0");
        assert_eq!(summary.dimensions_line, "Dimensiones: 120 × 90 cm");
        assert_eq!(summary.tier_line, "Nivel simple: $0 × 10.800 cm²");
        assert_eq!(summary.quote.total_price, 0.0);
    }

    #[test]
    fn test_summary_display() {
        let text = QuoteSummary::from_model(&PriceModel::default()).to_string();
        assert!(text.starts_with("Cotización: $\u{a0}121.500\n"));
        assert!(text.contains("  Área total: 8.100 cm²\n"));
        assert!(text.ends_with(CONTACT_HANDLE));
    }
}
