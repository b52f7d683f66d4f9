use crate::{
    dimension::Dimension,
    error::{QuoteError, Result},
    model::PriceModel,
};
use chrono::Local;
use csv::WriterBuilder;
use serde::Serialize;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PriceSheetRow<'a> {
    width: u32,
    height: u32,
    tier: &'a str,
    area: u32,
    unit_price: f64,
    total: f64,
}

/// Writes the price of every offered size for every tier to a timestamped CSV.
pub fn export_price_sheet(model: &PriceModel, output_dir: Option<&Path>) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("price_sheet_{timestamp}.csv");

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| QuoteError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| QuoteError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    let mut wtr = builder.from_writer(BufWriter::new(file));

    for width in Dimension::ALL {
        for height in Dimension::ALL {
            let area = width.cm() * height.cm();
            for tier in model.tiers() {
                wtr.serialize(PriceSheetRow {
                    width: width.cm(),
                    height: height.cm(),
                    tier: &tier.id,
                    area,
                    unit_price: tier.unit_price,
                    total: f64::from(area) * tier.unit_price,
                })?;
            }
        }
    }

    wtr.flush()?;
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{overrides::PriceOverrides, tier::DesignTier};
    use tempfile::TempDir;

    #[test]
    fn test_export_price_sheet_basic() {
        let temp_dir = TempDir::new().unwrap();
        let path = export_price_sheet(&PriceModel::default(), Some(temp_dir.path())).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("price_sheet_"));
        assert!(name.ends_with(".csv"));
        assert!(path.exists());
    }

    #[test]
    fn test_export_row_count_and_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = export_price_sheet(&PriceModel::default(), Some(temp_dir.path())).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Width,Height,Tier,Area,UnitPrice,Total");
        assert_eq!(lines.len(), 1 + Dimension::ALL.len() * Dimension::ALL.len() * 2);
        assert_eq!(lines[1], "60,60,intermedio,3600,15.0,54000.0");
        assert_eq!(lines[2], "60,60,dificil,3600,20.0,72000.0");
        assert!(lines.contains(&"90,90,intermedio,8100,15.0,121500.0"));
    }

    #[test]
    fn test_export_reflects_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let mut model = PriceModel::default();
        let mut overrides = PriceOverrides::new();
        overrides.insert("dificil", 22.5);
        model.apply_overrides(&overrides);

        let path = export_price_sheet(&model, Some(temp_dir.path())).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("60,60,dificil,3600,22.5,81000.0"));
    }

    #[test]
    fn test_export_no_tiers_writes_nothing_but_file() {
        let temp_dir = TempDir::new().unwrap();
        let model = PriceModel::with_tiers(Vec::<DesignTier>::new());
        let path = export_price_sheet(&model, Some(temp_dir.path())).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_export_creates_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("sheets").join("2026");
        let path = export_price_sheet(&PriceModel::default(), Some(&nested)).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
