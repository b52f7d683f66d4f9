use rug_quote::{
    Dimension, FileStore, MemoryStore, PRICE_OVERRIDES_KEY, PriceModel, QuoteSummary,
    export_price_sheet,
};
use tempfile::TempDir;

fn write_store(dir: &TempDir, content: &str) -> FileStore {
    let store = FileStore::in_dir(dir.path());
    std::fs::write(store.path(), content).unwrap();
    store
}

#[test]
fn test_override_from_file_store_changes_quote() {
    let temp_dir = TempDir::new().unwrap();
    let store = write_store(&temp_dir, r#"{"carpetPrices": "{\"dificil\": 25}"}"#);

    let mut model = PriceModel::initialize(&store);
    model.set_width(Dimension::new(60).unwrap());
    model.set_height(Dimension::new(60).unwrap());
    model.select_tier("dificil");
    assert_eq!(model.compute_quote().total_price, 90_000.0);

    model.select_tier("intermedio");
    assert_eq!(model.compute_quote().total_price, 54_000.0);
}

#[test]
fn test_malformed_file_store_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store = write_store(&temp_dir, "{\"carpetPrices\": ");

    let model = PriceModel::initialize(&store);
    let quote = model.compute_quote();
    assert_eq!(quote.area, 8_100);
    assert_eq!(quote.total_price, 121_500.0);
}

#[test]
fn test_missing_store_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let model = PriceModel::initialize(&FileStore::in_dir(temp_dir.path()));
    assert_eq!(model.tier("dificil").unwrap().unit_price, 20.0);
}

#[test]
fn test_summary_after_selection_changes() {
    let store = MemoryStore::new().with_entry(PRICE_OVERRIDES_KEY, r#"{"intermedio": 16}"#);
    let mut model = PriceModel::initialize(&store);

    model.set_width(Dimension::new(100).unwrap());
    model.set_height(Dimension::new(150).unwrap());
    let summary = QuoteSummary::from_model(&model);
    assert_eq!(summary.headline, "$\u{a0}240.000");
    assert_eq!(summary.tier_line, "Nivel Intermedio: $16 × 15.000 cm²");

    model.select_tier("premium");
    let summary = QuoteSummary::from_model(&model);
    assert_eq!(summary.headline, "$\u{a0}0");
    assert_eq!(summary.area_line, "Área total: 15.000 cm²");
}

#[test]
fn test_export_uses_merged_prices() {
    let store = MemoryStore::new().with_entry(PRICE_OVERRIDES_KEY, r#"{"intermedio": 10}"#);
    let model = PriceModel::initialize(&store);

    let temp_dir = TempDir::new().unwrap();
    let path = export_price_sheet(&model, Some(temp_dir.path())).unwrap();
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("300,300,intermedio,90000,10.0,900000.0"));
    assert!(content.contains("300,300,dificil,90000,20.0,1800000.0"));
}
