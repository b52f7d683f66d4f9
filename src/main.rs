use anyhow::{Context, Result};
use log::{debug, error, info};
use rug_quote::{
    Config, FileStore, PriceModel, QuoteSummary, constants::CONTACT_URL, export_price_sheet,
};

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    if let Err(e) = run() {
        error!("Error: {e}");
        for cause in e.chain().skip(1) {
            error!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    debug!("Configuration: {config:?}");

    let store = FileStore::in_dir(&config.store_dir);
    info!("Reading price overrides from {}", store.path().display());
    let mut model = PriceModel::initialize(&store);

    model.set_width(config.width);
    model.set_height(config.height);
    model.select_tier(&config.tier);

    info!("Available tiers:");
    for tier in model.tiers() {
        info!(
            "  {} ({}): ${} per cm²",
            tier.name,
            tier.id,
            model.format_number(tier.unit_price)
        );
    }

    println!("{}", QuoteSummary::from_model(&model));
    debug!("Contact: {CONTACT_URL}");

    if config.export {
        let path = export_price_sheet(&model, Some(&config.output_dir))
            .context("Failed to export price sheet")?;
        info!("Price sheet saved to: {}", path.display());
    }

    Ok(())
}
