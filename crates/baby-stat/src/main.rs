mod bootstrap;
mod report;

use anyhow::Result;
use clap::Parser;
use stat_core::settings::Settings;
use stat_runtime::data_manager::DataManager;

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Baby Stat v{} starting", env!("CARGO_PKG_VERSION"));

    let config = settings.normalizer_config();
    config.validate()?;
    tracing::info!(
        "Night window {}:00-{}:00, classify by {}",
        config.night_start_hour,
        config.night_end_hour,
        if config.use_midpoint_for_day_night {
            "midpoint"
        } else {
            "start"
        }
    );

    let input = bootstrap::resolve_input_file(settings.file.as_deref());
    tracing::info!("Analyzing {}", input.display());

    let mut manager = DataManager::new(config);
    let result = manager.get_data(&input, settings.start_date)?;

    print!("{}", report::render(result));
    Ok(())
}
