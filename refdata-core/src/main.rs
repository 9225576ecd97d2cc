use anyhow::Result;
use log::info;
use refdata_core::args::CommonArgs;
use refdata_core::config::LoaderConfig;
use refdata_core::fs::PathManager;
use refdata_core::ReferenceData;

fn main() -> Result<()> {
    let args = CommonArgs::parse_args(std::env::args().collect());
    let env = env_logger::Env::default().default_filter_or(args.get_log_level());
    env_logger::Builder::from_env(env).init();
    info!("=== {} Starting ===", args.get_service_name());

    let path_manager = PathManager::from_args(&args);
    let config = LoaderConfig::load(&path_manager)?;
    let data = ReferenceData::load(&path_manager, &config)?;

    info!(
        "Reference data ready: {} bonds, {} swaps, {} futures",
        data.bonds.len(),
        data.swaps.len(),
        data.futures.len()
    );

    Ok(())
}
