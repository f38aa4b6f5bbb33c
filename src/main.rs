use anyhow::Context;
use clap::Parser;
use phonehunter::utils::{logger, validation::Validate};
use phonehunter::{CliConfig, HunterEngine, HunterError, LocalStorage, MetadataTable, SystemClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let metadata = match &config.metadata {
        Some(path) => {
            tracing::info!("📁 Loading metadata from: {}", path);
            MetadataTable::from_file(path)
        }
        None => MetadataTable::builtin(),
    };
    let metadata = metadata.unwrap_or_else(|e| exit_with(&e));

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let storage = LocalStorage::new(&config.output_dir);
    let engine = HunterEngine::new(storage, SystemClock, metadata).with_dry_run(config.dry_run);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = engine.run(&config.phone, &mut rng, &mut out) {
        // Flush what was printed before the failure, if anything.
        let _ = out.flush();
        exit_with(&e);
    }
    out.flush().context("failed to flush report to stdout")?;

    Ok(())
}

fn exit_with(e: &HunterError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
