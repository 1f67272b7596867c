use clap::Parser;
use cucumber::World as _;
use cucumber::event::ScenarioFinished;
use std::path::{Path, PathBuf};

mod config;
mod steps;
mod world;

use config::HarnessConfig;
use world::ShopWorld;

#[tokio::main]
async fn main() {
    let config = HarnessConfig::parse();
    init_logging(config.verbose);

    let features = resolve_features(&config.features);
    if !features.exists() {
        panic!("features directory not found: {}", features.display());
    }

    config.install();

    // One browser drives one scenario at a time; parallel scenarios would
    // fight over the debugging port and the cart.
    ShopWorld::cucumber()
        .max_concurrent_scenarios(1)
        .before(|_feature, _rule, scenario, world| {
            Box::pin(async move {
                tracing::info!("starting scenario: {}", scenario.name);
                world.start_session(HarnessConfig::global()).await;
            })
        })
        .after(|_feature, _rule, scenario, finished, world| {
            Box::pin(async move {
                let Some(world) = world else { return };

                let failed = matches!(
                    finished,
                    ScenarioFinished::StepFailed(..) | ScenarioFinished::BeforeHookFailed(..)
                );
                if failed {
                    world.capture_failure_screenshot(&scenario.name).await;
                } else {
                    tracing::info!("scenario passed: {}", scenario.name);
                }

                if let Some(session) = world.session.take() {
                    session.shutdown().await;
                }
            })
        })
        .run_and_exit(features)
        .await;
}

fn resolve_features(features: &Path) -> PathBuf {
    if features.is_absolute() {
        features.to_path_buf()
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(features)
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("cartwright_acceptance=debug,cartwright_core=debug,cartwright_browser=debug")
    } else {
        EnvFilter::new("cartwright_acceptance=info,cartwright_browser=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
