// Static export: every page in every locale, plus sitemap and 404
//
// Usage: cargo run --release --bin build_site
// CONTENT_DIR / OUTPUT_DIR / BASE_URL / LOCALES are read from the environment.

use std::time::Instant;
use theopedia::{build_site, load_catalog, validate_catalog, PageGenerator, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "theopedia=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env()?;
    let start = Instant::now();

    let catalog = load_catalog(&config.content_dir)?;
    let report = validate_catalog(&catalog);
    for issue in report.warnings() {
        tracing::warn!("{}: {}", issue.route, issue.message);
    }
    if report.has_errors() {
        for issue in report.errors() {
            tracing::error!("{}: {}", issue.route, issue.message);
        }
        anyhow::bail!(
            "content check failed with {} error(s); nothing was written",
            report.error_count()
        );
    }

    let out_dir = config.output_dir.clone();
    let generator = PageGenerator::new(config);
    let summary = build_site(&catalog, &generator, &out_dir)?;

    tracing::info!(
        "Built {} pages x {} locales ({} files) into {} in {:?}",
        summary.pages,
        summary.locales,
        summary.files_written,
        out_dir.display(),
        start.elapsed()
    );

    Ok(())
}
