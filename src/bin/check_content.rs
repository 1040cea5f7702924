// Content checker: prints every issue, exits 1 when any is an error
//
// Usage: cargo run --bin check_content [CONTENT_DIR]

use std::path::PathBuf;
use std::process::ExitCode;
use theopedia::checks::Severity;
use theopedia::{load_catalog, validate_catalog, SiteConfig};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "theopedia=warn".into()),
        )
        .init();

    let content_dir = match std::env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => SiteConfig::from_env()?.content_dir,
    };

    let catalog = load_catalog(&content_dir)?;
    let report = validate_catalog(&catalog);

    for issue in &report.issues {
        let label = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("{:<8} {}  {}", label, issue.route, issue.message);
    }

    println!(
        "\n{} pages checked: {} error(s), {} warning(s)",
        report.pages_checked,
        report.error_count(),
        report.warning_count()
    );

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
