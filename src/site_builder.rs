//! Static Site Export
//!
//! Renders every page in every served locale and writes:
//! - `{locale}{route}/index.html` and `{locale}{route}/index.md`
//! - `{locale}/index.html` (home index)
//! - `index.html` redirecting to the default locale, `404.html`, `sitemap.xml`
//!
//! Pages render in parallel (rayon); output is deterministic.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::catalog::{Catalog, Page};
use crate::content::route::Route;
use crate::pages::PageGenerator;
use crate::sitemap::render_sitemap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildSummary {
    pub pages: usize,
    pub locales: usize,
    pub files_written: usize,
}

/// One rendered output file, relative to the output directory.
struct OutputFile {
    path: PathBuf,
    body: String,
}

pub fn build_site(catalog: &Catalog, generator: &PageGenerator, out_dir: &Path) -> Result<BuildSummary> {
    let config = generator.config();
    let start = std::time::Instant::now();

    let jobs: Vec<(&Page, &str)> = catalog
        .iter()
        .flat_map(|page| config.locales.iter().map(move |locale| (page, locale.as_str())))
        .collect();

    let mut files: Vec<OutputFile> = jobs
        .par_iter()
        .map(|(page, locale)| -> Result<Vec<OutputFile>> {
            let dir = page_dir(locale, &page.route);
            let html = generator
                .render_html(page, locale)
                .with_context(|| format!("rendering {} ({})", page.route, locale))?;
            let markdown = generator
                .render_markdown(page, locale)
                .with_context(|| format!("rendering markdown {} ({})", page.route, locale))?;
            Ok(vec![
                OutputFile { path: dir.join("index.html"), body: html },
                OutputFile { path: dir.join("index.md"), body: markdown },
            ])
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    for locale in &config.locales {
        files.push(OutputFile {
            path: PathBuf::from(locale).join("index.html"),
            body: generator.render_home(catalog, locale)?,
        });
    }

    files.push(OutputFile {
        path: PathBuf::from("index.html"),
        body: redirect_page(&format!("/{}", config.default_locale)),
    });
    files.push(OutputFile {
        path: PathBuf::from("404.html"),
        body: generator.render_not_found(None, "/404")?,
    });
    files.push(OutputFile {
        path: PathBuf::from("sitemap.xml"),
        body: render_sitemap(catalog, config),
    });

    files.par_iter().try_for_each(|file| -> Result<()> {
        let target = out_dir.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&target, &file.body).with_context(|| format!("writing {}", target.display()))
    })?;

    let summary = BuildSummary {
        pages: catalog.len(),
        locales: config.locales.len(),
        files_written: files.len(),
    };
    tracing::info!(
        "Exported {} pages x {} locales ({} files) to {} in {:?}",
        summary.pages,
        summary.locales,
        summary.files_written,
        out_dir.display(),
        start.elapsed()
    );
    Ok(summary)
}

/// `en` + `/studies/theology` → `en/studies/theology`
fn page_dir(locale: &str, route: &Route) -> PathBuf {
    route
        .segments()
        .fold(PathBuf::from(locale), |dir, segment| dir.join(segment))
}

fn redirect_page(target: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<meta http-equiv=\"refresh\" content=\"0; url={0}\">\n<link rel=\"canonical\" href=\"{0}\">\n<title>Redirecting</title>\n</head>\n<body><a href=\"{0}\">Continue</a></body>\n</html>\n",
        target
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::loader::{parse_page, ContentFormat};

    #[test]
    fn test_page_dir() {
        assert_eq!(page_dir("en", &Route::parse("/studies/theology").unwrap()), PathBuf::from("en/studies/theology"));
        assert_eq!(page_dir("es", &Route::root()), PathBuf::from("es"));
    }

    #[test]
    fn test_build_writes_expected_tree() {
        let page = Page::new(
            Route::parse("/studies/theology").unwrap(),
            "studies/theology.yaml",
            parse_page(
                "metadata: { title: Studying Theology, description: D }\nhero: { title: Studying Theology }\n",
                ContentFormat::Yaml,
            )
            .unwrap(),
        );
        let catalog = Catalog::from_pages(vec![page]).unwrap();
        let generator = PageGenerator::new(SiteConfig {
            locales: vec!["en".to_string(), "es".to_string()],
            ..SiteConfig::default()
        });
        let out = tempfile::tempdir().unwrap();

        let summary = build_site(&catalog, &generator, out.path()).unwrap();
        assert_eq!(summary.pages, 1);
        assert_eq!(summary.locales, 2);
        // 2 files per page-locale, 2 homes, redirect, 404, sitemap
        assert_eq!(summary.files_written, 9);

        let html = fs::read_to_string(out.path().join("es/studies/theology/index.html")).unwrap();
        assert!(html.contains("Studying Theology"));
        assert!(out.path().join("en/studies/theology/index.md").exists());
        assert!(out.path().join("en/index.html").exists());
        assert!(out.path().join("sitemap.xml").exists());
        assert!(out.path().join("404.html").exists());

        let root = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(root.contains("url=/en"));
    }
}
