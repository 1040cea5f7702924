//! Site Configuration
//!
//! Read from environment variables, with development defaults:
//! - `CONTENT_DIR`: directory of page data files (default `content`)
//! - `OUTPUT_DIR`: static export target (default `dist`)
//! - `BASE_URL`: absolute origin used for canonical URLs (default `http://localhost:3000`)
//! - `SITE_NAME`: appended to every `<title>` (default `Theopedia`)
//! - `DEFAULT_LOCALE`: locale used when none is given (default `en`)
//! - `LOCALES`: comma-separated list of served locales (default: the default locale)
//! - `PORT`: API server port (default `3000`)

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid locale code `{0}` (expected e.g. `en` or `pt-BR`)")]
    InvalidLocale(String),

    #[error("default locale `{default}` is not listed in LOCALES ({locales})")]
    DefaultLocaleNotServed { default: String, locales: String },

    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub site_name: String,
    pub default_locale: String,
    pub locales: Vec<String>,
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist"),
            base_url: "http://localhost:3000".to_string(),
            site_name: "Theopedia".to_string(),
            default_locale: "en".to_string(),
            locales: vec!["en".to_string()],
            port: 3000,
        }
    }
}

impl SiteConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let content_dir = lookup("CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.content_dir);

        let output_dir = lookup("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let base_url = lookup("BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let site_name = lookup("SITE_NAME").unwrap_or(defaults.site_name);

        let default_locale = lookup("DEFAULT_LOCALE").unwrap_or(defaults.default_locale);
        if !is_valid_locale_code(&default_locale) {
            return Err(ConfigError::InvalidLocale(default_locale));
        }

        let locales = match lookup("LOCALES") {
            Some(list) => {
                let mut locales = Vec::new();
                for code in list.split(',').map(str::trim).filter(|c| !c.is_empty()) {
                    if !is_valid_locale_code(code) {
                        return Err(ConfigError::InvalidLocale(code.to_string()));
                    }
                    if !locales.iter().any(|l| l == code) {
                        locales.push(code.to_string());
                    }
                }
                locales
            }
            None => vec![default_locale.clone()],
        };

        if !locales.contains(&default_locale) {
            return Err(ConfigError::DefaultLocaleNotServed {
                default: default_locale,
                locales: locales.join(","),
            });
        }

        let port = match lookup("PORT") {
            Some(p) => p.trim().parse().map_err(|_| ConfigError::InvalidPort(p))?,
            None => defaults.port,
        };

        Ok(Self {
            content_dir,
            output_dir,
            base_url,
            site_name,
            default_locale,
            locales,
            port,
        })
    }

    pub fn is_supported_locale(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    /// Pick the requested locale when served, otherwise the default.
    pub fn resolve_locale<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(locale) if self.is_supported_locale(locale) => locale,
            _ => &self.default_locale,
        }
    }
}

/// `xx`, `xxx`, or either followed by `-` and a 2-letter region / 4-letter script.
fn is_valid_locale_code(code: &str) -> bool {
    let mut parts = code.split('-');
    let language = parts.next().unwrap_or("");
    let language_ok = (2..=3).contains(&language.len())
        && language.chars().all(|c| c.is_ascii_lowercase());

    let rest_ok = match (parts.next(), parts.next()) {
        (None, _) => true,
        (Some(sub), None) => {
            (sub.len() == 2 && sub.chars().all(|c| c.is_ascii_uppercase()))
                || (sub.len() == 4 && sub.chars().all(|c| c.is_ascii_alphabetic()))
        }
        _ => false,
    };

    language_ok && rest_ok
}
