//! Default configuration generation
//!
//! Produces a fully-populated, versioned `ConfigOptions` record. Pure apart
//! from three host facts: the environment locale, the compiled-in
//! application version, and a fresh random UUID.

use tracing::debug;

use super::locale;
use super::types::ConfigOptions;

/// Generate the default configuration for this installation.
///
/// `appLang` is resolved from the environment locale against the bundled
/// translations; everything else comes from the literal defaults. Locale
/// resolution cannot fail, so neither can this function.
pub fn generate_defaults() -> ConfigOptions {
    generate_defaults_with(
        locale::system_locale().as_deref(),
        locale::PROVIDED_TRANSLATIONS,
    )
}

/// Generate defaults for an explicit host locale and translation set.
///
/// Split out from [`generate_defaults`] so callers (and tests) can control
/// both environment-dependent inputs.
pub fn generate_defaults_with(host_locale: Option<&str>, installed: &[&str]) -> ConfigOptions {
    let config = ConfigOptions {
        app_lang: locale::resolve(host_locale, installed),
        ..ConfigOptions::default()
    };
    debug!(
        app_lang = %config.app_lang,
        version = %config.version,
        "Generated default configuration"
    );
    config
}
