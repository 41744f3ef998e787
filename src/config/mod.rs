//! Configuration module - application settings and user preferences
//!
//! This module provides functionality for:
//! - Generating the fully-populated default configuration at first run
//! - Resolving the host locale against installed translations
//! - Loading from and saving to ~/.notemark/config.json
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct and enum definitions (`ConfigOptions` etc.)
//! - `locale` - Locale tag parsing and best-match resolution
//! - `template` - Default configuration generation
//! - `loader` - File system loading and persistence

mod defaults;
mod loader;
mod locale;
mod template;
mod types;

// Re-export the generation and store surface
pub use loader::{config_path, load_config, save_config};
pub use template::{generate_defaults, generate_defaults_with};

// Re-export types that consumers (settings UI, persistence) work with
pub use locale::{Locale, FALLBACK_APP_LANG, PROVIDED_TRANSLATIONS};
pub use types::{
    AutoCorrectConfig, AutoCorrectReplacement, AutoDarkMode, AutoSave, BoldFormatting, CiteStyle,
    ConfigOptions, DisplayConfig, EditorConfig, ExportConfig, ExportDir, FileManagerConfig,
    FileManagerMode, FileNameDisplay, InputMode, ItalicFormatting, LintConfig, LinkWithFilename,
    MagicQuotes, MetadataTime, SidebarTab, Sorting, StripLinks, SystemConfig, Theme,
    ToolbarConfig, WindowConfig, ZknConfig,
};

// Additional exports for tests
#[cfg(test)]
pub use defaults::{
    DEFAULT_ATTACHMENT_EXTENSIONS, DEFAULT_AUTOCORRECT_REPLACEMENTS,
    DEFAULT_AUTO_DARK_MODE_END, DEFAULT_AUTO_DARK_MODE_START, DEFAULT_EDITOR_FONT_SIZE,
    DEFAULT_EDITOR_INDENT_UNIT, DEFAULT_NEW_FILE_NAME_PATTERN, DEFAULT_ZKN_ID_GEN,
    DEFAULT_ZKN_ID_RE,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
