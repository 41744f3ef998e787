//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Auto dark mode schedule boundaries (24h wall-clock, "HH:MM")
pub const DEFAULT_AUTO_DARK_MODE_START: &str = "22:00";
pub const DEFAULT_AUTO_DARK_MODE_END: &str = "06:00";

/// Pattern for file names created from the Zettelkasten ID generator
pub const DEFAULT_NEW_FILE_NAME_PATTERN: &str = "%id.md";

/// Non-markdown file types shown in the attachment sidebar
pub const DEFAULT_ATTACHMENT_EXTENSIONS: &[&str] = &[
    ".pdf", ".odt", ".odp", ".ods", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".csv",
    ".png", ".jpg", ".jpeg", ".gif", ".tiff", ".svg",
];

/// Spellcheck dictionaries enabled out of the box
pub const DEFAULT_SELECTED_DICTS: &[&str] = &["en-US"];

/// Zettelkasten ID recognition pattern (14-digit timestamp IDs)
pub const DEFAULT_ZKN_ID_RE: &str = r"(\d{14})";
/// Zettelkasten ID generator pattern, expanded at file creation time
pub const DEFAULT_ZKN_ID_GEN: &str = "%Y%M%D%h%m%s";

/// Editor defaults
pub const DEFAULT_EDITOR_INDENT_UNIT: u32 = 4;
pub const DEFAULT_EDITOR_FONT_SIZE: u32 = 16;
pub const DEFAULT_READABILITY_ALGORITHM: &str = "dale-chall";

/// Magic quote pairs applied by autocorrect ("opening…closing")
pub const DEFAULT_MAGIC_QUOTES_PRIMARY: &str = "\u{201C}\u{2026}\u{201D}";
pub const DEFAULT_MAGIC_QUOTES_SECONDARY: &str = "\u{2018}\u{2026}\u{2019}";

/// Autocorrect replacement table. Order defines application precedence.
pub const DEFAULT_AUTOCORRECT_REPLACEMENTS: &[(&str, &str)] = &[
    ("-->", "→"),
    ("<--", "←"),
    ("<->", "↔"),
    ("!=", "≠"),
    ("<=", "≤"),
    (">=", "≥"),
    ("...", "…"),
    ("---", "—"),
    ("--", "–"),
    ("(c)", "©"),
    ("(tm)", "™"),
    ("(r)", "®"),
    ("1/2", "½"),
    ("1/4", "¼"),
    ("3/4", "¾"),
];

/// Preview rendering defaults
pub const DEFAULT_IMAGE_WIDTH: u32 = 100;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 100;

/// Hosts allowed to render as embedded iframes without prompting
pub const DEFAULT_IFRAME_WHITELIST: &[&str] = &["www.youtube.com", "player.vimeo.com"];

/// Exporter picked when none was used before
pub const DEFAULT_SINGLE_FILE_LAST_EXPORTER: &str = "html";
