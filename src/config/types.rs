//! Configuration type definitions
//!
//! This module contains all the struct and enum definitions for the
//! `ConfigOptions` record. Every field carries a serde default so that
//! partial documents from older installations are seeded with the current
//! defaults on deserialize.

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::defaults::*;
use super::locale::FALLBACK_APP_LANG;

// ============================================
// ENUMERATED FIELDS
// ============================================

/// File list ordering inside a directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sorting {
    #[default]
    Natural,
    Ascii,
}

/// Layout of the file manager pane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileManagerMode {
    #[default]
    Thin,
    Combined,
    Expanded,
}

/// What the file manager shows as an item's label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNameDisplay {
    Filename,
    #[default]
    Title,
    Heading,
    #[serde(rename = "title+heading")]
    TitleHeading,
}

/// Which file timestamp is displayed and sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataTime {
    #[default]
    Modtime,
    Creationtime,
}

/// How dark mode is switched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoDarkMode {
    #[default]
    Off,
    Schedule,
    System,
}

/// Editor autosave behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoSave {
    Off,
    Immediately,
    #[default]
    Delayed,
}

/// When internal links include the target's file name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkWithFilename {
    #[default]
    Always,
    #[serde(rename = "withID")]
    WithId,
    Never,
}

/// How internal links are treated on export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripLinks {
    #[default]
    Full,
    Unlink,
    No,
}

/// Where exported files are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportDir {
    #[default]
    Temp,
    Cwd,
}

/// Application color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Berlin,
    Frankfurt,
    Bielefeld,
    KarlMarxStadt,
    Bordeaux,
}

/// Citation rendering style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CiteStyle {
    #[default]
    InText,
    InTextSuffix,
    Regular,
}

/// Editor keymap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Default,
    Vim,
    Emacs,
}

/// Characters used for bold markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoldFormatting {
    #[default]
    #[serde(rename = "**")]
    Asterisks,
    #[serde(rename = "__")]
    Underscores,
}

/// Characters used for italic markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItalicFormatting {
    #[default]
    #[serde(rename = "_")]
    Underscore,
    #[serde(rename = "*")]
    Asterisk,
}

/// Sidebar tab remembered across restarts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SidebarTab {
    #[default]
    Toc,
    References,
    RelatedFiles,
    Attachments,
}

// serde default helpers shared by the bool-heavy groups below
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}

// ============================================
// WINDOW
// ============================================

/// Window chrome and restored UI state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    /// Use the OS-native window frame instead of the custom one
    #[serde(default = "default_false")]
    pub native_appearance: bool,
    #[serde(default = "default_false")]
    pub sidebar_visible: bool,
    #[serde(default)]
    pub current_sidebar_tab: SidebarTab,
    /// Most recent global search terms, newest first
    #[serde(default)]
    pub recent_global_searches: Vec<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            native_appearance: false,
            sidebar_visible: false,
            current_sidebar_tab: SidebarTab::Toc,
            recent_global_searches: Vec::new(),
        }
    }
}

// ============================================
// FILE MANAGER
// ============================================

/// File manager display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileManagerConfig {
    #[serde(default)]
    pub file_manager_mode: FileManagerMode,
    #[serde(default)]
    pub file_name_display: FileNameDisplay,
    /// Show modification time and word count under each file
    #[serde(default = "default_true")]
    pub file_meta: bool,
    #[serde(default)]
    pub file_meta_time: MetadataTime,
    #[serde(default)]
    pub sorting: Sorting,
    #[serde(default = "default_true")]
    pub sort_folders_first: bool,
    #[serde(default)]
    pub sorting_time: MetadataTime,
    #[serde(default = "default_false")]
    pub display_md_extensions: bool,
}

impl Default for FileManagerConfig {
    fn default() -> Self {
        FileManagerConfig {
            file_manager_mode: FileManagerMode::Thin,
            file_name_display: FileNameDisplay::Title,
            file_meta: true,
            file_meta_time: MetadataTime::Modtime,
            sorting: Sorting::Natural,
            sort_folders_first: true,
            sorting_time: MetadataTime::Modtime,
            display_md_extensions: false,
        }
    }
}

// ============================================
// EXPORT
// ============================================

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    #[serde(default)]
    pub dir: ExportDir,
    /// Remove #tags from the exported document
    #[serde(default = "default_false")]
    pub strip_tags: bool,
    #[serde(default)]
    pub strip_links: StripLinks,
    /// Path to a CSL JSON citation library, empty when unset
    #[serde(default)]
    pub csl_library: String,
    /// Path to a CSL citation style, empty when unset
    #[serde(default)]
    pub csl_style: String,
    #[serde(default = "default_true")]
    pub use_bundled_pandoc: bool,
    /// Exporter preselected in the single-file export dialog
    #[serde(default = "default_single_file_last_exporter")]
    pub single_file_last_exporter: String,
}

fn default_single_file_last_exporter() -> String {
    DEFAULT_SINGLE_FILE_LAST_EXPORTER.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            dir: ExportDir::Temp,
            strip_tags: false,
            strip_links: StripLinks::Full,
            csl_library: String::new(),
            csl_style: String::new(),
            use_bundled_pandoc: true,
            single_file_last_exporter: DEFAULT_SINGLE_FILE_LAST_EXPORTER.to_string(),
        }
    }
}

// ============================================
// ZETTELKASTEN
// ============================================

/// Zettelkasten linking rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZknConfig {
    /// Regular expression that recognizes note IDs in text
    #[serde(rename = "idRE", default = "default_zkn_id_re")]
    pub id_re: String,
    /// Pattern expanded to generate new note IDs
    #[serde(default = "default_zkn_id_gen")]
    pub id_gen: String,
    /// Match wiki-links against file names only, ignoring titles
    #[serde(default = "default_false")]
    pub link_filename_only: bool,
    #[serde(default)]
    pub link_with_filename: LinkWithFilename,
    /// Create the target file when following a link to a missing note
    #[serde(default = "default_false")]
    pub auto_create_linked_files: bool,
    /// Start a full-text search when following an internal link
    #[serde(default = "default_true")]
    pub auto_search: bool,
    /// Directory for auto-created files, empty = alongside the source note
    #[serde(default)]
    pub custom_directory: String,
}

fn default_zkn_id_re() -> String {
    DEFAULT_ZKN_ID_RE.to_string()
}
fn default_zkn_id_gen() -> String {
    DEFAULT_ZKN_ID_GEN.to_string()
}

impl Default for ZknConfig {
    fn default() -> Self {
        ZknConfig {
            id_re: DEFAULT_ZKN_ID_RE.to_string(),
            id_gen: DEFAULT_ZKN_ID_GEN.to_string(),
            link_filename_only: false,
            link_with_filename: LinkWithFilename::Always,
            auto_create_linked_files: false,
            auto_search: true,
            custom_directory: String::new(),
        }
    }
}

// ============================================
// EDITOR
// ============================================

/// One autocorrect substitution. Entries are applied in sequence order;
/// duplicates are allowed and later entries simply never fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoCorrectReplacement {
    pub key: String,
    pub value: String,
}

/// Magic quote pairs, encoded as "opening…closing"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicQuotes {
    #[serde(default = "default_magic_quotes_primary")]
    pub primary: String,
    #[serde(default = "default_magic_quotes_secondary")]
    pub secondary: String,
}

fn default_magic_quotes_primary() -> String {
    DEFAULT_MAGIC_QUOTES_PRIMARY.to_string()
}
fn default_magic_quotes_secondary() -> String {
    DEFAULT_MAGIC_QUOTES_SECONDARY.to_string()
}

impl Default for MagicQuotes {
    fn default() -> Self {
        MagicQuotes {
            primary: DEFAULT_MAGIC_QUOTES_PRIMARY.to_string(),
            secondary: DEFAULT_MAGIC_QUOTES_SECONDARY.to_string(),
        }
    }
}

/// Autocorrect rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoCorrectConfig {
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub magic_quotes: MagicQuotes,
    #[serde(default = "default_autocorrect_replacements")]
    pub replacements: Vec<AutoCorrectReplacement>,
}

fn default_autocorrect_replacements() -> Vec<AutoCorrectReplacement> {
    DEFAULT_AUTOCORRECT_REPLACEMENTS
        .iter()
        .map(|(key, value)| AutoCorrectReplacement {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}

impl Default for AutoCorrectConfig {
    fn default() -> Self {
        AutoCorrectConfig {
            active: true,
            magic_quotes: MagicQuotes::default(),
            replacements: default_autocorrect_replacements(),
        }
    }
}

/// Linter toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    #[serde(default = "default_true")]
    pub markdown: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig { markdown: true }
    }
}

/// Editor behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    #[serde(default)]
    pub auto_save: AutoSave,
    /// Accept an autocomplete suggestion with the space key
    #[serde(default = "default_false")]
    pub autocomplete_accept_space: bool,
    #[serde(default = "default_true")]
    pub auto_close_brackets: bool,
    #[serde(default = "default_true")]
    pub show_link_previews: bool,
    #[serde(default)]
    pub cite_style: CiteStyle,
    #[serde(default = "default_true")]
    pub enable_table_helper: bool,
    #[serde(default = "default_indent_unit")]
    pub indent_unit: u32,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Count characters instead of words in the document statistics
    #[serde(default = "default_false")]
    pub count_chars: bool,
    #[serde(default)]
    pub input_mode: InputMode,
    #[serde(default)]
    pub bold_formatting: BoldFormatting,
    #[serde(default)]
    pub italic_formatting: ItalicFormatting,
    #[serde(default = "default_readability_algorithm")]
    pub readability_algorithm: String,
    #[serde(default)]
    pub auto_correct: AutoCorrectConfig,
    #[serde(default)]
    pub lint: LintConfig,
}

fn default_indent_unit() -> u32 {
    DEFAULT_EDITOR_INDENT_UNIT
}
fn default_font_size() -> u32 {
    DEFAULT_EDITOR_FONT_SIZE
}
fn default_readability_algorithm() -> String {
    DEFAULT_READABILITY_ALGORITHM.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            auto_save: AutoSave::Delayed,
            autocomplete_accept_space: false,
            auto_close_brackets: true,
            show_link_previews: true,
            cite_style: CiteStyle::InText,
            enable_table_helper: true,
            indent_unit: DEFAULT_EDITOR_INDENT_UNIT,
            font_size: DEFAULT_EDITOR_FONT_SIZE,
            count_chars: false,
            input_mode: InputMode::Default,
            bold_formatting: BoldFormatting::Asterisks,
            italic_formatting: ItalicFormatting::Underscore,
            readability_algorithm: DEFAULT_READABILITY_ALGORITHM.to_string(),
            auto_correct: AutoCorrectConfig::default(),
            lint: LintConfig::default(),
        }
    }
}

// ============================================
// DISPLAY
// ============================================

/// Rendering toggles for the preview layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    #[serde(default)]
    pub theme: Theme,
    /// Maximum inline image size, percent of editor width/height
    #[serde(default = "default_image_width")]
    pub image_width: u32,
    #[serde(default = "default_image_height")]
    pub image_height: u32,
    #[serde(default = "default_true")]
    pub render_citations: bool,
    #[serde(default = "default_true")]
    pub render_iframes: bool,
    #[serde(default = "default_true")]
    pub render_images: bool,
    #[serde(default = "default_true")]
    pub render_links: bool,
    #[serde(default = "default_true")]
    pub render_math: bool,
    #[serde(default = "default_true")]
    pub render_tasks: bool,
    /// Hide the leading # characters of headings
    #[serde(default = "default_false")]
    pub render_h_tags: bool,
    /// Use the first heading as the file title when no frontmatter title exists
    #[serde(default = "default_false")]
    pub use_first_headings: bool,
}

fn default_image_width() -> u32 {
    DEFAULT_IMAGE_WIDTH
}
fn default_image_height() -> u32 {
    DEFAULT_IMAGE_HEIGHT
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            theme: Theme::Berlin,
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            render_citations: true,
            render_iframes: true,
            render_images: true,
            render_links: true,
            render_math: true,
            render_tasks: true,
            render_h_tags: false,
            use_first_headings: false,
        }
    }
}

// ============================================
// SYSTEM
// ============================================

/// System behavior flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    /// Remove a root path from the workspace when it disappears on disk
    #[serde(default = "default_false")]
    pub delete_on_fail: bool,
    /// Keep the app running after the last window closes
    #[serde(default = "default_false")]
    pub leave_app_running: bool,
    /// Reuse the current tab instead of opening files in new tabs
    #[serde(default = "default_true")]
    pub avoid_new_tabs: bool,
    #[serde(default = "default_iframe_whitelist")]
    pub iframe_whitelist: Vec<String>,
    #[serde(default = "default_true")]
    pub check_for_updates: bool,
}

fn default_iframe_whitelist() -> Vec<String> {
    DEFAULT_IFRAME_WHITELIST
        .iter()
        .map(|host| host.to_string())
        .collect()
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            delete_on_fail: false,
            leave_app_running: false,
            avoid_new_tabs: true,
            iframe_whitelist: default_iframe_whitelist(),
            check_for_updates: true,
        }
    }
}

// ============================================
// TOOLBAR
// ============================================

/// Toolbar button visibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarConfig {
    #[serde(default = "default_true")]
    pub show_open_preferences_button: bool,
    #[serde(default = "default_true")]
    pub show_new_file_button: bool,
    #[serde(default = "default_true")]
    pub show_previous_file_button: bool,
    #[serde(default = "default_true")]
    pub show_next_file_button: bool,
    #[serde(default = "default_true")]
    pub show_toggle_readability_button: bool,
    #[serde(default = "default_true")]
    pub show_markdown_comment_button: bool,
    #[serde(default = "default_true")]
    pub show_markdown_link_button: bool,
    #[serde(default = "default_true")]
    pub show_markdown_image_button: bool,
    #[serde(default = "default_true")]
    pub show_markdown_make_task_list_button: bool,
    #[serde(default = "default_true")]
    pub show_insert_table_button: bool,
    #[serde(default = "default_true")]
    pub show_insert_footnote_button: bool,
    #[serde(default = "default_true")]
    pub show_document_info_text: bool,
    #[serde(default = "default_true")]
    pub show_pomodoro_button: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        ToolbarConfig {
            show_open_preferences_button: true,
            show_new_file_button: true,
            show_previous_file_button: true,
            show_next_file_button: true,
            show_toggle_readability_button: true,
            show_markdown_comment_button: true,
            show_markdown_link_button: true,
            show_markdown_image_button: true,
            show_markdown_make_task_list_button: true,
            show_insert_table_button: true,
            show_insert_footnote_button: true,
            show_document_info_text: true,
            show_pomodoro_button: true,
        }
    }
}

// ============================================
// MAIN CONFIG
// ============================================

/// The full application configuration record.
///
/// Created by [`generate_defaults`](super::generate_defaults) at first run
/// and owned by the configuration store afterwards; this module never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOptions {
    /// Application version at generation time, compared on startup by the
    /// migration layer
    #[serde(default = "default_version")]
    pub version: String,
    /// Anonymous installation identifier, generated once and stable after
    #[serde(default = "default_uuid")]
    pub uuid: String,
    /// Workspace root paths restored on startup
    #[serde(default)]
    pub open_paths: Vec<String>,
    #[serde(default)]
    pub open_directory: Option<String>,
    /// Resolved UI locale tag, always valid or "en-US"
    #[serde(default = "default_app_lang")]
    pub app_lang: String,
    #[serde(default = "default_false")]
    pub dark_mode: bool,
    #[serde(default)]
    pub auto_dark_mode: AutoDarkMode,
    #[serde(default = "default_auto_dark_mode_start")]
    pub auto_dark_mode_start: String,
    #[serde(default = "default_auto_dark_mode_end")]
    pub auto_dark_mode_end: String,
    /// Dim everything but the current paragraph (distraction-free mode)
    #[serde(default = "default_true")]
    pub mute_lines: bool,
    #[serde(default = "default_attachment_extensions")]
    pub attachment_extensions: Vec<String>,
    #[serde(default = "default_new_file_name_pattern")]
    pub new_file_name_pattern: String,
    #[serde(default = "default_false")]
    pub new_file_dont_prompt: bool,
    #[serde(default = "default_selected_dicts")]
    pub selected_dicts: Vec<String>,
    #[serde(default = "default_false")]
    pub debug: bool,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub file_manager: FileManagerConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub zkn: ZknConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub toolbar: ToolbarConfig,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
fn default_uuid() -> String {
    Uuid::new_v4().to_string()
}
fn default_app_lang() -> String {
    FALLBACK_APP_LANG.to_string()
}
fn default_auto_dark_mode_start() -> String {
    DEFAULT_AUTO_DARK_MODE_START.to_string()
}
fn default_auto_dark_mode_end() -> String {
    DEFAULT_AUTO_DARK_MODE_END.to_string()
}
fn default_attachment_extensions() -> Vec<String> {
    DEFAULT_ATTACHMENT_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}
fn default_new_file_name_pattern() -> String {
    DEFAULT_NEW_FILE_NAME_PATTERN.to_string()
}
fn default_selected_dicts() -> Vec<String> {
    DEFAULT_SELECTED_DICTS
        .iter()
        .map(|dict| dict.to_string())
        .collect()
}

impl Default for ConfigOptions {
    fn default() -> Self {
        ConfigOptions {
            version: default_version(),
            uuid: default_uuid(),
            open_paths: Vec::new(),
            open_directory: None,
            app_lang: default_app_lang(),
            dark_mode: false,
            auto_dark_mode: AutoDarkMode::Off,
            auto_dark_mode_start: DEFAULT_AUTO_DARK_MODE_START.to_string(),
            auto_dark_mode_end: DEFAULT_AUTO_DARK_MODE_END.to_string(),
            mute_lines: true,
            attachment_extensions: default_attachment_extensions(),
            new_file_name_pattern: DEFAULT_NEW_FILE_NAME_PATTERN.to_string(),
            new_file_dont_prompt: false,
            selected_dicts: default_selected_dicts(),
            debug: false,
            window: WindowConfig::default(),
            file_manager: FileManagerConfig::default(),
            export: ExportConfig::default(),
            zkn: ZknConfig::default(),
            editor: EditorConfig::default(),
            display: DisplayConfig::default(),
            system: SystemConfig::default(),
            toolbar: ToolbarConfig::default(),
        }
    }
}

impl ConfigOptions {
    /// Check the free-form fields that can be semantically invalid even when
    /// they deserialized fine. Returns one message per problem; an empty
    /// vector means the record is usable as-is.
    pub fn validate(&self) -> Vec<String> {
        self.clone().heal()
    }

    /// Reset semantically invalid free-form fields to their defaults and
    /// return a description of each repair. The store calls this after
    /// loading so a hand-edited config degrades instead of failing.
    pub fn heal(&mut self) -> Vec<String> {
        let mut repairs = Vec::new();

        if Regex::new(&self.zkn.id_re).is_err() {
            repairs.push(format!(
                "zkn.idRE '{}' is not a valid regular expression",
                self.zkn.id_re
            ));
            self.zkn.id_re = DEFAULT_ZKN_ID_RE.to_string();
        }

        if !is_wall_clock(&self.auto_dark_mode_start) {
            repairs.push(format!(
                "autoDarkModeStart '{}' is not a HH:MM time",
                self.auto_dark_mode_start
            ));
            self.auto_dark_mode_start = DEFAULT_AUTO_DARK_MODE_START.to_string();
        }

        if !is_wall_clock(&self.auto_dark_mode_end) {
            repairs.push(format!(
                "autoDarkModeEnd '{}' is not a HH:MM time",
                self.auto_dark_mode_end
            ));
            self.auto_dark_mode_end = DEFAULT_AUTO_DARK_MODE_END.to_string();
        }

        repairs
    }
}

/// Accepts "HH:MM" with HH in 00..=23 and MM in 00..=59.
fn is_wall_clock(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };
    let valid = |part: &str, max: u32| {
        part.len() == 2
            && part.chars().all(|c| c.is_ascii_digit())
            && part.parse::<u32>().is_ok_and(|n| n <= max)
    };
    valid(hours, 23) && valid(minutes, 59)
}
