use super::*;
use std::collections::HashSet;
use std::fs;
use uuid::Uuid;

// ============================================
// Defaults generation
// ============================================

#[test]
fn test_generate_defaults_populates_every_group() {
    let config = generate_defaults_with(None, PROVIDED_TRANSLATIONS);
    assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(config.app_lang, FALLBACK_APP_LANG);
    assert!(config.open_paths.is_empty());
    assert_eq!(config.open_directory, None);
    assert!(config.mute_lines);
    assert!(!config.dark_mode);
    assert_eq!(config.new_file_name_pattern, DEFAULT_NEW_FILE_NAME_PATTERN);
    assert_eq!(config.zkn.id_re, DEFAULT_ZKN_ID_RE);
    assert_eq!(config.zkn.id_gen, DEFAULT_ZKN_ID_GEN);
    assert_eq!(config.editor.indent_unit, DEFAULT_EDITOR_INDENT_UNIT);
    assert_eq!(config.editor.font_size, DEFAULT_EDITOR_FONT_SIZE);
    assert_eq!(config.auto_dark_mode_start, DEFAULT_AUTO_DARK_MODE_START);
    assert_eq!(config.auto_dark_mode_end, DEFAULT_AUTO_DARK_MODE_END);
    assert!(config.toolbar.show_pomodoro_button);
}

#[test]
fn test_generate_defaults_resolves_exact_locale() {
    let config = generate_defaults_with(Some("de-DE"), PROVIDED_TRANSLATIONS);
    assert_eq!(config.app_lang, "de-DE");
}

#[test]
fn test_generate_defaults_resolves_posix_locale() {
    let config = generate_defaults_with(Some("de_DE.UTF-8"), PROVIDED_TRANSLATIONS);
    assert_eq!(config.app_lang, "de-DE");
}

#[test]
fn test_generate_defaults_language_only_locale() {
    let config = generate_defaults_with(Some("fr"), PROVIDED_TRANSLATIONS);
    assert_eq!(config.app_lang, "fr-FR");
}

#[test]
fn test_generate_defaults_unparseable_locale_falls_back() {
    for bad in ["C", "POSIX", "", "C.UTF-8", "1234"] {
        let config = generate_defaults_with(Some(bad), PROVIDED_TRANSLATIONS);
        assert_eq!(config.app_lang, FALLBACK_APP_LANG, "input: {:?}", bad);
    }
}

#[test]
fn test_generate_defaults_unknown_language_falls_back() {
    let config = generate_defaults_with(Some("xx-YY"), PROVIDED_TRANSLATIONS);
    assert_eq!(config.app_lang, FALLBACK_APP_LANG);
}

#[test]
fn test_generate_defaults_empty_translation_set_falls_back() {
    let config = generate_defaults_with(Some("de-DE"), &[]);
    assert_eq!(config.app_lang, FALLBACK_APP_LANG);
}

#[test]
fn test_uuid_is_valid_v4() {
    let config = generate_defaults_with(None, PROVIDED_TRANSLATIONS);
    let parsed = Uuid::parse_str(&config.uuid).expect("uuid should parse");
    assert_eq!(parsed.get_version_num(), 4);
}

#[test]
fn test_uuid_differs_between_invocations() {
    let a = generate_defaults_with(None, PROVIDED_TRANSLATIONS);
    let b = generate_defaults_with(None, PROVIDED_TRANSLATIONS);
    assert_ne!(a.uuid, b.uuid);
}

#[test]
fn test_generation_is_deterministic_except_uuid() {
    let a = generate_defaults_with(Some("sv-SE"), PROVIDED_TRANSLATIONS);
    let mut b = generate_defaults_with(Some("sv-SE"), PROVIDED_TRANSLATIONS);
    assert_ne!(a.uuid, b.uuid);
    b.uuid = a.uuid.clone();
    assert_eq!(a, b);
}

#[test]
fn test_attachment_extensions_have_no_duplicates() {
    let config = ConfigOptions::default();
    let unique: HashSet<&String> = config.attachment_extensions.iter().collect();
    assert_eq!(unique.len(), config.attachment_extensions.len());
}

#[test]
fn test_default_attachment_extensions_all_start_with_dot() {
    for ext in DEFAULT_ATTACHMENT_EXTENSIONS {
        assert!(ext.starts_with('.'), "extension without dot: {}", ext);
    }
}

#[test]
fn test_autocorrect_replacements_preserve_table_order() {
    let config = ConfigOptions::default();
    let replacements = &config.editor.auto_correct.replacements;
    assert_eq!(replacements.len(), DEFAULT_AUTOCORRECT_REPLACEMENTS.len());
    for (entry, (key, value)) in replacements.iter().zip(DEFAULT_AUTOCORRECT_REPLACEMENTS) {
        assert_eq!(entry.key, *key);
        assert_eq!(entry.value, *value);
    }
}

// ============================================
// Enumerated fields
// ============================================

#[test]
fn test_enum_defaults_serialize_to_documented_literals() {
    assert_eq!(serde_json::to_string(&Sorting::Natural).unwrap(), "\"natural\"");
    assert_eq!(serde_json::to_string(&Sorting::Ascii).unwrap(), "\"ascii\"");
    assert_eq!(
        serde_json::to_string(&FileManagerMode::Thin).unwrap(),
        "\"thin\""
    );
    assert_eq!(
        serde_json::to_string(&AutoDarkMode::Off).unwrap(),
        "\"off\""
    );
    assert_eq!(
        serde_json::to_string(&AutoSave::Delayed).unwrap(),
        "\"delayed\""
    );
    assert_eq!(serde_json::to_string(&ExportDir::Temp).unwrap(), "\"temp\"");
    assert_eq!(serde_json::to_string(&StripLinks::Full).unwrap(), "\"full\"");
    assert_eq!(serde_json::to_string(&Theme::Berlin).unwrap(), "\"berlin\"");
    assert_eq!(
        serde_json::to_string(&InputMode::Default).unwrap(),
        "\"default\""
    );
}

#[test]
fn test_multiword_enum_literals() {
    assert_eq!(
        serde_json::to_string(&Theme::KarlMarxStadt).unwrap(),
        "\"karl-marx-stadt\""
    );
    assert_eq!(
        serde_json::to_string(&FileNameDisplay::TitleHeading).unwrap(),
        "\"title+heading\""
    );
    assert_eq!(
        serde_json::to_string(&LinkWithFilename::WithId).unwrap(),
        "\"withID\""
    );
    assert_eq!(
        serde_json::to_string(&CiteStyle::InTextSuffix).unwrap(),
        "\"in-text-suffix\""
    );
    assert_eq!(
        serde_json::to_string(&SidebarTab::RelatedFiles).unwrap(),
        "\"relatedFiles\""
    );
}

#[test]
fn test_formatting_marker_literals() {
    assert_eq!(
        serde_json::to_string(&BoldFormatting::Asterisks).unwrap(),
        "\"**\""
    );
    assert_eq!(
        serde_json::to_string(&BoldFormatting::Underscores).unwrap(),
        "\"__\""
    );
    assert_eq!(
        serde_json::to_string(&ItalicFormatting::Underscore).unwrap(),
        "\"_\""
    );
    assert_eq!(
        serde_json::to_string(&ItalicFormatting::Asterisk).unwrap(),
        "\"*\""
    );
}

#[test]
fn test_enums_reject_values_outside_closed_set() {
    assert!(serde_json::from_str::<Sorting>("\"random\"").is_err());
    assert!(serde_json::from_str::<FileManagerMode>("\"wide\"").is_err());
    assert!(serde_json::from_str::<AutoDarkMode>("\"on\"").is_err());
    assert!(serde_json::from_str::<LinkWithFilename>("\"withid\"").is_err());
    assert!(serde_json::from_str::<Theme>("\"dark\"").is_err());
}

// ============================================
// Serialization shape
// ============================================

#[test]
fn test_config_serializes_with_camel_case_keys() {
    let config = ConfigOptions::default();
    let json = serde_json::to_string(&config).unwrap();

    for key in [
        "\"appLang\"",
        "\"darkMode\"",
        "\"autoDarkModeStart\"",
        "\"attachmentExtensions\"",
        "\"newFileNamePattern\"",
        "\"selectedDicts\"",
        "\"fileManagerMode\"",
        "\"sortFoldersFirst\"",
        "\"idRE\"",
        "\"idGen\"",
        "\"linkWithFilename\"",
        "\"magicQuotes\"",
        "\"autoSave\"",
        "\"renderHTags\"",
        "\"iframeWhitelist\"",
        "\"showPomodoroButton\"",
    ] {
        assert!(json.contains(key), "missing key {} in {}", key, json);
    }
    assert!(!json.contains("app_lang"));
    assert!(!json.contains("file_manager_mode"));
}

#[test]
fn test_config_roundtrip() {
    let mut config = generate_defaults_with(Some("ja-JP"), PROVIDED_TRANSLATIONS);
    config.dark_mode = true;
    config.editor.font_size = 20;
    config.file_manager.sorting = Sorting::Ascii;
    config.open_paths = vec!["/home/user/notes".to_string()];

    let json = serde_json::to_string(&config).unwrap();
    let restored: ConfigOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(config, restored);
}

#[test]
fn test_empty_document_is_seeded_with_defaults() {
    let config: ConfigOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(config.app_lang, FALLBACK_APP_LANG);
    assert_eq!(config.editor.font_size, DEFAULT_EDITOR_FONT_SIZE);
    assert_eq!(config.file_manager.sorting, Sorting::Natural);
    assert!(!config.attachment_extensions.is_empty());
    // Seeding a document without a uuid mints a fresh one
    assert_eq!(Uuid::parse_str(&config.uuid).unwrap().get_version_num(), 4);
}

#[test]
fn test_partial_document_keeps_stored_values() {
    let json = r#"{
        "darkMode": true,
        "appLang": "it-IT",
        "editor": { "fontSize": 18, "inputMode": "vim" },
        "fileManager": { "sorting": "ascii" }
    }"#;

    let config: ConfigOptions = serde_json::from_str(json).unwrap();
    assert!(config.dark_mode);
    assert_eq!(config.app_lang, "it-IT");
    assert_eq!(config.editor.font_size, 18);
    assert_eq!(config.editor.input_mode, InputMode::Vim);
    assert_eq!(config.file_manager.sorting, Sorting::Ascii);
    // Untouched siblings fall back to defaults
    assert_eq!(config.editor.indent_unit, DEFAULT_EDITOR_INDENT_UNIT);
    assert!(config.file_manager.sort_folders_first);
}

#[test]
fn test_stored_uuid_survives_deserialization() {
    let json = r#"{"uuid": "550e8400-e29b-41d4-a716-446655440000"}"#;
    let config: ConfigOptions = serde_json::from_str(json).unwrap();
    assert_eq!(config.uuid, "550e8400-e29b-41d4-a716-446655440000");
}

#[test]
fn test_replacement_order_survives_roundtrip() {
    let json = r#"{"editor": {"autoCorrect": {"replacements": [
        {"key": "-->", "value": "→"},
        {"key": "-->", "value": "⇒"}
    ]}}}"#;

    // Duplicate keys are allowed; order defines precedence.
    let config: ConfigOptions = serde_json::from_str(json).unwrap();
    let replacements = &config.editor.auto_correct.replacements;
    assert_eq!(replacements.len(), 2);
    assert_eq!(replacements[0].value, "→");
    assert_eq!(replacements[1].value, "⇒");
}

// ============================================
// Store
// ============================================

#[test]
fn test_load_config_missing_file_generates_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json"));

    assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    assert!(
        config.app_lang == FALLBACK_APP_LANG
            || PROVIDED_TRANSLATIONS.contains(&config.app_lang.as_str())
    );
    assert_eq!(Uuid::parse_str(&config.uuid).unwrap().get_version_num(), 4);
}

#[test]
fn test_load_config_corrupt_file_generates_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "not json at all {{{").unwrap();

    let config = load_config(&path);
    assert_eq!(config.editor.font_size, DEFAULT_EDITOR_FONT_SIZE);
    assert_eq!(Uuid::parse_str(&config.uuid).unwrap().get_version_num(), 4);
}

#[test]
fn test_load_config_seeds_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"darkMode": true}"#).unwrap();

    let config = load_config(&path);
    assert!(config.dark_mode);
    assert_eq!(config.zkn.id_re, DEFAULT_ZKN_ID_RE);
    assert!(!config.attachment_extensions.is_empty());
}

#[test]
fn test_load_config_repairs_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"zkn": {"idRE": "([unclosed"}, "autoDarkModeStart": "25:99"}"#,
    )
    .unwrap();

    let config = load_config(&path);
    assert_eq!(config.zkn.id_re, DEFAULT_ZKN_ID_RE);
    assert_eq!(config.auto_dark_mode_start, DEFAULT_AUTO_DARK_MODE_START);
}

#[test]
fn test_save_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut saved = generate_defaults_with(Some("pl-PL"), PROVIDED_TRANSLATIONS);
    saved.window.sidebar_visible = true;
    saved.window.recent_global_searches = vec!["zettelkasten".to_string()];
    save_config(&path, &saved).unwrap();

    let loaded = load_config(&path);
    assert_eq!(saved, loaded);
    // The uuid is stable across persistence, not regenerated
    assert_eq!(saved.uuid, loaded.uuid);
}

#[test]
fn test_save_config_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("dir").join("config.json");

    let config = ConfigOptions::default();
    save_config(&path, &config).unwrap();
    assert!(path.exists());
}

#[test]
fn test_config_path_ends_with_expected_file_name() {
    let path = config_path();
    assert!(path.ends_with("config.json") || path.ends_with("notemark-config.json"));
}
