// SPDX-License-Identifier: MPL-2.0
use art_space::config::{self, Config, GeneralConfig};
use art_space::domain::gallery::{Catalog, Direction, GalleryState};
use art_space::i18n::fluent::I18n;
use art_space::ui::gallery::current_caption;
use art_space::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_documented_config_format_parses() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[general]\nlanguage = \"fr\"\ntheme_mode = \"system\"\n",
    )
    .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    assert_eq!(loaded.general.theme_mode, ThemeMode::System);
}

#[test]
fn test_walking_the_gallery_shows_each_artwork_once() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let catalog = Catalog::classic();
    let mut state = GalleryState::for_catalog(&catalog);

    let mut titles = Vec::new();
    for _ in 0..catalog.len().get() {
        titles.push(current_caption(&i18n, &catalog, &state).title);
        state.apply(Direction::Next);
    }

    assert_eq!(
        titles,
        vec![
            "Mona Lisa",
            "The Starry Night",
            "Girl with a Pearl Earring",
            "The Birth of Venus",
        ]
    );
    assert_eq!(state.index(), 0);
}

#[test]
fn test_walking_backward_visits_catalog_in_reverse() {
    let catalog = Catalog::classic();
    let mut state = GalleryState::for_catalog(&catalog);

    let visited: Vec<usize> = (0..4).map(|_| state.apply(Direction::Previous)).collect();
    assert_eq!(visited, vec![3, 2, 1, 0]);
}
