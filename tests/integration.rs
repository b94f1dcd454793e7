// SPDX-License-Identifier: MPL-2.0
use simple_gallery::config::{self, Config, SortOrder};
use simple_gallery::directory_scanner::ImageList;
use simple_gallery::error::GalleryError;
use simple_gallery::gallery::{
    map_key, map_pointer, Backdrop, GalleryController, GalleryKey, KeyBindings, PointerTarget,
    RenderEffect,
};
use simple_gallery::i18n::fluent::I18n;
use simple_gallery::ui::surface::Surface;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_images(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"fake image data").expect("Failed to write image");
    }
}

fn open_gallery(dir: &Path) -> (GalleryController<ImageList>, Surface) {
    let images = ImageList::scan(dir, SortOrder::Alphabetical).expect("Failed to scan directory");
    let gallery = GalleryController::new(images).expect("Failed to open gallery");
    let mut surface = Surface::new(gallery.item_count());
    surface.apply(&gallery.initial_effects());
    (gallery, surface)
}

#[test]
fn test_browse_directory_with_keyboard_and_pointer() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_images(dir.path(), &["harbor.jpg", "meadow.png", "summit.webp", "notes.txt"]);

    let (mut gallery, mut surface) = open_gallery(dir.path());
    let bindings = KeyBindings::default();
    assert_eq!(gallery.item_count(), 3);
    assert_eq!(surface.title(), "harbor");

    // Left from the first image wraps to the last one.
    let command = map_key(GalleryKey::ArrowLeft, gallery.is_full_screen(), &bindings)
        .expect("ArrowLeft is bound");
    surface.apply(&gallery.execute(command).expect("Advance never fails"));
    assert_eq!(surface.title(), "summit");
    assert_eq!(surface.visible_items().collect::<Vec<_>>(), vec![2]);

    // Thumbnail click selects directly.
    let command = map_pointer(PointerTarget::Thumbnail(1));
    surface.apply(&gallery.execute(command).expect("Index is in range"));
    assert_eq!(surface.title(), "meadow");
    assert_eq!(surface.selected_thumbnails().collect::<Vec<_>>(), vec![1]);

    // Clicking the image enters full screen, Escape leaves it.
    let command = map_pointer(PointerTarget::MainImage);
    surface.apply(&gallery.execute(command).expect("Toggle never fails"));
    assert!(surface.is_full_screen_presentation());
    assert_eq!(surface.backdrop(), Backdrop::Black);

    let command = map_key(GalleryKey::Escape, gallery.is_full_screen(), &bindings)
        .expect("Escape is bound in full screen");
    surface.apply(&gallery.execute(command).expect("Toggle never fails"));
    assert!(!surface.is_full_screen_presentation());
    assert!(surface.is_chrome_visible());
    assert_eq!(gallery.current_index(), 1);
}

#[test]
fn test_select_index_emits_documented_effects() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_images(dir.path(), &["a.png", "b.png", "c.png"]);

    let (mut gallery, _surface) = open_gallery(dir.path());
    let effects = gallery.select_index(1).expect("Index is in range");

    assert_eq!(
        effects,
        vec![
            RenderEffect::HideItem(0),
            RenderEffect::ShowItem(1),
            RenderEffect::SetThumbnailSelected {
                index: 0,
                selected: false
            },
            RenderEffect::SetThumbnailSelected {
                index: 1,
                selected: true
            },
            RenderEffect::SetTitle("b".to_string()),
        ]
    );

    assert_eq!(
        gallery.select_index(3),
        Err(GalleryError::IndexOutOfRange {
            index: 3,
            item_count: 3
        })
    );
    assert_eq!(gallery.current_index(), 1);
}

#[test]
fn test_empty_directory_is_rejected() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_images(dir.path(), &["readme.md"]);

    let images = ImageList::scan(dir.path(), SortOrder::Alphabetical)
        .expect("Failed to scan directory");
    let result = GalleryController::new(images);

    assert!(matches!(
        result,
        Err(GalleryError::InvalidConfiguration { item_count: 0 })
    ));
}

#[test]
fn test_toggle_key_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    fs::write(&config_path, "[keys]\ntoggle_full_screen = \"g\"\n")
        .expect("Failed to write settings file");

    let config = config::load_from_path(&config_path).expect("Failed to load settings");
    let bindings = config.key_bindings();

    assert!(map_key(GalleryKey::Character('f'), false, &bindings).is_none());
    assert!(map_key(GalleryKey::Character('g'), false, &bindings).is_some());
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("open-folder-button"), "Ouvrir un dossier");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}
