use super::*;
use std::fs;
use tempfile::TempDir;

fn plugin_dir(root: &Path) -> PathBuf {
    root.join("YMM").join("user").join("plugin")
}

#[test]
fn test_paths_derive_from_plugin_dir() {
    let tmp = TempDir::new().unwrap();
    let plugin = plugin_dir(tmp.path());
    let service = ConfigService::new(plugin.clone());

    assert_eq!(service.data_dir(), plugin.join("YMMResourcePackager"));
    assert_eq!(
        service.exclusion_file(),
        plugin.join("YMMResourcePackager").join("exclude.json")
    );
    assert_eq!(service.extraction_root(), service.data_dir());
    assert_eq!(
        service.host_executable(),
        tmp.path().join("YMM").join("YukkuriMovieMaker.exe")
    );
}

#[test]
fn test_malformed_settings_fall_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let plugin = plugin_dir(tmp.path());
    let data = plugin.join(PLUGIN_FOLDER_NAME);
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join(SETTINGS_FILE_NAME), "{ not json").unwrap();

    let service = ConfigService::new(plugin);
    assert_eq!(service.get_settings(), PackagerSettings::default());
}

#[test]
fn test_partial_settings_keep_defaults_for_missing_fields() {
    let tmp = TempDir::new().unwrap();
    let plugin = plugin_dir(tmp.path());
    let data = plugin.join(PLUGIN_FOLDER_NAME);
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join(SETTINGS_FILE_NAME),
        r#"{ "extraction_root": "/srv/unpacked" }"#,
    )
    .unwrap();

    let service = ConfigService::new(plugin);
    let settings = service.get_settings();
    assert_eq!(settings.descriptor_extension, "ymmp");
    assert_eq!(service.extraction_root(), PathBuf::from("/srv/unpacked"));
}

#[test]
fn test_save_settings_round_trips_through_disk() {
    let tmp = TempDir::new().unwrap();
    let plugin = plugin_dir(tmp.path());
    let service = ConfigService::new(plugin.clone());

    let mut settings = service.get_settings();
    settings.package_extension = "pkg".into();
    service.save_settings(settings.clone()).unwrap();

    let reloaded = ConfigService::new(plugin);
    assert_eq!(reloaded.get_settings(), settings);
}

#[test]
fn test_next_free_package_path_numbers_existing() {
    let tmp = TempDir::new().unwrap();
    let service = ConfigService::new(plugin_dir(tmp.path()));
    let descriptor = tmp.path().join("movie.ymmp");

    assert_eq!(
        service.next_free_package_path(&descriptor),
        tmp.path().join("movie.ymmpx")
    );

    fs::write(tmp.path().join("movie.ymmpx"), b"").unwrap();
    fs::write(tmp.path().join("movie_1.ymmpx"), b"").unwrap();
    assert_eq!(
        service.next_free_package_path(&descriptor),
        tmp.path().join("movie_2.ymmpx")
    );
}
