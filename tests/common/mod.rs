#![allow(dead_code)]

use std::{
    fs,
    io::{Cursor, Write},
    path::{Path, PathBuf},
};

use opendartkit::{OpenDart, OpenDartConfig, OpenDartUrls};

pub fn fixture_path(relative: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

pub fn read_fixture(relative: impl AsRef<Path>) -> String {
    fs::read_to_string(fixture_path(relative)).expect("fixture file should be readable")
}

pub fn read_fixture_bytes(relative: impl AsRef<Path>) -> Vec<u8> {
    fs::read(fixture_path(relative)).expect("fixture file should be readable")
}

/// A fresh directory under the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("opendartkit-{}-{:016x}", name, fastrand::u64(..)));
    fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

/// Client pointed at `host` for both the API and the website, with its own
/// settings file and data directory.
pub fn opendart_at(host: &str, root: &Path) -> OpenDart {
    let config = OpenDartConfig::new("test-key", root.join("Data"))
        .with_settings_path(root.join("Config").join("opendart_config.json"))
        .with_base_urls(OpenDartUrls::with_host(host))
        .with_rate_limit(100);
    OpenDart::with_config(config).unwrap()
}

pub fn opendart(host: &str, name: &str) -> OpenDart {
    opendart_at(host, &temp_dir(name))
}

/// Builds an in-memory ZIP archive from `(name, contents)` entries.
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer
            .start_file(*name, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Client against the real service, keyed by `OPENDART_API_KEY`.
pub fn live(name: &str) -> OpenDart {
    let key = std::env::var("OPENDART_API_KEY").expect("OPENDART_API_KEY must be set for live tests");
    let root = temp_dir(name);
    let config = OpenDartConfig::new(key, root.join("Data"))
        .with_settings_path(root.join("Config").join("opendart_config.json"));
    OpenDart::with_config(config).unwrap()
}
