//! Loading a service from a JSON configuration file
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use twcolor::{ColorService, FindOptions, ServiceConfig, TwColorError};

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_extra_family() {
    let file = write_config(r##"{ "colors": { "brand": { "500": "#ff5500", "700": "#aa3300" } } }"##);
    let config = ServiceConfig::load(file.path()).unwrap();
    let svc = ColorService::with_config(&config).unwrap();

    assert_eq!(svc.resolve("brand-500").unwrap().to_hex(), "#ff5500");
    assert_eq!(svc.resolve("brand-700/50").unwrap().alpha(), 0.5);
    assert!(svc.resolve("brand-600").is_none());
    assert!(svc.resolve("blue-500").is_some());
    assert_eq!(svc.find(&FindOptions::new().colors(["brand"])).len(), 2);
}

#[test]
fn test_extra_layer_replaces_family() {
    let file = write_config(r##"{ "colors": { "blue": { "500": "#000080" } } }"##);
    let config = ServiceConfig::load(file.path()).unwrap();
    let svc = ColorService::with_config(&config).unwrap();

    assert_eq!(svc.resolve("blue-500").unwrap().to_hex(), "#000080");
    assert!(svc.resolve("blue-400").is_none());
}

#[test]
fn test_only_configured_palette() {
    let file = write_config(r##"{ "builtin": false, "colors": { "ink": { "900": "#111111" } } }"##);
    let svc = ColorService::with_config(&ServiceConfig::load(file.path()).unwrap()).unwrap();

    assert!(svc.resolve("blue-500").is_none());
    assert_eq!(svc.find(&FindOptions::new()).len(), 1);
    // generic literals still resolve without a palette
    assert!(svc.resolve("white").is_some());
}

#[test]
fn test_configured_invert_defaults() {
    let file = write_config(r#"{ "invert": { "light": "slate-900", "dark": "slate-50" } }"#);
    let svc = ColorService::with_config(&ServiceConfig::load(file.path()).unwrap()).unwrap();

    assert_eq!(svc.invert("white", None), svc.resolve("slate-900"));
    assert_eq!(svc.invert("black", None), svc.resolve("slate-50"));
}

#[test]
fn test_invalid_tone_rejected() {
    let file = write_config(r##"{ "colors": { "brand": { "450": "#ff5500" } } }"##);
    let config = ServiceConfig::load(file.path()).unwrap();
    match ColorService::with_config(&config) {
        Err(TwColorError::InvalidTone(450)) => {}
        other => panic!("expected InvalidTone, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_reported() {
    let file = write_config("{ not json");
    assert!(matches!(
        ServiceConfig::load(file.path()),
        Err(TwColorError::Json(_))
    ));
}

#[test]
fn test_missing_file_is_reported() {
    assert!(matches!(
        ServiceConfig::load(Path::new("/definitely/not/here.json")),
        Err(TwColorError::Io(_))
    ));
}
