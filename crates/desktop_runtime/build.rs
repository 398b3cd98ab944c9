use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DefaultWindow {
    w: i32,
    h: i32,
    min_w: i32,
    min_h: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Supports {
    #[serde(default)]
    open_types: Vec<String>,
    #[serde(default)]
    mime: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    id: String,
    name: String,
    icon: String,
    #[serde(default)]
    singleton: bool,
    default_window: DefaultWindow,
    #[serde(default)]
    supports: Supports,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileAssociation {
    mime: String,
    default_app: String,
    #[serde(default)]
    open_with: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PinnedApps {
    #[serde(default)]
    pinned: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalogManifest {
    schema_version: u32,
    apps: Vec<AppEntry>,
    #[serde(default)]
    file_associations: Vec<FileAssociation>,
    #[serde(default)]
    start_menu: PinnedApps,
    #[serde(default)]
    taskbar: PinnedApps,
}

fn validate(manifest: &AppCatalogManifest, source: &str) {
    if manifest.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {source}: expected 1 found {}",
            manifest.schema_version
        );
    }

    let mut ids = BTreeSet::new();
    for app in &manifest.apps {
        if !ids.insert(app.id.as_str()) {
            panic!("duplicate app id `{}` in {source}", app.id);
        }
        let window = &app.default_window;
        if window.min_w <= 0 || window.min_h <= 0 {
            panic!("app `{}` in {source} has a non-positive minimum size", app.id);
        }
        if window.w < window.min_w || window.h < window.min_h {
            panic!(
                "app `{}` in {source} opens smaller than its minimum size",
                app.id
            );
        }
    }

    let known = |app_id: &str, context: &str| {
        if !ids.contains(app_id) {
            panic!("{context} in {source} references unknown app `{app_id}`");
        }
    };
    for association in &manifest.file_associations {
        known(&association.default_app, &format!("association for {}", association.mime));
        for app_id in &association.open_with {
            known(app_id, &format!("association for {}", association.mime));
        }
    }
    for app_id in &manifest.start_menu.pinned {
        known(app_id, "start menu pin");
    }
    for app_id in &manifest.taskbar.pinned {
        known(app_id, "taskbar pin");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("apps.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: AppCatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let json = serde_json::to_string_pretty(&manifest).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
