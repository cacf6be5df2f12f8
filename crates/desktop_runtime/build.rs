use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SHELL_MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowGeometry {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    id: String,
    title: String,
    icon: String,
    #[serde(default)]
    desktop_label: Option<String>,
    show_on_desktop: bool,
    show_in_start_menu: bool,
    #[serde(default)]
    summary: String,
    geometry: WindowGeometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellManifest {
    schema_version: u32,
    home_title: String,
    windows: Vec<WindowManifest>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("shell.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: ShellManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if manifest.schema_version != SHELL_MANIFEST_SCHEMA_VERSION {
        panic!(
            "shell manifest schema mismatch in {}: expected {} found {}",
            path.display(),
            SHELL_MANIFEST_SCHEMA_VERSION,
            manifest.schema_version
        );
    }

    let mut seen = HashSet::new();
    for window in &manifest.windows {
        if window.id.trim().is_empty() {
            panic!("shell manifest {} has a window with an empty id", path.display());
        }
        if !seen.insert(window.id.as_str()) {
            panic!(
                "shell manifest {} declares window `{}` more than once",
                path.display(),
                window.id
            );
        }
        if window.geometry.w <= 0 || window.geometry.h <= 0 {
            panic!(
                "shell manifest {}: window `{}` needs a positive width and height",
                path.display(),
                window.id
            );
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize shell manifest");
    let generated = format!(
        "/// Build-time generated shell catalog JSON.\n\
pub const SHELL_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
