//! Build-time shell catalog: registered windows, desktop icons, start menu entries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    model::{DesktopState, WindowId, WindowRect},
    surface::{RegistryError, SurfaceDescriptor, SurfaceRegistry},
    window_manager::WindowManager,
};

include!(concat!(env!("OUT_DIR"), "/shell_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowManifest {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub desktop_label: Option<String>,
    pub show_on_desktop: bool,
    pub show_in_start_menu: bool,
    #[serde(default)]
    pub summary: String,
    pub geometry: WindowRect,
}

impl WindowManifest {
    /// Label under the desktop icon; defaults to the window title.
    pub fn icon_label(&self) -> &str {
        self.desktop_label.as_deref().unwrap_or(&self.title)
    }

    fn descriptor(&self) -> SurfaceDescriptor {
        SurfaceDescriptor::new(self.id.as_str(), self.title.clone())
            .with_icon(self.icon.clone())
            .with_rect(self.geometry)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShellCatalog {
    pub schema_version: u32,
    pub home_title: String,
    pub windows: Vec<WindowManifest>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("shell catalog is not valid JSON: {0}")]
    Parse(String),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Parses the catalog embedded at build time.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when the embedded payload does not match [`ShellCatalog`].
pub fn shell_catalog() -> Result<ShellCatalog, CatalogError> {
    parse_catalog(SHELL_CATALOG_JSON)
}

/// Parses a catalog payload in the embedded JSON format.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed payloads.
pub fn parse_catalog(json: &str) -> Result<ShellCatalog, CatalogError> {
    serde_json::from_str(json).map_err(|err| CatalogError::Parse(err.to_string()))
}

impl ShellCatalog {
    /// Registers one surface per catalog window, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Registry`] for blank or duplicate window ids.
    pub fn surface_registry(&self) -> Result<SurfaceRegistry, CatalogError> {
        Ok(SurfaceRegistry::from_descriptors(
            self.windows.iter().map(WindowManifest::descriptor),
        )?)
    }

    pub fn desktop_icons(&self) -> impl Iterator<Item = &WindowManifest> {
        self.windows.iter().filter(|window| window.show_on_desktop)
    }

    pub fn start_menu_items(&self) -> impl Iterator<Item = &WindowManifest> {
        self.windows.iter().filter(|window| window.show_in_start_menu)
    }
}

impl DesktopState {
    /// Builds the initial desktop with every catalog window registered and closed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Registry`] when the catalog's window ids cannot be registered.
    pub fn from_catalog(catalog: &ShellCatalog) -> Result<Self, CatalogError> {
        let surfaces = catalog.surface_registry()?;
        Ok(Self::new(WindowManager::new(
            surfaces,
            catalog.home_title.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_catalog_parses_and_registers() {
        let catalog = shell_catalog().expect("embedded catalog");
        assert_eq!(catalog.schema_version, 1);
        assert!(!catalog.home_title.is_empty());

        let state = DesktopState::from_catalog(&catalog).expect("desktop state");
        assert_eq!(state.manager.surfaces().len(), catalog.windows.len());
        assert_eq!(state.manager.home_title(), catalog.home_title);
        assert!(state.manager.store().iter().next().is_none());
        assert_eq!(state.active_window_id(), None);
    }

    #[test]
    fn desktop_and_start_menu_filters_follow_flags() {
        let catalog = parse_catalog(
            r#"{
                "schema_version": 1,
                "home_title": "Home",
                "windows": [
                    {"id": "about", "title": "About", "icon": "/a.png", "desktop_label": "Me",
                     "show_on_desktop": true, "show_in_start_menu": true,
                     "geometry": {"x": 1, "y": 2, "w": 300, "h": 200}},
                    {"id": "readme", "title": "Readme", "icon": "/r.png",
                     "show_on_desktop": false, "show_in_start_menu": true,
                     "geometry": {"x": 3, "y": 4, "w": 300, "h": 200}}
                ]
            }"#,
        )
        .expect("catalog");

        let icons: Vec<&str> = catalog.desktop_icons().map(WindowManifest::icon_label).collect();
        let entries: Vec<&str> = catalog
            .start_menu_items()
            .map(|window| window.id.as_str())
            .collect();
        assert_eq!(icons, vec!["Me"]);
        assert_eq!(entries, vec!["about", "readme"]);
        assert_eq!(catalog.windows[1].icon_label(), "Readme");

        let registry = catalog.surface_registry().expect("registry");
        let about = registry.by_id(&WindowId::from("about")).expect("about surface");
        assert_eq!(
            about.rect,
            WindowRect {
                x: 1,
                y: 2,
                w: 300,
                h: 200
            }
        );
    }

    #[test]
    fn duplicate_ids_are_rejected_at_registration() {
        let window = WindowManifest {
            id: WindowId::from("about"),
            title: "About".to_string(),
            icon: String::new(),
            desktop_label: None,
            show_on_desktop: true,
            show_in_start_menu: true,
            summary: String::new(),
            geometry: WindowRect::default(),
        };
        let catalog = ShellCatalog {
            schema_version: 1,
            home_title: "Home".to_string(),
            windows: vec![window.clone(), window],
        };

        assert_eq!(
            DesktopState::from_catalog(&catalog),
            Err(CatalogError::Registry(RegistryError::DuplicateId(
                WindowId::from("about")
            )))
        );
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        assert!(matches!(
            parse_catalog("{\"schema_version\": \"one\"}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
