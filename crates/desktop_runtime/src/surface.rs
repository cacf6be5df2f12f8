//! Registered window surfaces: display metadata, geometry, and stacking position.
//!
//! The registry is the in-memory stand-in for the on-screen window elements. Every logical
//! [`WindowId`] is validated once here and mapped to an opaque [`SurfaceHandle`]; the view
//! layer renders from these records and never feeds state back.

use thiserror::Error;

use crate::model::{SurfaceHandle, WindowId, WindowRect};

/// Static description of a surface, supplied at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceDescriptor {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub rect: WindowRect,
}

impl SurfaceDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: WindowId::new(id),
            title: title.into(),
            icon: String::new(),
            rect: WindowRect::default(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_rect(mut self, rect: WindowRect) -> Self {
        self.rect = rect;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceRecord {
    pub handle: SurfaceHandle,
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub rect: WindowRect,
    pub z_index: u32,
}

impl SurfaceRecord {
    /// Display title, falling back to the window id when the title is blank.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            self.id.as_str()
        } else {
            &self.title
        }
    }

    /// Icon reference, if the surface has one.
    pub fn icon_ref(&self) -> Option<&str> {
        (!self.icon.is_empty()).then_some(self.icon.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("window surface id must not be empty")]
    EmptyId,
    #[error("window surface `{0}` is already registered")]
    DuplicateId(WindowId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceRegistry {
    surfaces: Vec<SurfaceRecord>,
}

impl SurfaceRegistry {
    /// Builds a registry from descriptors, rejecting the first invalid one.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = SurfaceDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Registers a surface and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] for blank ids and ids that are already registered.
    pub fn register(&mut self, descriptor: SurfaceDescriptor) -> Result<SurfaceHandle, RegistryError> {
        if descriptor.id.as_str().trim().is_empty() {
            return Err(RegistryError::EmptyId);
        }
        if self.resolve(&descriptor.id).is_some() {
            return Err(RegistryError::DuplicateId(descriptor.id));
        }

        let handle = SurfaceHandle(self.surfaces.len() as u32);
        self.surfaces.push(SurfaceRecord {
            handle,
            id: descriptor.id,
            title: descriptor.title,
            icon: descriptor.icon,
            rect: descriptor.rect,
            z_index: 0,
        });
        Ok(handle)
    }

    pub fn resolve(&self, id: &WindowId) -> Option<SurfaceHandle> {
        self.surfaces
            .iter()
            .find(|surface| surface.id == *id)
            .map(|surface| surface.handle)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.resolve(id).is_some()
    }

    pub fn get(&self, handle: SurfaceHandle) -> Option<&SurfaceRecord> {
        self.surfaces.get(handle.0 as usize)
    }

    pub(crate) fn get_mut(&mut self, handle: SurfaceHandle) -> Option<&mut SurfaceRecord> {
        self.surfaces.get_mut(handle.0 as usize)
    }

    pub fn by_id(&self, id: &WindowId) -> Option<&SurfaceRecord> {
        self.resolve(id).and_then(|handle| self.get(handle))
    }

    pub(crate) fn by_id_mut(&mut self, id: &WindowId) -> Option<&mut SurfaceRecord> {
        let handle = self.resolve(id)?;
        self.get_mut(handle)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut SurfaceRecord> {
        self.surfaces.iter_mut()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.surfaces.len()
    }
}
