//! Non-owning material handles.
//!
//! Primitives never own their material. They carry a [`MaterialId`], a
//! generational key into a [`MaterialTable`] owned by whoever builds the
//! scene, so a rebuilt table cannot be read through a stale handle.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a material stored in a [`MaterialTable`].
    pub struct MaterialId;
}

/// Arena of materials addressed by [`MaterialId`].
///
/// The material type is opaque to this crate.
#[derive(Debug, Clone)]
pub struct MaterialTable<M> {
    materials: SlotMap<MaterialId, M>,
}

impl<M> MaterialTable<M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            materials: SlotMap::with_key(),
        }
    }

    /// Store a material and return its handle.
    pub fn insert(&mut self, material: M) -> MaterialId {
        self.materials.insert(material)
    }

    /// Look up a material. Returns `None` for removed or foreign handles.
    pub fn get(&self, id: MaterialId) -> Option<&M> {
        self.materials.get(id)
    }

    /// Remove a material, invalidating its handle.
    pub fn remove(&mut self, id: MaterialId) -> Option<M> {
        self.materials.remove(id)
    }

    /// Number of stored materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the table holds no materials.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate over `(handle, material)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &M)> {
        self.materials.iter()
    }
}

impl<M> Default for MaterialTable<M> {
    fn default() -> Self {
        Self::new()
    }
}
