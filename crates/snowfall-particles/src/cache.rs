//! Flyweight cache: one shared `Descriptor` per distinct key

use crate::descriptor::{Descriptor, DescriptorKey, Shape};
use snowfall_core::{Result, Rgba, SnowfallError};
use std::collections::HashMap;
use std::sync::Arc;

/// Interns descriptors by `(shape, color, diameter)`. Entries are never evicted.
#[derive(Default)]
pub struct FlyweightCache {
    entries: HashMap<DescriptorKey, Arc<Descriptor>>,
}

impl FlyweightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared descriptor for these parameters, creating it on first request.
    ///
    /// Equal inputs always yield the same `Arc` (pointer-equal).
    pub fn get_or_create(
        &mut self,
        shape: Shape,
        color: Rgba,
        diameter: u32,
    ) -> Result<Arc<Descriptor>> {
        if diameter == 0 {
            return Err(SnowfallError::InvalidSize(diameter));
        }

        let key = DescriptorKey {
            shape,
            color,
            diameter,
        };
        let len = self.entries.len();
        let descriptor = self.entries.entry(key).or_insert_with(|| {
            tracing::debug!(%key, cached = len + 1, "new descriptor");
            Arc::new(Descriptor::new(key))
        });
        Ok(Arc::clone(descriptor))
    }

    pub fn get(&self, key: &DescriptorKey) -> Option<&Arc<Descriptor>> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &DescriptorKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct descriptors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
