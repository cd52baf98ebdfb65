use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::core::ImageHandle;
use crate::foundation::error::{SlideloomError, SlideloomResult};
use crate::foundation::math::Fnv1a64;

/// Registration seam for the host's image store.
///
/// Invariant for all implementations: registering the same byte payload twice
/// yields the same handle (exactly one handle per distinct payload).
pub trait ImageRegistry {
    /// Register an image payload and return its handle.
    fn register(&mut self, bytes: &[u8]) -> SlideloomResult<ImageHandle>;
}

#[derive(Clone, Debug, Default)]
/// Content-addressed in-memory registry, the reference host and test double.
///
/// Handles are derived from a stable hash of the payload, so re-registering
/// identical bytes is a no-op returning the existing handle.
pub struct InMemoryImageRegistry {
    images: HashMap<ImageHandle, Arc<Vec<u8>>>,
}

impl InMemoryImageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload bytes for `handle`, if registered.
    pub fn get(&self, handle: ImageHandle) -> Option<&[u8]> {
        self.images.get(&handle).map(|bytes| bytes.as_slice())
    }

    /// Number of distinct registered payloads.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageRegistry for InMemoryImageRegistry {
    fn register(&mut self, bytes: &[u8]) -> SlideloomResult<ImageHandle> {
        if bytes.is_empty() {
            return Err(SlideloomError::registration(
                "image payload must be non-empty",
            ));
        }

        let mut hasher = Fnv1a64::new_default();
        hasher.write_u64(bytes.len() as u64);
        hasher.write_bytes(bytes);
        let handle = ImageHandle(hasher.finish());

        self.images
            .entry(handle)
            .or_insert_with(|| Arc::new(bytes.to_vec()));
        Ok(handle)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/registry.rs"]
mod tests;
