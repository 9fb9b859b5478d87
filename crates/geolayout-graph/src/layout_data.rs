//! Opaque per-node scratch payload owned by whichever layout last ran.

use std::any::Any;
use std::fmt;

/// Marker for values stored in a node's layout-data slot.
///
/// Layouts check the concrete type with [`downcast_ref`](dyn LayoutData::downcast_ref) and replace
/// payloads left behind by a different layout.
pub trait LayoutData: Any + fmt::Debug + Send + Sync {}

impl dyn LayoutData {
    pub fn is<T: LayoutData>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    pub fn downcast_ref<T: LayoutData>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}
