//! Host identity and the picker registry.
//!
//! Instead of scanning a view hierarchy for "the active picker", the relation
//! between a host surface and its attached picker is an explicit map owned by
//! whichever layer manages the hosts. A `HostId` is an opaque identity the
//! caller mints per host surface.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crossterm::event::KeyEvent;

use crate::picker::{ModalPicker, PickerResponse};

static NEXT_HOST_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of a host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(u64);

impl HostId {
    /// Mint a fresh host identity.
    pub fn next() -> Self {
        Self(NEXT_HOST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a caller-managed identity.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Map from host identity to the currently attached picker.
///
/// At most one picker is attached per host; showing another one silently
/// replaces (detaches) the previous instance without firing its callbacks.
#[derive(Default)]
pub struct PickerRegistry {
    active: HashMap<HostId, ModalPicker>,
}

impl PickerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `picker` to `host` and give it input focus.
    pub fn show(&mut self, host: HostId, mut picker: ModalPicker) {
        if let Some(mut previous) = self.active.remove(&host) {
            previous.close();
        }
        picker.attach();
        self.active.insert(host, picker);
    }

    /// The picker currently attached to `host`, if any.
    pub fn active(&self, host: HostId) -> Option<&ModalPicker> {
        self.active.get(&host)
    }

    pub fn active_mut(&mut self, host: HostId) -> Option<&mut ModalPicker> {
        self.active.get_mut(&host)
    }

    pub fn is_attached(&self, host: HostId) -> bool {
        self.active.contains_key(&host)
    }

    /// Detach the picker attached to `host` without firing callbacks.
    /// No-op when nothing is attached.
    pub fn close(&mut self, host: HostId) {
        if let Some(mut picker) = self.active.remove(&host) {
            picker.close();
        }
    }

    /// Commit the picker attached to `host`, as if its Done action ran.
    pub fn commit(&mut self, host: HostId) {
        if let Some(mut picker) = self.active.remove(&host) {
            picker.done();
        }
    }

    /// Cancel the picker attached to `host`, as if its Cancel action ran.
    pub fn cancel(&mut self, host: HostId) {
        if let Some(mut picker) = self.active.remove(&host) {
            picker.cancel();
        }
    }

    /// Route a key event to the picker attached to `host`, removing it on a
    /// terminal response.
    pub fn handle_key(&mut self, host: HostId, key: KeyEvent) -> PickerResponse {
        let Some(picker) = self.active.get_mut(&host) else {
            return PickerResponse::Ignored;
        };
        let response = picker.handle_key(key);
        if matches!(
            response,
            PickerResponse::Committed | PickerResponse::Cancelled
        ) {
            self.active.remove(&host);
        }
        response
    }
}
