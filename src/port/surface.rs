// SPDX-License-Identifier: MPL-2.0
//! Overlay surface port.
//!
//! A surface is attached when a bulletin starts presenting and detached once
//! its exit animation has completed. At most one surface is attached by a
//! controller at any time.

use crate::bulletin::WindowLevel;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Opaque handle to an attached overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(u64);

impl SurfaceHandle {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Something able to host a bulletin above the application's views.
pub trait Surface {
    /// Attaches a new surface at the given window level.
    fn attach(&mut self, level: WindowLevel) -> SurfaceHandle;

    /// Detaches a previously attached surface. Unknown handles are ignored.
    fn detach(&mut self, handle: SurfaceHandle);
}

#[derive(Debug, Default)]
struct Layers {
    next: u64,
    attached: Vec<(SurfaceHandle, WindowLevel)>,
}

/// In-process surface stack.
///
/// Clones share the same stack, so a host can hand one clone to the
/// controller and keep another to inspect which levels are attached (the
/// demo uses it to decide whether its status bar is covered).
#[derive(Debug, Clone, Default)]
pub struct LayeredSurface {
    layers: Rc<RefCell<Layers>>,
}

impl LayeredSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Levels currently attached, in attach order.
    #[must_use]
    pub fn levels(&self) -> Vec<WindowLevel> {
        self.layers
            .borrow()
            .attached
            .iter()
            .map(|(_, level)| *level)
            .collect()
    }

    /// Highest attached level, if any.
    #[must_use]
    pub fn top_level(&self) -> Option<WindowLevel> {
        self.levels().into_iter().max()
    }

    /// Whether anything attached covers the given level.
    #[must_use]
    pub fn covers(&self, level: WindowLevel) -> bool {
        self.top_level().is_some_and(|top| top >= level)
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.layers.borrow().attached.len()
    }
}

impl Surface for LayeredSurface {
    fn attach(&mut self, level: WindowLevel) -> SurfaceHandle {
        let mut layers = self.layers.borrow_mut();
        let handle = SurfaceHandle(layers.next);
        layers.next += 1;
        layers.attached.push((handle, level));
        handle
    }

    fn detach(&mut self, handle: SurfaceHandle) {
        self.layers
            .borrow_mut()
            .attached
            .retain(|(attached, _)| *attached != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_stack() {
        let observer = LayeredSurface::new();
        let mut surface = observer.clone();

        let handle = surface.attach(WindowLevel::StatusBar);
        assert_eq!(observer.levels(), vec![WindowLevel::StatusBar]);
        assert!(observer.covers(WindowLevel::Default));
        assert!(!observer.covers(WindowLevel::Alert));

        surface.detach(handle);
        assert_eq!(observer.attached_count(), 0);
        assert!(observer.top_level().is_none());
    }

    #[test]
    fn detaching_unknown_handle_is_ignored() {
        let mut surface = LayeredSurface::new();
        surface.attach(WindowLevel::Alert);
        surface.detach(SurfaceHandle::new(42));
        assert_eq!(surface.attached_count(), 1);
    }
}
