// SPDX-License-Identifier: MPL-2.0
//! Routing of host modals while a bulletin is on screen.
//!
//! A modal presented by the host lands on the host's own views, underneath
//! the bulletin surface and its backdrop. Alerts requested while a bulletin
//! below alert level is on screen are moved onto the overlay surface instead.

use crate::port::SurfaceHandle;

/// Kind of modal the host is about to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Alert,
    Sheet,
    Other,
}

/// Where a modal should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRoute {
    /// On the host's own views.
    Host,
    /// On the bulletin's overlay surface.
    Overlay(SurfaceHandle),
}
