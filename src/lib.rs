// SPDX-License-Identifier: MPL-2.0
//! `iced_bulletin` presents transient bulletins (banners, toasts, alerts,
//! HUDs, sheets) above an application's views.
//!
//! The headless core ([`bulletin`], [`presentation`], [`gesture`],
//! [`lifecycle`], [`port`]) decides which bulletin is on screen, animates it
//! in and out and interprets drags and taps. The [`ui`] module draws it with
//! an iced canvas, and [`app`] is a demo exercising every preset.

pub mod app;
pub mod bulletin;
pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod lifecycle;
pub mod port;
pub mod presentation;
pub mod ui;
