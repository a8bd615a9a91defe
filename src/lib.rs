//! Terminal rendition of the VoxelForge Studio one-page brochure.
//!
//! The interesting parts are the closed locale domain with its
//! schema-complete dictionaries ([`i18n`]), the section scroll resolver
//! ([`nav`]) and the virtual page that backs it ([`page`]). The
//! [`images`] module is the standalone batch WebP derivative pipeline
//! behind the `optimize-images` binary.

pub mod app;
pub mod contact;
pub mod event;
pub mod i18n;
pub mod images;
pub mod nav;
pub mod page;
pub mod site;
pub mod tui;
pub mod ui;
