//! DuoDoc UI Library
//!
//! This crate provides the DuoDoc user interface - a side-by-side
//! document comparison viewer for remote and locally uploaded files.
//!
//! # Architecture
//!
//! Each pane runs the same content pipeline independently: resolve the
//! reference through a fetch strategy, resolve the declared type to a
//! render category, decode structured payloads, and select a
//! presentation with graceful fallback. The dual-pane layout engine
//! sizes the panes from a draggable split ratio and a tri-state mode.
//!
//! # Modules
//!
//! - [`app`]: Root application component and viewer shell
//! - [`client`]: Fetch strategies and the upload client
//! - [`components`]: UI components (split layout, document panes, inputs)
//! - [`object_url`]: Object-URL allocation and release
//! - [`pipeline`]: Per-pane async load driver
//! - [`state`]: Global state management

pub mod app;
pub mod client;
pub mod components;
pub mod object_url;
pub mod pipeline;
pub mod state;

pub use app::App;
