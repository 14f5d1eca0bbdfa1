//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `split`: Dual-pane layout engine (divider drag, mode overrides)
//! - `viewer`: Document panes and their per-category views
//! - `inputs`: Reference inputs, upload, patent tokens, mode select
//! - `status_bar`: Session status line

pub mod inputs;
pub mod split;
pub mod status_bar;
pub mod viewer;
