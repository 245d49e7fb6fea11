//! People List Viewer (pplv)
//!
//! TUI application for browsing a static dataset of people: filter by
//! name substring and sex, sort by column, and keep an ordered selection.
//!
//! Architecture is Pure Core / Impure Shell: `model/` and `state/` are
//! pure data and transitions, `view/` owns the terminal and event loop,
//! with `config/`, `logging/`, and `source/` at the boundary.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
