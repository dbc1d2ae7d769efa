//! # Core Course Logic
//!
//! The course outline model and everything that edits it.
//! It knows nothing about how the outline is displayed.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (snapshot)     │
//!                    │  • Action (edits)       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Snapshots only. │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │  Browser   │      │  Publish   │
//!     │  (replay)  │      │  (future)  │      │ (webhook)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: `CourseData`, `Section`, `Module`, `Overview`
//! - [`state`]: the `Store` holding the current snapshot
//! - [`action`]: the `Action` enum and `update()`
//! - [`reorder`]: drag-and-drop results applied to the outline
//! - [`templates`]: static seed data for new modules
//! - [`seed`]: first snapshot from an id or a schema document
//! - [`export`]: JSON serialization and file output
//! - [`notify`]: toasts and the notifier collaborator
//! - [`config`]: settings and their override hierarchy

pub mod action;
pub mod config;
pub mod export;
pub mod model;
pub mod notify;
pub mod reorder;
pub mod seed;
pub mod state;
pub mod templates;

pub use action::{Action, Effect, update};
pub use state::Store;
