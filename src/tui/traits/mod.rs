//! Component trait system for the TUI
//!
//! Components declare their own capabilities through traits instead of the
//! App knowing how to render and navigate every panel.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │  (owns the model, routes input, animations)  │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!                ┌───────────────┐
//!                │  Card list    │  Component, Selectable,
//!                │  panel        │  Interactive
//!                └───────────────┘
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Selectable`] - item selection with bounds checking
//! - [`Interactive`] - keyboard handling with bubbling

mod component;
mod interactive;
mod selectable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
pub use selectable::Selectable;
