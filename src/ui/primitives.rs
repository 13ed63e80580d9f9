//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//! - **Reusable**: Can be composed by components
//!
//! # Contents
//!
//! - [`SwipeRow`] - Horizontally draggable row with accept/decline panels

pub mod swipe_row;

pub use swipe_row::{SwipeRow, swipe_row};
