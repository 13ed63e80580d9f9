//! UI module for the review application
//!
//! # Architecture
//!
//! The UI is organized into two layers:
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod components;
pub mod primitives;
pub mod theme;
