//! UI Components module - business-specific composite components
//!
//! Components combine primitives with application logic.
//! They are the only layer that should import from `crate::app`.
//!
//! # Design Principles
//!
//! - **Business logic**: Components handle Message mapping and state access
//! - **Composition**: Build on primitives
//! - **Application-specific**: Depend on `crate::app::Message` and state types

pub mod review_list;
