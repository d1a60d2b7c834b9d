//! # sweep-steps
//!
//! Arithmetic value progressions for parameter sweeps.
//!
//! A [`Progression`] describes the values a controlled quantity (a supply
//! voltage, a chamber temperature) takes during a test run: the span
//! `[from, to]` sampled at a fixed increment.
//!
//! ## Features
//!
//! - **Constant-time predicates**: membership and (approximate) subset tests
//! - **Lazy enumeration**: members are produced on demand, in traversal order
//! - **Tolerant grammar**: `From 0 To 1.5 By 0.1`, `fr 0 t 1.5 b 0.1`, `*0 1.5 0.1`
//! - **Template provenance**: `*`-marked progressions are read-only
//! - **Edit transactions**: begin/cancel/end with change notification
//! - **Attribute codec**: `FromValue`/`ToValue`/`Increment`/`Selected` for document writers
//!
//! ## Quick Start
//!
//! ```rust
//! use sweep_steps::{Editable, Progression};
//!
//! let mut sweep: Progression = "From 0 To 1.5 By 0.1".parse()?;
//! assert!(sweep.has_value(0.3));
//! assert!(!sweep.has_value(0.35));
//!
//! sweep.begin_edit();
//! sweep.set_increment(0.5)?;
//! sweep.cancel_edit();
//! sweep.end_edit();
//! assert_eq!(sweep.to_string(), "From 0 To 1.5 By 0.1");
//! # Ok::<(), sweep_steps::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod attributes;
pub mod error;
pub mod grammar;
pub mod notify;
pub mod progression;

// Re-exports for ergonomic API
pub use attributes::{AttributeReader, AttributeWriter, ProgressionAttributes, ELEMENT_NAME};
pub use error::{ArgumentError, Error, OperationError, Result, StructureError};
pub use notify::{ListenerId, Property};
pub use progression::{Editable, Field, Increment, Progression, Values};
