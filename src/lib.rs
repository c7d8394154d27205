//! # Statreg
//!
//! Fixed-capacity statistics registers for Rust.
//!
//! Statreg provides a bounded numeric accumulator for callers who know the
//! maximum number of samples in advance: collect up to a fixed count of
//! values, in insertion order, and read back their sum and arithmetic mean
//! on demand.
//!
//! ## Features
//!
//! - **Fixed capacity**: storage is allocated once at construction and never
//!   grows
//! - **Saturation by design**: inserts past capacity are silently dropped,
//!   so a full register keeps its original samples
//! - **Deterministic aggregates**: sum is sequential left-to-right
//!   accumulation over the stored samples, average guards the empty case
//! - **Checked construction**: externally supplied signed sizes can be
//!   validated up front instead of trusting the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use statreg::prelude::*;
//!
//! let mut reg = SampleRegister::new(5);
//!
//! for value in [1.0, 2.0, 3.0] {
//!     reg.insert(value);
//! }
//!
//! assert_eq!(reg.sum(), 6.0);
//! assert_eq!(reg.average(), 2.0);
//! ```
//!
//! ## Saturation
//!
//! A register never reports a failed insert. Once full, further values are
//! dropped without error:
//!
//! ```rust
//! use statreg::register::SampleRegister;
//!
//! let mut reg = SampleRegister::new(2);
//! reg.insert(10.0);
//! reg.insert(20.0);
//! reg.insert(30.0); // dropped, register is full
//!
//! assert_eq!(reg.sum(), 30.0);
//! assert_eq!(reg.average(), 15.0);
//! ```
//!
//! Callers that need to detect saturation compare [`len`](register::SampleRegister::len)
//! against [`capacity`](register::SampleRegister::capacity), or track their
//! own insert count.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod register;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::register::SampleRegister;
}

pub use register::SampleRegister;
