//! Fixed-capacity sample registers
//!
//! This module provides registers that collect a bounded number of samples
//! and compute aggregates over them. Useful when the maximum sample count is
//! known up front and overrun must not grow memory.
//!
//! # Example
//!
//! ```
//! use statreg::register::SampleRegister;
//!
//! let mut reg = SampleRegister::new(10);
//!
//! for value in [4.5, 5.5, 6.0] {
//!     reg.insert(value);
//! }
//!
//! assert_eq!(reg.sum(), 16.0);
//! assert_eq!(reg.len(), 3);
//! ```

mod fixed;

pub use fixed::SampleRegister;
