//! Fixed-capacity sample register
//!
//! Stores a bounded sequence of samples in insertion order and computes
//! their sum and arithmetic mean on demand.

use crate::traits::{CapacityError, Statistics};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Fixed-capacity sample register
///
/// Holds up to `capacity` samples in insertion order. The backing storage is
/// allocated once at construction and never grows: once the register is
/// full, further inserts are silently dropped with no error and no signal to
/// the caller. Callers that need to detect saturation compare [`len`] against
/// [`capacity`], or track their own insert count.
///
/// Aggregates are computed over the stored samples at read time. [`sum`] is
/// a sequential left-to-right accumulation, so a given stored sequence
/// always produces the same result.
///
/// [`len`]: SampleRegister::len
/// [`capacity`]: SampleRegister::capacity
/// [`sum`]: SampleRegister::sum
///
/// # Example
///
/// ```
/// use statreg::register::SampleRegister;
///
/// let mut reg = SampleRegister::new(5);
///
/// reg.insert(1.0);
/// reg.insert(2.0);
/// reg.insert(3.0);
///
/// assert_eq!(reg.sum(), 6.0);
/// assert_eq!(reg.average(), 2.0);
/// ```
///
/// # Saturation
///
/// ```
/// use statreg::register::SampleRegister;
///
/// let mut reg = SampleRegister::new(2);
///
/// reg.insert(10.0);
/// reg.insert(20.0);
/// reg.insert(30.0); // full: dropped without error
///
/// assert_eq!(reg.len(), 2);
/// assert_eq!(reg.sum(), 30.0);
/// assert_eq!(reg.average(), 15.0);
/// ```
#[derive(Clone, Debug)]
pub struct SampleRegister {
    /// Maximum number of samples
    capacity: usize,
    /// Recorded samples, in insertion order
    samples: Vec<f64>,
}

impl SampleRegister {
    /// Create a register holding up to `capacity` samples
    ///
    /// A capacity of zero is a valid degenerate register: every insert is a
    /// no-op and both aggregates read as 0.0.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Create a register from an externally supplied signed size
    ///
    /// Checked entry point for callers holding sizes from user input, wire
    /// formats, or foreign interfaces. Fails fast with
    /// [`CapacityError::Negative`] when `size` is below zero; otherwise
    /// behaves exactly like [`new`](SampleRegister::new).
    ///
    /// # Example
    ///
    /// ```
    /// use statreg::register::SampleRegister;
    /// use statreg::traits::CapacityError;
    ///
    /// let reg = SampleRegister::from_size(8).unwrap();
    /// assert_eq!(reg.capacity(), 8);
    ///
    /// let err = SampleRegister::from_size(-1).unwrap_err();
    /// assert_eq!(err, CapacityError::Negative { size: -1 });
    /// ```
    pub fn from_size(size: i64) -> Result<Self, CapacityError> {
        if size < 0 {
            return Err(CapacityError::Negative { size });
        }
        Ok(Self::new(size as usize))
    }

    /// Record a sample
    ///
    /// Appends `value` after the samples already held. When the register is
    /// full the call is a no-op: the value is dropped without error.
    ///
    /// No precondition on `value`: non-finite samples (NaN, infinity) are
    /// stored as given and flow through the aggregates per IEEE 754.
    pub fn insert(&mut self, value: f64) {
        if self.samples.len() < self.capacity {
            self.samples.push(value);
        }
    }

    /// Sum of all recorded samples
    ///
    /// Accumulates left to right over the stored sequence, starting from
    /// 0.0. Returns 0.0 for an empty register.
    pub fn sum(&self) -> f64 {
        self.samples.iter().sum()
    }

    /// Arithmetic mean of all recorded samples
    ///
    /// Returns 0.0 for an empty register rather than dividing by zero.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum() / self.samples.len() as f64
        }
    }

    /// Get the register capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of samples held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the register holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if the register is saturated
    ///
    /// A saturated register drops every further insert.
    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    /// Get the recorded samples, in insertion order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the register and return its samples
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl Statistics for SampleRegister {
    fn insert(&mut self, value: f64) {
        SampleRegister::insert(self, value);
    }

    fn sum(&self) -> f64 {
        SampleRegister::sum(self)
    }

    fn average(&self) -> f64 {
        SampleRegister::average(self)
    }

    fn count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SampleRegister {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SampleRegister", 2)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("samples", &self.samples)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SampleRegister {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct RegisterData {
            capacity: usize,
            samples: Vec<f64>,
        }

        let data = RegisterData::deserialize(deserializer)?;
        if data.samples.len() > data.capacity {
            return Err(serde::de::Error::custom(
                "sample count exceeds register capacity",
            ));
        }

        let mut samples = data.samples;
        samples.reserve(data.capacity - samples.len());
        Ok(SampleRegister {
            capacity: data.capacity,
            samples,
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let mut reg = SampleRegister::new(4);
        reg.insert(1.0);
        reg.insert(2.5);

        let json = serde_json::to_string(&reg).unwrap();
        let restored: SampleRegister = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.capacity(), 4);
        assert_eq!(restored.samples(), reg.samples());
        assert_eq!(restored.sum(), reg.sum());
    }

    #[test]
    fn test_restored_register_still_saturates() {
        let mut reg = SampleRegister::new(2);
        reg.insert(10.0);

        let json = serde_json::to_string(&reg).unwrap();
        let mut restored: SampleRegister = serde_json::from_str(&json).unwrap();

        restored.insert(20.0);
        restored.insert(30.0);

        assert_eq!(restored.samples(), &[10.0, 20.0]);
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let json = r#"{"capacity":1,"samples":[1.0,2.0,3.0]}"#;

        let result: Result<SampleRegister, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
