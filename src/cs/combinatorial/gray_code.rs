//! Binary-reflected Gray code generation and the bit transitions between consecutive codes.
//! The Gray code for i is `i ^ (i >> 1)`; consecutive codes differ in exactly one bit,
//! so walking the sequence flips bit 0, 1, 0, 2, 0, 1, 0, 3, ...
//!
//! # Example
//! ```
//! use graycode::cs::combinatorial::{gray_code, gray_transition_positions};
//!
//! // For n=2, the sequence is [0, 1, 3, 2].
//! assert_eq!(gray_code(2).unwrap(), vec![0, 1, 3, 2]);
//! // Moving 0 -> 1 -> 3 -> 2 flips bit 0, then bit 1, then bit 0.
//! assert_eq!(gray_transition_positions(2).unwrap(), vec![0, 1, 0]);
//! ```

use crate::cs::error::{Error, Result};
use log::{debug, trace};

/// Bit width at which the 2^n codes no longer fit a `u64` index.
pub const MAX_BITS: usize = u64::BITS as usize;

/// Number of codes in an n-bit Gray sequence, or an error if n is too wide.
fn sequence_len(n: usize) -> Result<u64> {
    if n >= MAX_BITS {
        return Err(Error::InputTooLarge {
            length: n,
            max_length: MAX_BITS - 1,
        });
    }
    Ok(1u64 << n)
}

/// Widest n for which `2^n - excluded` values of `T` fit in a single `Vec`.
fn max_vec_bits<T>(excluded: usize) -> usize {
    let max_elems = isize::MAX as usize / std::mem::size_of::<T>().max(1);
    let bits = (max_elems + excluded).ilog2() as usize;
    bits.min(MAX_BITS - 1)
}

/// Allocates room for the `2^n - excluded` elements of an n-bit sequence.
fn sequence_vec<T>(n: usize, excluded: u64) -> Result<Vec<T>> {
    let max_length = max_vec_bits::<T>(excluded as usize);
    let too_large = || Error::InputTooLarge {
        length: n,
        max_length,
    };
    if n > max_length {
        return Err(too_large());
    }
    let len = usize::try_from(sequence_len(n)? - excluded).map_err(|_| too_large())?;

    let mut values = Vec::new();
    values.try_reserve_exact(len).map_err(|_| too_large())?;
    Ok(values)
}

/// Gray code of a single value.
#[inline]
pub fn gray_encode(i: u64) -> u64 {
    i ^ (i >> 1)
}

/// Inverse of [`gray_encode`]: recovers i from its Gray code by prefix XOR.
pub fn gray_decode(gray: u64) -> u64 {
    let mut value = gray;
    let mut shift = 1;
    while shift < u64::BITS {
        value ^= value >> shift;
        shift <<= 1;
    }
    value
}

/// Returns a vector of 2^n Gray codes, each stored as a `u64`.
///
/// Widths whose 2^n codes cannot be allocated return [`Error::InputTooLarge`].
pub fn gray_code(n: usize) -> Result<Vec<u64>> {
    let mut codes = sequence_vec::<u64>(n, 0)?;
    codes.extend((0..sequence_len(n)?).map(gray_encode));
    trace!("generated {} gray codes for n={}", codes.len(), n);
    Ok(codes)
}

/// Returns k such that `x == 2^k`.
///
/// `x` must be an exact power of two. Zero or any value with more than one set bit
/// is rejected with [`Error::InvalidInput`].
///
/// # Example
/// ```
/// use graycode::cs::combinatorial::integer_log2;
///
/// assert_eq!(integer_log2(1).unwrap(), 0);
/// assert_eq!(integer_log2(8).unwrap(), 3);
/// assert!(integer_log2(6).is_err());
/// ```
pub fn integer_log2(x: u64) -> Result<u32> {
    if !x.is_power_of_two() {
        debug!("integer_log2 rejected non-power-of-two argument {}", x);
        return Err(Error::invalid_input(format!(
            "integer_log2 requires a power of two, got {}",
            x
        )));
    }

    let mut k = 0;
    let mut rest = x;
    while rest > 1 {
        rest >>= 1;
        k += 1;
    }
    Ok(k)
}

/// Position of the bit that flips between each pair of consecutive n-bit Gray codes.
///
/// Returns 2^n - 1 positions, each in `0..n`. For n=0 the sequence is empty.
/// Widths whose positions cannot be allocated return [`Error::InputTooLarge`].
///
/// # Example
/// ```
/// use graycode::cs::combinatorial::gray_transition_positions;
///
/// let positions = gray_transition_positions(4).unwrap();
/// assert_eq!(positions, vec![0, 1, 0, 2, 0, 1, 0, 3, 0, 1, 0, 2, 0, 1, 0]);
/// ```
pub fn gray_transition_positions(n: usize) -> Result<Vec<u32>> {
    let mut positions = sequence_vec::<u32>(n, 1)?;
    let size = sequence_len(n)?;
    for i in 1..size {
        let delta = gray_encode(i) ^ gray_encode(i - 1);
        positions.push(integer_log2(delta)?);
    }
    trace!("computed {} gray transitions for n={}", positions.len(), n);
    Ok(positions)
}

/// Rebuilds the Gray code sequence from its transitions, starting at g(0) = 0.
///
/// The result has one more element than `transitions`. A position outside `0..64` is an error.
pub fn reconstruct_gray_codes(transitions: &[u32]) -> Result<Vec<u64>> {
    let mut codes = Vec::with_capacity(transitions.len() + 1);
    let mut current = 0u64;
    codes.push(current);
    for &position in transitions {
        let bit = 1u64.checked_shl(position).ok_or_else(|| {
            Error::invalid_input(format!("bit position {} out of range for u64", position))
        })?;
        current ^= bit;
        codes.push(current);
    }
    Ok(codes)
}

/// Lazy iterator over the same positions as [`gray_transition_positions`].
///
/// # Example
/// ```
/// use graycode::cs::combinatorial::GrayTransitions;
///
/// let positions: Vec<u32> = GrayTransitions::new(3).unwrap().collect();
/// assert_eq!(positions, vec![0, 1, 0, 2, 0, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct GrayTransitions {
    next: u64,
    end: u64,
}

impl GrayTransitions {
    /// Widths up to `usize::BITS` keep the remaining count within `usize`.
    pub fn new(n: usize) -> Result<Self> {
        let max_length = (usize::BITS as usize).min(MAX_BITS - 1);
        if n > max_length {
            return Err(Error::InputTooLarge {
                length: n,
                max_length,
            });
        }
        let end = sequence_len(n)?;
        Ok(GrayTransitions { next: 1, end })
    }
}

impl Iterator for GrayTransitions {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        // Exactly one bit differs between neighbours.
        Some((gray_encode(i) ^ gray_encode(i - 1)).trailing_zeros())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        let len = usize::try_from(remaining).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

impl ExactSizeIterator for GrayTransitions {}

impl std::iter::FusedIterator for GrayTransitions {}
