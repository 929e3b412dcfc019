//! Fallible scratch-buffer allocation shared by the sorters.
//!
//! Every sorter secures all of its scratch before the first write to the
//! caller's slice, so an allocation failure leaves the input untouched.

use crate::error::SortError;

/// Empty `Vec` with exact capacity for `n` elements.
pub(crate) fn reserved<T>(n: usize) -> Result<Vec<T>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n)?;
    Ok(buf)
}

/// Zero-filled buffer of length `n`.
pub(crate) fn zeroed<T: Copy + Default>(n: usize) -> Result<Vec<T>, SortError> {
    let mut buf = reserved(n)?;
    buf.resize(n, T::default());
    Ok(buf)
}
