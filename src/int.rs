//! LSD radix sorts for signed keys.
//!
//! Digit extraction via division/modulo or byte masking is defined here only
//! for non-negative magnitudes, so when the input contains negatives every
//! key is biased by `-min` before the passes and un-biased on write-back.
//! The bias arithmetic runs in a wider signed type (`i64` for the 32-bit
//! sorter, `i128` for the 64-bit one), so inputs spanning the whole key range
//! cannot overflow; biased keys always fit the next unsigned width up.

use crate::error::SortError;
use crate::scratch;
use crate::uint::sort_by_bytes;

/// Sort `data` in ascending order, in place. Stable; one counting pass per
/// decimal digit of the largest biased key.
pub fn radix_sort_i32(data: &mut [i32]) -> Result<(), SortError> {
    if data.len() < 2 {
        return Ok(());
    }

    let (min, max) = min_max(data);
    let offset: i64 = if min < 0 { -(min as i64) } else { 0 };
    let bound = (max as i64 + offset) as u64;

    // All scratch is secured before the first write to `data`.
    let mut keys = scratch::reserved::<u32>(data.len())?;
    let mut temp = scratch::zeroed::<u32>(data.len())?;
    keys.extend(data.iter().map(|&v| (v as i64 + offset) as u32));

    // Least significant digit first, until every higher digit of the largest
    // biased key is zero.
    let mut exp: u64 = 1;
    while bound / exp > 0 {
        decimal_pass(&keys, &mut temp, exp);
        keys.copy_from_slice(&temp);
        exp *= 10;
    }

    for (dst, &k) in data.iter_mut().zip(keys.iter()) {
        *dst = (k as i64 - offset) as i32;
    }
    Ok(())
}

/// Sort `data` in ascending order, in place. Stable; runs the same eight
/// byte passes as [`crate::radix_sort_u64`] on the biased keys.
pub fn radix_sort_i64(data: &mut [i64]) -> Result<(), SortError> {
    if data.len() < 2 {
        return Ok(());
    }

    let mut min = data[0];
    for &v in &data[1..] {
        if v < min {
            min = v;
        }
    }
    let offset: i128 = if min < 0 { -(min as i128) } else { 0 };

    let mut keys = scratch::reserved::<u64>(data.len())?;
    let mut temp = scratch::zeroed::<u64>(data.len())?;
    keys.extend(data.iter().map(|&v| (v as i128 + offset) as u64));

    sort_by_bytes(&mut keys, &mut temp);

    for (dst, &k) in data.iter_mut().zip(keys.iter()) {
        *dst = (k as i128 - offset) as i64;
    }
    Ok(())
}

fn min_max(data: &[i32]) -> (i32, i32) {
    let mut min = data[0];
    let mut max = data[0];
    for &v in &data[1..] {
        if v > max {
            max = v;
        }
        if v < min {
            min = v;
        }
    }
    (min, max)
}

/// One stable counting pass on the decimal digit selected by `exp`.
fn decimal_pass(keys: &[u32], out: &mut [u32], exp: u64) {
    let mut count = [0usize; 10];
    for &k in keys {
        count[((k as u64 / exp) % 10) as usize] += 1;
    }

    // Inclusive prefix sums: count[d] becomes one past the last output index
    // for digit d.
    for d in 1..10 {
        count[d] += count[d - 1];
    }

    // Back-to-front walk consumes each bucket top-down, which keeps equal
    // digits in their original order.
    for &k in keys.iter().rev() {
        let d = ((k as u64 / exp) % 10) as usize;
        count[d] -= 1;
        out[count[d]] = k;
    }
}
