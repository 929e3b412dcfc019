//! Stable LSD radix sort fast paths for fixed-width integer keys.
//!
//! Three self-contained sorters, each working on a caller-owned slice plus
//! scratch buffers allocated per call:
//! - [`radix_sort_i32`]: base-10 digit passes, offset transform for negatives
//! - [`radix_sort_i64`]: base-256 digit passes, offset transform for negatives
//! - [`radix_sort_u64`]: base-256 digit passes, 8 rounds; the fast path for
//!   sorting monotonically encoded `f64` bit patterns
//!
//! All sorts are stable and ascending, and run to completion on the calling
//! thread. Scratch allocation is fallible: on [`SortError`] the input slice
//! has not been touched.

mod error;
mod int;
mod scratch;
mod uint;

pub use error::SortError;
pub use int::{radix_sort_i32, radix_sort_i64};
pub use uint::radix_sort_u64;
