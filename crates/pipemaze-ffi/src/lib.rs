//! C-callable bindings for selected `pipemaze` functions.
//!
//! Notes
//! - Keep bindings thin: marshal `(ptr, len)` into a slice, call the core,
//!   return a native integer.
//! - Every failure (null pointer, parse error, no loop) returns `0`; callers
//!   needing the distinction should link the Rust crate directly.

mod common;

use common::{answers_or_zero, bytes_from_raw};

/// Steps from the start to the farthest loop tile.
///
/// # Safety
/// `bytes` must be null or point to `len` readable bytes for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn pipemaze_loop_distance(bytes: *const u8, len: usize) -> u64 {
    // SAFETY: forwarded caller contract.
    answers_or_zero(unsafe { bytes_from_raw(bytes, len) }).0
}

/// Cells strictly enclosed by the loop.
///
/// # Safety
/// `bytes` must be null or point to `len` readable bytes for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn pipemaze_enclosed_area(bytes: *const u8, len: usize) -> u64 {
    // SAFETY: forwarded caller contract.
    answers_or_zero(unsafe { bytes_from_raw(bytes, len) }).1
}
