use pipemaze::{answer, parse, Answer, SolveCfg};

/// Borrow `len` bytes at `bytes`; `None` for a null pointer.
///
/// # Safety
/// A non-null `bytes` must point to `len` initialized bytes that stay valid
/// and unmodified for `'a`.
pub unsafe fn bytes_from_raw<'a>(bytes: *const u8, len: usize) -> Option<&'a [u8]> {
    if bytes.is_null() {
        return None;
    }
    // SAFETY: non-null and sized per the caller's contract.
    Some(unsafe { std::slice::from_raw_parts(bytes, len) })
}

/// Answers for a raw buffer; parse failures and missing loops read as zero.
pub fn answers_or_zero(input: Option<&[u8]>) -> (u64, u64) {
    input
        .and_then(|bytes| parse(bytes).ok())
        .map(|grid| answer(&grid, SolveCfg::default()))
        .unwrap_or_else(Answer::default)
        .or_zero()
}
