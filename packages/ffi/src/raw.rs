//! Pointer plumbing shared by the exported functions.

use std::ffi::{c_char, CStr};
use std::path::PathBuf;

/// Write `value` through `out`. A null `out` is a failure.
///
/// # Safety
///
/// `out` must be null or valid for a write of `T`.
pub(crate) unsafe fn write_out<T>(out: *mut T, value: T) -> bool {
    if out.is_null() {
        return false;
    }
    // SAFETY: non-null and valid for writes per the caller's contract.
    unsafe { out.write(value) };
    true
}

/// Borrow `len` elements at `ptr`.
///
/// Returns `None` when `ptr` is null with a non-zero `len`, or when `len`
/// does not fit in `usize`. A zero `len` never dereferences `ptr`.
///
/// # Safety
///
/// A non-null `ptr` must point to `len` initialized elements that stay
/// valid and unmodified for `'a`.
pub(crate) unsafe fn input_slice<'a, T>(ptr: *const T, len: u64) -> Option<&'a [T]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    let len = usize::try_from(len).ok()?;
    // SAFETY: non-null, `len` elements readable per the caller's contract.
    Some(unsafe { std::slice::from_raw_parts(ptr, len) })
}

/// Interpret a NUL-terminated string as a filesystem path.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn file_path(ptr: *const c_char) -> Option<PathBuf> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let name = unsafe { CStr::from_ptr(ptr) };
    name.to_str().ok().map(PathBuf::from)
}

/// Hand an owned buffer to the caller, who releases it with
/// [`tsf_bytes_free`](crate::tsf_bytes_free).
pub(crate) fn into_raw_buffer(bytes: Vec<u8>) -> (*mut u8, u64) {
    let boxed = bytes.into_boxed_slice();
    let len = boxed.len() as u64;
    (Box::into_raw(boxed).cast::<u8>(), len)
}

/// Reclaim a buffer produced by [`into_raw_buffer`].
///
/// # Safety
///
/// `ptr` and `len` must come from one call to [`into_raw_buffer`], and the
/// buffer must not have been released already.
pub(crate) unsafe fn free_raw_buffer(ptr: *mut u8, len: u64) {
    if ptr.is_null() {
        return;
    }
    let slice = std::ptr::slice_from_raw_parts_mut(ptr, len as usize);
    // SAFETY: the pointer and length describe a boxed slice we leaked.
    drop(unsafe { Box::from_raw(slice) });
}
