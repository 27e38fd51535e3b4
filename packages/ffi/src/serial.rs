//! Exported TSF codec operations.

use std::ffi::c_char;

use tsf_path_store::PathHandle;

use crate::raw::{file_path, free_raw_buffer, input_slice, into_raw_buffer};
use crate::registry::{handle_from_raw, registry, report};

unsafe fn hand_out(bytes: Vec<u8>, out_bytes: *mut *mut u8, out_len: *mut u64) {
    let (ptr, len) = into_raw_buffer(bytes);
    // SAFETY: both out-pointers were checked for null by the caller.
    unsafe {
        out_bytes.write(ptr);
        out_len.write(len);
    }
}

/// Serialize a path into a new TSF buffer.
///
/// On success `*out_bytes` owns `*out_len` bytes that the caller must
/// release with [`tsf_bytes_free`]. The path itself is left unchanged.
///
/// # Safety
///
/// Both out-pointers must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_serialize(
    handle: u64,
    out_bytes: *mut *mut u8,
    out_len: *mut u64,
) -> bool {
    if out_bytes.is_null() || out_len.is_null() {
        return false;
    }
    let Some(handle) = handle_from_raw(handle, "tsf_path_serialize") else {
        return false;
    };
    let bytes = {
        let guard = registry();
        report(
            "tsf_path_serialize",
            guard.codec.serialize(&guard.arena, handle),
        )
    };
    match bytes {
        Some(bytes) => {
            unsafe { hand_out(bytes.to_vec(), out_bytes, out_len) };
            true
        }
        None => false,
    }
}

/// Build a new path from `length` bytes at `bytes`.
///
/// Returns the new handle, or `0` when the buffer is malformed: shorter
/// than its header, of an unknown version, or inconsistent with its own
/// declared sequence lengths. No path is created on failure.
///
/// # Safety
///
/// `bytes` must be null or point to `length` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_deserialize(bytes: *const u8, length: u64) -> u64 {
    let Some(bytes) = (unsafe { input_slice(bytes, length) }) else {
        log::warn!("tsf_path_deserialize: null buffer with length {}", length);
        return PathHandle::INVALID_RAW;
    };
    let mut guard = registry();
    let state = &mut *guard;
    report(
        "tsf_path_deserialize",
        state
            .codec
            .deserialize(&mut state.arena, bytes, Some(bytes.len())),
    )
    .map_or(PathHandle::INVALID_RAW, PathHandle::to_raw)
}

/// Release a buffer returned by this library. Null is ignored.
///
/// # Safety
///
/// `bytes` and `length` must come from one successful call that hands out
/// a buffer, and the buffer must not be released twice.
#[no_mangle]
pub unsafe extern "C" fn tsf_bytes_free(bytes: *mut u8, length: u64) {
    unsafe { free_raw_buffer(bytes, length) }
}

/// Serialize a path into the file named by `filename`, replacing it.
///
/// # Safety
///
/// `filename` must be null or a NUL-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_serialize_to_file(handle: u64, filename: *const c_char) -> bool {
    let Some(file) = (unsafe { file_path(filename) }) else {
        log::warn!("tsf_path_serialize_to_file: missing or non-UTF-8 file name");
        return false;
    };
    let Some(handle) = handle_from_raw(handle, "tsf_path_serialize_to_file") else {
        return false;
    };
    let guard = registry();
    report(
        "tsf_path_serialize_to_file",
        guard.codec.serialize_to_file(&guard.arena, handle, &file),
    )
    .is_some()
}

/// Build a new path from the file named by `filename`.
///
/// Returns `0` on any I/O or decode failure.
///
/// # Safety
///
/// `filename` must be null or a NUL-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_deserialize_from_file(filename: *const c_char) -> u64 {
    let Some(file) = (unsafe { file_path(filename) }) else {
        log::warn!("tsf_path_deserialize_from_file: missing or non-UTF-8 file name");
        return PathHandle::INVALID_RAW;
    };
    let mut guard = registry();
    let state = &mut *guard;
    report(
        "tsf_path_deserialize_from_file",
        state
            .codec
            .deserialize_from_file(&mut state.arena, &file),
    )
    .map_or(PathHandle::INVALID_RAW, PathHandle::to_raw)
}

/// Serialize a path as base64url text (not NUL-terminated).
///
/// Release the text with [`tsf_bytes_free`].
///
/// # Safety
///
/// Both out-pointers must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_serialize_to_base64(
    handle: u64,
    out_text: *mut *mut u8,
    out_len: *mut u64,
) -> bool {
    if out_text.is_null() || out_len.is_null() {
        return false;
    }
    let Some(handle) = handle_from_raw(handle, "tsf_path_serialize_to_base64") else {
        return false;
    };
    let text = {
        let guard = registry();
        report(
            "tsf_path_serialize_to_base64",
            guard.codec.serialize_to_base64(&guard.arena, handle),
        )
    };
    match text {
        Some(text) => {
            unsafe { hand_out(text.into_bytes(), out_text, out_len) };
            true
        }
        None => false,
    }
}

/// Build a new path from `length` bytes of base64url text.
///
/// # Safety
///
/// `text` must be null or point to `length` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_deserialize_from_base64(text: *const u8, length: u64) -> u64 {
    let Some(text) = (unsafe { input_slice(text, length) }) else {
        log::warn!("tsf_path_deserialize_from_base64: null text with length {}", length);
        return PathHandle::INVALID_RAW;
    };
    let Ok(text) = std::str::from_utf8(text) else {
        log::warn!("tsf_path_deserialize_from_base64: text is not UTF-8");
        return PathHandle::INVALID_RAW;
    };
    let mut guard = registry();
    let state = &mut *guard;
    report(
        "tsf_path_deserialize_from_base64",
        state
            .codec
            .deserialize_from_base64(&mut state.arena, text),
    )
    .map_or(PathHandle::INVALID_RAW, PathHandle::to_raw)
}
