//! Exported path store operations.

use tsf_path_store::{Axis, PathHandle};

use crate::raw::{input_slice, write_out};
use crate::registry::{handle_from_raw, registry, report};

/// Allocate an empty path with identifier `id`.
///
/// Returns the new handle, or `0` if the store has no handles left.
#[no_mangle]
pub extern "C" fn tsf_path_create(id: u32) -> u64 {
    report("tsf_path_create", registry().arena.create(id))
        .map_or(PathHandle::INVALID_RAW, PathHandle::to_raw)
}

/// Release a path. Returns `false` if `handle` is not live, including when
/// it was already destroyed.
#[no_mangle]
pub extern "C" fn tsf_path_destroy(handle: u64) -> bool {
    let Some(handle) = handle_from_raw(handle, "tsf_path_destroy") else {
        return false;
    };
    report("tsf_path_destroy", registry().arena.destroy(handle)).is_some()
}

unsafe fn set(handle: u64, axis: Axis, values: *const f64, count: u64, op: &str) -> bool {
    let Some(handle) = handle_from_raw(handle, op) else {
        return false;
    };
    // SAFETY: forwarded from the exported function's contract. A null
    // pointer with a non-zero count becomes an empty slice, which the arena
    // then reports as a length mismatch.
    let values = unsafe { input_slice(values, count) }.unwrap_or(&[]);
    report(op, registry().arena.set(handle, axis, values, count)).is_some()
}

/// Replace the x sequence with a copy of `count` values read from `values`.
///
/// # Safety
///
/// `values` must be null or point to `count` readable `f64`s.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_set_x(handle: u64, values: *const f64, count: u64) -> bool {
    unsafe { set(handle, Axis::X, values, count, "tsf_path_set_x") }
}

/// Replace the y sequence with a copy of `count` values read from `values`.
///
/// # Safety
///
/// `values` must be null or point to `count` readable `f64`s.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_set_y(handle: u64, values: *const f64, count: u64) -> bool {
    unsafe { set(handle, Axis::Y, values, count, "tsf_path_set_y") }
}

/// # Safety
///
/// `out` must be null or valid for a write of `u32`.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_get_idx(handle: u64, out: *mut u32) -> bool {
    let Some(handle) = handle_from_raw(handle, "tsf_path_get_idx") else {
        return false;
    };
    let Some(id) = report("tsf_path_get_idx", registry().arena.id(handle)) else {
        return false;
    };
    unsafe { write_out(out, id) }
}

unsafe fn get_count(handle: u64, axis: Axis, out: *mut u64, op: &str) -> bool {
    let Some(handle) = handle_from_raw(handle, op) else {
        return false;
    };
    let Some(count) = report(op, registry().arena.count(handle, axis)) else {
        return false;
    };
    unsafe { write_out(out, count) }
}

/// # Safety
///
/// `out` must be null or valid for a write of `u64`.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_get_x_count(handle: u64, out: *mut u64) -> bool {
    unsafe { get_count(handle, Axis::X, out, "tsf_path_get_x_count") }
}

/// # Safety
///
/// `out` must be null or valid for a write of `u64`.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_get_y_count(handle: u64, out: *mut u64) -> bool {
    unsafe { get_count(handle, Axis::Y, out, "tsf_path_get_y_count") }
}

unsafe fn get_view(
    handle: u64,
    axis: Axis,
    out_values: *mut *const f64,
    out_count: *mut u64,
    op: &str,
) -> bool {
    if out_values.is_null() || out_count.is_null() {
        return false;
    }
    let Some(handle) = handle_from_raw(handle, op) else {
        return false;
    };
    let guard = registry();
    let Some(view) = report(op, guard.arena.view(handle, axis)) else {
        return false;
    };
    // The pointer outlives the lock: it names the path's own buffer, which
    // only moves on the next set or destroy of this handle.
    unsafe {
        out_values.write(view.as_ptr());
        out_count.write(view.len() as u64);
    }
    true
}

/// Borrow the x sequence.
///
/// On success `*out_values` points at `*out_count` values owned by the
/// path. The pointer is valid until the next `tsf_path_set_x` or
/// `tsf_path_destroy` on this handle; copy the values out before either.
///
/// # Safety
///
/// Both out-pointers must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_get_x(
    handle: u64,
    out_values: *mut *const f64,
    out_count: *mut u64,
) -> bool {
    unsafe { get_view(handle, Axis::X, out_values, out_count, "tsf_path_get_x") }
}

/// Borrow the y sequence. See [`tsf_path_get_x`] for the lifetime rules.
///
/// # Safety
///
/// Both out-pointers must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_get_y(
    handle: u64,
    out_values: *mut *const f64,
    out_count: *mut u64,
) -> bool {
    unsafe { get_view(handle, Axis::Y, out_values, out_count, "tsf_path_get_y") }
}

unsafe fn get_item(handle: u64, axis: Axis, index: u64, out: *mut f64, op: &str) -> bool {
    let Some(handle) = handle_from_raw(handle, op) else {
        return false;
    };
    let Some(value) = report(op, registry().arena.item(handle, axis, index)) else {
        return false;
    };
    unsafe { write_out(out, value) }
}

/// Read one x value by position.
///
/// # Safety
///
/// `out` must be null or valid for a write of `f64`.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_get_x_item(handle: u64, index: u64, out: *mut f64) -> bool {
    unsafe { get_item(handle, Axis::X, index, out, "tsf_path_get_x_item") }
}

/// Read one y value by position.
///
/// # Safety
///
/// `out` must be null or valid for a write of `f64`.
#[no_mangle]
pub unsafe extern "C" fn tsf_path_get_y_item(handle: u64, index: u64, out: *mut f64) -> bool {
    unsafe { get_item(handle, Axis::Y, index, out, "tsf_path_get_y_item") }
}

/// Number of live paths in the process.
#[no_mangle]
pub extern "C" fn tsf_path_live_count() -> u64 {
    registry().arena.len() as u64
}
