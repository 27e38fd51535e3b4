//! TSF C ABI
//!
//! Exposes the path store and the TSF codec as `extern "C"` functions for
//! callers in other languages. The matching declarations are in
//! `include/tsf.h`.
//!
//! # Conventions
//!
//! - Paths are addressed by `u64` handles. `0` is never a live handle and
//!   is returned by constructors on failure.
//! - Every fallible accessor returns `bool` and writes its result through
//!   an out-pointer only on success. Callers must check the flag before
//!   reading the out value.
//! - Destroyed and never-issued handles are detected: every operation on
//!   them returns `false` (or `0`), including a second destroy.
//! - Buffers handed out by `tsf_path_serialize` and
//!   `tsf_path_serialize_to_base64` belong to the caller and are released
//!   with `tsf_bytes_free`.
//! - Pointers returned by `tsf_path_get_x`/`tsf_path_get_y` are borrowed.
//!   They stay valid until the next set or destroy of the same handle.
//!
//! All handles live in one process-wide store guarded by a mutex, so
//! calls on distinct handles may come from any thread. Calls that race on
//! the same handle must be ordered by the caller.
//!
//! Rejected calls are logged at `warn` through the `log` facade; install a
//! logger in the host process to see them.

mod raw;
mod registry;
mod serial;
mod store;

pub use serial::{
    tsf_bytes_free, tsf_path_deserialize, tsf_path_deserialize_from_base64,
    tsf_path_deserialize_from_file, tsf_path_serialize, tsf_path_serialize_to_base64,
    tsf_path_serialize_to_file,
};
pub use store::{
    tsf_path_create, tsf_path_destroy, tsf_path_get_idx, tsf_path_get_x, tsf_path_get_x_count,
    tsf_path_get_x_item, tsf_path_get_y, tsf_path_get_y_count, tsf_path_get_y_item,
    tsf_path_live_count, tsf_path_set_x, tsf_path_set_y,
};
