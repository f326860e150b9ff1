//! Stack growth for recursive-descent parsing.
//!
//! Every rule invocation is a native call frame, so a self-recursive grammar
//! fed a deeply nested input (`((((...))))`, long right-recursive lists)
//! descends as far as the input goes. Rule bodies run inside
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! overflowing.
//!
//! On `wasm32` the guard is a passthrough.

/// Remaining stack below which a rule body gets a fresh segment.
const RED_ZONE: usize = 128 * 1024;

/// Size of each fresh stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn call_rule(...) -> bool {
///     ensure_sufficient_stack(|| rhs.parse(cursor, ctx, attr))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining stack in bytes, when the platform can tell.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
