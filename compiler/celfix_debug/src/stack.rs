//! Stack growth for deeply nested trees.
//!
//! The renderer recurses once per tree level and has no depth limit of its
//! own; producers bound the depth. Wrapping each level in
//! [`ensure_sufficient_stack`] keeps pathological but legal inputs from
//! overflowing the thread stack.

/// Grow when less than this remains (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
