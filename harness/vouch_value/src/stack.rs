//! Stack growth for recursion over arbitrarily nested values.
//!
//! Equality, stringification and rendering all walk values recursively.
//! A value built by a test can nest far deeper than the default thread stack
//! allows, so every recursive step goes through [`ensure_sufficient_stack`].

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
