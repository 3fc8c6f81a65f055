//! Incremental 32-bit FNV-1a.
//!
//! The scanner mixes each identifier or string byte into the running state as
//! it reads it, so the content hash is ready the moment the token ends. FNV-1a
//! beats general-purpose hashes on inputs shorter than ~28 bytes, which covers
//! nearly all identifiers.
//!
//! ```
//! use tern_lexer_core::hash;
//!
//! let mut state = hash::init();
//! for &b in b"main" {
//!     hash::hash(b, &mut state);
//! }
//! assert_eq!(state, hash::hash_bytes(b"main"));
//! ```

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Starting state for a new hash.
#[inline]
pub const fn init() -> u32 {
    FNV_OFFSET_BASIS
}

/// Mix one byte into `state`.
#[inline]
pub fn hash(byte: u8, state: &mut u32) {
    *state = (*state ^ u32::from(byte)).wrapping_mul(FNV_PRIME);
}

/// Hash a complete byte slice. Equivalent to folding [`hash`] over `bytes`.
pub fn hash_bytes(bytes: &[u8]) -> u32 {
    let mut state = init();
    for &b in bytes {
        hash(b, &mut state);
    }
    state
}
