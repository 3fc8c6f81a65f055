//! Token payloads.

/// Reference to interned bytes in a [`TokenBuffer`](crate::TokenBuffer) heap.
///
/// Valid until the owning buffer is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StringHandle {
    pub offset: u32,
    pub length: u32,
}

impl StringHandle {
    #[inline]
    pub const fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }
}

/// Scalar payload carried alongside each token.
///
/// Numeric values never include a sign: `-1` lexes as `Minus` followed by
/// `Integer(1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenValue {
    #[default]
    None,
    Integer(u64),
    Float(f64),
    String(StringHandle),
}

impl TokenValue {
    #[inline]
    pub const fn as_integer(self) -> Option<u64> {
        match self {
            Self::Integer(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_float(self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_string(self) -> Option<StringHandle> {
        match self {
            Self::String(h) => Some(h),
            _ => None,
        }
    }
}
