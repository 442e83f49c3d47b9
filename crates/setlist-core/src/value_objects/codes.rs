//! Numeric storage codes for enumerations
//!
//! Every enum persisted as a `SMALLINT` column implements [`StoredCode`].
//! Decoding is fallible: an unknown code means the row was written by
//! something that does not share this schema, which is reported rather than
//! silently coerced to a default.

/// An enum with a stable numeric representation in storage
pub trait StoredCode: Sized + Copy {
    /// Human readable type name used in decode errors
    const TYPE_NAME: &'static str;

    /// The code written to storage
    fn code(self) -> i16;

    /// Decode a stored code
    fn from_code(code: i16) -> Option<Self>;
}
