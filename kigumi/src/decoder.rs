//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts from a source type `T` to a destination
//! type `D`. The member crates use it at every seam of the pipeline:
//! a PEM block decodes to raw bytes, an encoded TLV element decodes to a
//! typed node.
//!
//! The two-trait pattern keeps conversions explicit:
//!
//! 1. `Decoder<T, D>` performs the conversion.
//! 2. `DecodableFrom<T>` marks which conversions exist.
//!
//! To add a decodable type, implement both:
//!
//! ```no_run
//! use kigumi::decoder::{DecodableFrom, Decoder};
//!
//! struct SourceType(Vec<u8>);
//! struct DestType(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<SourceType> for DestType {}
//!
//! impl Decoder<SourceType, DestType> for SourceType {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<DestType, Self::Error> {
//!         Ok(DestType(String::from_utf8_lossy(&self.0).to_string()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type `T`. The destination type must implement
/// [`DecodableFrom<T>`] so that only declared conversions compile.
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// Has no methods; it exists so the compiler rejects conversions nobody
/// declared.
pub trait DecodableFrom<T> {}
