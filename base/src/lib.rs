//! A small scalar value box.
//!
//! [`Variant`] holds exactly one of a boolean, a 64-bit integer, a double or a
//! string, and converts between them on demand. Definite accessors such as
//! [`Variant::to_int64`] report a [`ConversionError`] when the held value cannot
//! be interpreted as the target; [`Variant::try_cast`] probes without failing.
//!
//! ```
//! use varia::Variant;
//!
//! let port = Variant::from("8080");
//! assert_eq!(port.try_cast::<i64>(), Some(8080));
//! assert_eq!(Variant::from("80$").try_cast::<i64>(), None);
//! ```
//!
//! There is no absent value:
//!
//! ```compile_fail
//! let nothing = varia::Variant::from(());
//! ```

pub mod cast;
pub mod error;
mod format;
mod holder;
pub mod kind;
pub mod parse;
pub mod result;
pub mod sink;
pub mod variant;
pub mod wide;

pub type VariantString = ecow::EcoString;

pub use cast::Cast;
pub use error::ConversionError;
pub use kind::Kind;
pub use variant::Variant;
pub use wide::WideString;
