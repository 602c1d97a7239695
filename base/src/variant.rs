use crate::VariantString;
use crate::cast::Cast;
use crate::error::ConversionError;
use crate::format::pad_to_width;
use crate::holder::{BoolHolder, DoubleHolder, Holder, IntHolder, SharedHolder, StringHolder};
use crate::kind::Kind;
use crate::wide::WideString;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// An immutable value holding a bool, an `i64`, an `f64` or a string.
///
/// Cloning shares the payload. Assigning a new variant to a binding replaces
/// the payload of that binding only; every other clone keeps what it had.
/// `Variant::default()` is the integer `0`.
#[derive(Clone)]
pub struct Variant {
    holder: SharedHolder,
}

impl Variant {
    fn with_holder(holder: impl Holder + 'static) -> Variant {
        Variant {
            holder: Arc::new(holder),
        }
    }

    pub(crate) fn holder(&self) -> &dyn Holder {
        &*self.holder
    }

    pub fn kind(&self) -> Kind {
        self.holder.kind()
    }

    pub fn is_bool(&self) -> bool {
        self.kind() == Kind::Bool
    }

    pub fn is_int(&self) -> bool {
        self.kind() == Kind::Int
    }

    pub fn is_double(&self) -> bool {
        self.kind() == Kind::Double
    }

    pub fn is_string(&self) -> bool {
        self.kind() == Kind::String
    }

    /// True when both variants are clones of the same payload.
    pub fn shares_payload(&self, other: &Variant) -> bool {
        Arc::ptr_eq(&self.holder, &other.holder)
    }

    /// Strings accept `true`/`false` in any ASCII case, otherwise any double
    /// whose magnitude exceeds `f64::EPSILON` is true.
    #[track_caller]
    pub fn to_bool(&self) -> Result<bool, ConversionError> {
        self.definite(self.holder.to_bool(), Kind::Bool, "to_bool", Location::caller())
    }

    /// The low 32 bits of [`to_int64`](Self::to_int64).
    #[track_caller]
    pub fn to_int(&self) -> Result<i32, ConversionError> {
        self.definite(self.holder.to_int64(), Kind::Int, "to_int", Location::caller())
            .map(|value| value as i32)
    }

    #[track_caller]
    pub fn to_int64(&self) -> Result<i64, ConversionError> {
        self.definite(self.holder.to_int64(), Kind::Int, "to_int64", Location::caller())
    }

    #[track_caller]
    pub fn to_double(&self) -> Result<f64, ConversionError> {
        self.definite(self.holder.to_double(), Kind::Double, "to_double", Location::caller())
    }

    /// The text form, sharing the buffer when the variant holds a string.
    pub fn to_text(&self) -> VariantString {
        self.holder.to_text()
    }

    pub fn to_wide_string(&self) -> WideString {
        let mut wide = WideString::new();
        self.holder.write_wide(&mut wide);
        wide
    }

    /// Probes for `T` without failing loudly.
    ///
    /// ```
    /// use varia::Variant;
    ///
    /// assert_eq!(Variant::from(" 1.5").try_cast::<f64>(), Some(1.5));
    /// assert_eq!(Variant::from("1.5$").try_cast::<f64>(), None);
    /// ```
    pub fn try_cast<T: Cast>(&self) -> Option<T> {
        let value = T::probe(self);
        if value.is_none() {
            tracing::trace!(
                value = %self,
                from = %self.kind(),
                to = std::any::type_name::<T>(),
                "variant probe rejected"
            );
        }
        value
    }

    /// Writes the probed value into `out` and returns true, or leaves `out`
    /// untouched and returns false.
    pub fn try_cast_into<T: Cast>(&self, out: &mut T) -> bool {
        match self.try_cast() {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    fn definite<T>(
        &self,
        value: Option<T>,
        to: Kind,
        operation: &'static str,
        location: &'static Location<'static>,
    ) -> Result<T, ConversionError> {
        match value {
            Some(value) => Ok(value),
            None => {
                let error =
                    ConversionError::new(self.to_text(), self.kind(), to, operation, location);
                tracing::debug!(
                    value = error.value(),
                    from = %error.from(),
                    to = %error.to(),
                    operation,
                    "definite variant conversion failed"
                );
                if cfg!(feature = "panic-on-bad-cast") {
                    panic!("{error}");
                }
                Err(error)
            }
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::with_holder(IntHolder(0))
    }
}

/// Precision sets the fraction digits of a double, truncates a string like
/// `str` does and is ignored for bools and integers.
impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (f.width(), f.precision()) {
            (None, None) => self.holder.write_text(f),
            (_, None) => pad_to_width(f, &self.holder.to_text()),
            (_, Some(precision)) => {
                let mut text = String::new();
                self.holder.write_text_precise(&mut text, precision)?;
                pad_to_width(f, &text)
            }
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("kind", &self.kind())
            .field("value", &format_args!("{self}"))
            .finish()
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::with_holder(BoolHolder(value))
    }
}

macro_rules! from_integer {
    ($($int:ty),+) => {
        $(
            impl From<$int> for Variant {
                fn from(value: $int) -> Self {
                    Variant::with_holder(IntHolder(i64::from(value)))
                }
            }
        )+
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::with_holder(DoubleHolder(value))
    }
}

impl From<f32> for Variant {
    fn from(value: f32) -> Self {
        Variant::with_holder(DoubleHolder(f64::from(value)))
    }
}

impl From<VariantString> for Variant {
    fn from(value: VariantString) -> Self {
        Variant::with_holder(StringHolder(value))
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::from(VariantString::from(value))
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::from(VariantString::from(value))
    }
}

impl From<&String> for Variant {
    fn from(value: &String) -> Self {
        Variant::from(value.as_str())
    }
}

/// A missing string becomes the empty string.
impl From<Option<&str>> for Variant {
    fn from(value: Option<&str>) -> Self {
        Variant::from(value.unwrap_or_default())
    }
}

impl From<Option<String>> for Variant {
    fn from(value: Option<String>) -> Self {
        Variant::from(value.unwrap_or_default())
    }
}

macro_rules! try_from_variant {
    ($($target:ty => $accessor:ident),+) => {
        $(
            impl TryFrom<&Variant> for $target {
                type Error = ConversionError;

                #[track_caller]
                fn try_from(variant: &Variant) -> Result<Self, Self::Error> {
                    variant.$accessor()
                }
            }

            impl TryFrom<Variant> for $target {
                type Error = ConversionError;

                #[track_caller]
                fn try_from(variant: Variant) -> Result<Self, Self::Error> {
                    variant.$accessor()
                }
            }
        )+
    };
}

try_from_variant!(bool => to_bool, i32 => to_int, i64 => to_int64, f64 => to_double);

impl From<&Variant> for String {
    fn from(variant: &Variant) -> Self {
        variant.to_string()
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        variant.to_string()
    }
}

impl From<&Variant> for VariantString {
    fn from(variant: &Variant) -> Self {
        variant.to_text()
    }
}

impl From<&Variant> for WideString {
    fn from(variant: &Variant) -> Self {
        variant.to_wide_string()
    }
}
