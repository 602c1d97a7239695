//! Targets for [`Variant::try_cast`](crate::Variant::try_cast).

use crate::variant::Variant;

mod sealed {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// A type a variant can be probed for. Implemented for `bool`, `i32`, `i64`
/// and `f64`; text needs no probe since [`Variant::to_string`] never fails.
///
/// [`Variant::to_string`]: std::string::ToString::to_string
pub trait Cast: sealed::Sealed + Sized {
    #[doc(hidden)]
    fn probe(variant: &Variant) -> Option<Self>;
}

impl Cast for bool {
    fn probe(variant: &Variant) -> Option<Self> {
        let holder = variant.holder();
        if !holder.can_cast_to_bool() {
            return None;
        }
        holder.to_bool()
    }
}

impl Cast for i32 {
    fn probe(variant: &Variant) -> Option<Self> {
        i64::probe(variant).map(|value| value as i32)
    }
}

impl Cast for i64 {
    fn probe(variant: &Variant) -> Option<Self> {
        let holder = variant.holder();
        if !holder.can_cast_to_int() {
            return None;
        }
        holder.to_int64()
    }
}

impl Cast for f64 {
    fn probe(variant: &Variant) -> Option<Self> {
        let holder = variant.holder();
        if !holder.can_cast_to_double() {
            return None;
        }
        holder.to_double()
    }
}
