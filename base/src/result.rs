use crate::error::VariantError;

pub type VariantResult<T> = Result<T, VariantError>;

/// Runs a block, prefixing any error with "Failed to ...".
///
/// ```
/// use varia::result::VariantResult;
/// use varia::{Variant, context, error::bail};
///
/// fn retry_count(value: &Variant) -> VariantResult<i64> {
///     match value.try_cast::<i64>() {
///         Some(count) => Ok(count),
///         None => bail!("not an integer: {value}"),
///     }
/// }
///
/// let retries = Variant::from("three");
/// let error = context!("read retry count {}", retries => {
///     retry_count(&retries)
/// })
/// .unwrap_err();
/// assert_eq!(error.to_string(), "Failed to read retry count three");
/// ```
#[macro_export]
macro_rules! context {
    ($fmt:expr $(, $($args:expr),+)? => $($stmts:stmt)+) => {
        (|| {
            $($stmts)+
        })().map_err(|e| $crate::error::VariantError::from(e).context(format!(concat!("Failed to ",$fmt) $(, $($args),+)?)))
    };
}
