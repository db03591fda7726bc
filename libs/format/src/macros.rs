//! Macros for declaring statically known formats.

/// Declares a lazily parsed, process-wide format.
///
/// The format string is parsed with [`must_parse_format`](crate::must_parse_format)
/// on first access, so an invalid literal panics the first time it is used.
///
/// # Example
///
/// ```
/// use resname_format::define_format;
///
/// define_format!(PRODUCT, "stores/{store}/products/{product}");
///
/// assert_eq!(PRODUCT.to_string(), "stores/{store}/products/{product}");
/// ```
#[macro_export]
macro_rules! define_format {
    ($(#[$meta:meta])* $name:ident, $format:literal) => {
        $(#[$meta])*
        pub static $name: std::sync::LazyLock<$crate::Format> =
            std::sync::LazyLock::new(|| $crate::must_parse_format($format));
    };
}
