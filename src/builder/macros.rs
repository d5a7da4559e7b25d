//! Macros for ergonomic scoped computations.

/// Generate a failure enum together with its `Reason` and `Display`
/// implementations.
///
/// # Example
///
/// ```
/// use upshot::core::Reason;
/// use upshot::reason_enum;
///
/// reason_enum! {
///     pub enum FetchFailure {
///         NotFound,
///         Timeout,
///         Refused,
///     }
///     transient: [Timeout]
/// }
///
/// assert_eq!(FetchFailure::Refused.name(), "Refused");
/// assert!(FetchFailure::Timeout.is_transient());
/// assert_eq!(FetchFailure::NotFound.to_string(), "NotFound");
/// ```
#[macro_export]
macro_rules! reason_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(transient: [$($transient:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Reason for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_transient(&self) -> bool {
                match self {
                    $($(Self::$transient => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Reason::name(self))
            }
        }
    };
}

/// Return early from a scope body with a raise.
///
/// Expands to `return Err(scope.raise(reason))`, so it works in plain
/// closures and in `async move` blocks alike.
///
/// # Example
///
/// ```
/// use upshot::builder::either;
/// use upshot::core::Either;
/// use upshot::raise;
///
/// let result: Either<&str, u8> = either(|scope| {
///     raise!(scope, "gave up");
/// });
///
/// assert_eq!(result, Either::Failure("gave up"));
/// ```
#[macro_export]
macro_rules! raise {
    ($scope:expr, $reason:expr $(,)?) => {
        return ::core::result::Result::Err($scope.raise($reason))
    };
}

/// Raise `reason` unless `condition` holds. The reason is only built on
/// failure.
///
/// # Example
///
/// ```
/// use upshot::builder::either;
/// use upshot::core::Either;
/// use upshot::ensure;
///
/// let result: Either<String, u8> = either(|scope| {
///     let stock = 0;
///     ensure!(scope, stock > 0, format!("stock is {stock}"));
///     Ok(stock)
/// });
///
/// assert_eq!(result, Either::Failure("stock is 0".to_string()));
/// ```
#[macro_export]
macro_rules! ensure {
    ($scope:expr, $condition:expr, $reason:expr $(,)?) => {
        if !$condition {
            $crate::raise!($scope, $reason);
        }
    };
}
