/// Builds the list of bound arguments for a where clause.
///
/// Each expression is converted with `Value::from`, so arguments of
/// different types can be mixed:
///
/// ```
/// let args = rowbind_core::args![5, "hello", true];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::stmt::Value>::new()
    };
    ( $( $arg:expr ),+ $(,)? ) => {
        ::std::vec![ $( $crate::stmt::Value::from($arg) ),+ ]
    };
}

/// Returns early with an ad-hoc [`Error`](crate::Error) built from a format
/// string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`](crate::Error) from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}
