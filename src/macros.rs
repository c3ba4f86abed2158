//! Logging macros that tag each line with the calling function.

/// Name of the enclosing function, closures stripped
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __marker() {}
        $crate::caller::function_name_from_path(::std::any::type_name_of_val(&__marker))
    }};
}

/// Log a formatted message at an explicit level, tagged with the calling function
///
/// ```
/// use prefixlog::{Logger, Severity};
///
/// let log = Logger::builder().name("jobs").color(false).build();
/// prefixlog::log!(log, Severity::Warning, "retrying {} more times", 3);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::Logger::log_from(
            &$logger,
            &::std::format!($($arg)+),
            ::std::convert::Into::<i32>::into($level),
            $crate::Caller::named($crate::function_name!()),
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! value {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Value, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Success, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}
