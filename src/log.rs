// Node lifecycle logging, compiled in only with the `debug` feature

#[cfg(feature = "debug")]
macro_rules! lifecycle_log {
    ($($arg:tt)*) => {
        saying::say!($($arg)*);
    };
}

#[cfg(not(feature = "debug"))]
macro_rules! lifecycle_log {
    ($($arg:tt)*) => {
        // Nothing
    };
}
