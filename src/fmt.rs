//! Logging macro implementations and other formating functions

#[cfg(all(feature = "log", feature = "defmt", not(doc)))]
compile_error!("features `log` and `defmt` are mutually exclusive");

#[cfg(all(not(doc), feature = "defmt"))]
mod defmt {
    /// Logs a trace message using the underlying logger
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! trace {
        ($s:literal $(, $x:expr)* $(,)?) => {
            {
                ::defmt::trace!($s $(, $x)*);
            }
        };
    }

    /// Logs a debug message using the underlying logger
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {
            {
                ::defmt::debug!($s $(, $x)*);
            }
        };
    }

    /// Logs a warning using the underlying logger
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {
            {
                ::defmt::warn!($s $(, $x)*);
            }
        };
    }
}

#[cfg(all(not(doc), feature = "log"))]
mod log {
    /// Logs a trace message using the underlying logger
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! trace {
        ($s:literal $(, $x:expr)* $(,)?) => {
            {
                ::log::trace!($s $(, $x)*);
            }
        };
    }

    /// Logs a debug message using the underlying logger
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {
            {
                ::log::debug!($s $(, $x)*);
            }
        };
    }

    /// Logs a warning using the underlying logger
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {
            {
                ::log::warn!($s $(, $x)*);
            }
        };
    }
}

// Provide this implementation for `cargo doc`
#[cfg(any(doc, not(any(feature = "defmt", feature = "log"))))]
mod none {
    /// Logs a trace message using the underlying logger
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! trace {
        ($s:literal $(, $x:expr)* $(,)?) => {
            {
                let _ = ($( & $x ),*);
            }
        };
    }

    /// Logs a debug message using the underlying logger
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {
            {
                let _ = ($( & $x ),*);
            }
        };
    }

    /// Logs a warning using the underlying logger
    #[macro_export]
    #[collapse_debuginfo(yes)]
    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {
            {
                let _ = ($( & $x ),*);
            }
        };
    }
}
