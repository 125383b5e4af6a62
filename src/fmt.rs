//! Logging shims.
//!
//! With the `defmt` feature (on a bare-metal target) these forward to the
//! `defmt` macros of the same name. Otherwise the arguments are only
//! borrowed so that no "unused variable" warnings leak out of log-only bindings.
#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(all(feature = "defmt", target_os = "none")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(all(feature = "defmt", target_os = "none")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(all(feature = "defmt", target_os = "none")))]
            let _ = ($( & $x ),*);
        }
    };
}
