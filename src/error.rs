use core::fmt;

/// Errors returned by [`crate::Scanner`], generic over the pins' error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Fewer than two rows or columns were supplied
    InvalidParams,
    /// `init` has not completed successfully on this scanner
    NotInitialized,
    /// A row read or column write failed
    Pin(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParams => f.write_str("matrix needs at least two rows and two columns"),
            Error::NotInitialized => f.write_str("scanner is not initialized"),
            Error::Pin(e) => write!(f, "gpio error: {:?}", e),
        }
    }
}
