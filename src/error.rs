use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A context must be supplied whenever the OS can set one.
    #[error("a DPI awareness context is required when SetThreadDpiAwarenessContext is available")]
    MissingContext,

    #[error("only Win32 window handles carry a DPI awareness context")]
    UnsupportedWindowHandle,
}

pub type Result<T> = std::result::Result<T, Error>;
