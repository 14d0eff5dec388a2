//! Per-thread and per-window DPI awareness contexts, with graceful fallbacks for Windows
//! versions (and other platforms) that don't have them.
//!
//! ```
//! use dpi_context::{DpiAwarenessContext, DpiContextAccessor};
//!
//! let accessor = DpiContextAccessor::platform();
//! let _scope = accessor.enter_thread_dpi_scope(DpiAwarenessContext::PER_MONITOR_AWARE_V2)?;
//! // Windows created here are per monitor aware. Elsewhere this is a no-op.
//! # Ok::<(), dpi_context::Error>(())
//! ```

#[cfg(target_os = "windows")]
mod win;
#[cfg(target_os = "windows")]
pub use win::*;

#[cfg(not(target_os = "windows"))]
pub type PlatformDpiApi = UnsupportedDpiApi;

mod accessor;
mod api;
mod context;
mod error;
mod unsupported;
pub use accessor::{DpiContextAccessor, ThreadDpiScope};
pub use api::{DpiApi, DpiFunction};
pub use context::{DpiAwarenessContext, WindowHandle};
pub use error::{Error, Result};
pub use unsupported::UnsupportedDpiApi;
