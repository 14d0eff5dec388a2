use raw_window_handle::RawWindowHandle;

use crate::Error;

/// An opaque DPI awareness context handle, as handed out by the OS.
///
/// Contexts are only ever obtained from or passed back to the OS. Two handles with different
/// raw values may still describe the same awareness mode, which is why this type does not
/// implement `PartialEq`. Use
/// [`DpiContextAccessor::try_are_dpi_awareness_contexts_equal`](crate::DpiContextAccessor::try_are_dpi_awareness_contexts_equal)
/// instead.
#[derive(Debug, Copy, Clone)]
pub struct DpiAwarenessContext(isize);

impl DpiAwarenessContext {
    /// The NULL context. The OS returns it when it rejects a request or does not know a window.
    pub const UNSPECIFIED: Self = Self(0);
    /// DPI unaware. The system bitmap-stretches the window.
    pub const UNAWARE: Self = Self(-1);
    /// System DPI aware. Scaled by the system when moved to a monitor with a different DPI.
    pub const SYSTEM_AWARE: Self = Self(-2);
    /// Per monitor DPI aware.
    pub const PER_MONITOR_AWARE: Self = Self(-3);
    /// Per monitor DPI aware, including non-client area and child window scaling.
    pub const PER_MONITOR_AWARE_V2: Self = Self(-4);
    /// DPI unaware with improved GDI text rendering.
    pub const UNAWARE_GDISCALED: Self = Self(-5);

    pub fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> isize {
        self.0
    }

    pub fn is_unspecified(self) -> bool {
        self.0 == 0
    }
}

/// An opaque window handle (an `HWND` on Windows).
///
/// No validation happens here. An invalid handle is passed through to the OS as is.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> isize {
        self.0
    }
}

impl TryFrom<RawWindowHandle> for WindowHandle {
    type Error = Error;

    fn try_from(handle: RawWindowHandle) -> Result<Self, Self::Error> {
        match handle {
            RawWindowHandle::Win32(handle) => Ok(Self(handle.hwnd as isize)),
            _ => Err(Error::UnsupportedWindowHandle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raw_window_handle::{Win32WindowHandle, XlibWindowHandle};
    use std::ffi::c_void;

    #[test]
    fn null_context_is_unspecified() {
        let null = DpiAwarenessContext::from_raw(0);
        assert!(null.is_unspecified());
        assert_eq!(null.as_raw(), DpiAwarenessContext::UNSPECIFIED.as_raw());
        assert!(!DpiAwarenessContext::from_raw(-4).is_unspecified());
    }

    #[test]
    fn well_known_contexts() {
        assert_eq!(DpiAwarenessContext::UNAWARE.as_raw(), -1);
        assert_eq!(DpiAwarenessContext::PER_MONITOR_AWARE_V2.as_raw(), -4);
        assert_eq!(DpiAwarenessContext::UNAWARE_GDISCALED.as_raw(), -5);
    }

    #[test]
    fn window_handle_from_win32_raw_handle() {
        let mut raw = Win32WindowHandle::empty();
        raw.hwnd = 0x1234 as *mut c_void;

        let handle = WindowHandle::try_from(RawWindowHandle::Win32(raw)).unwrap();
        assert_eq!(handle.as_raw(), 0x1234);
    }

    #[test]
    fn window_handle_rejects_foreign_raw_handle() {
        let raw = RawWindowHandle::Xlib(XlibWindowHandle::empty());
        assert!(matches!(WindowHandle::try_from(raw), Err(Error::UnsupportedWindowHandle)));
    }
}
