use crate::{DpiApi, DpiAwarenessContext, WindowHandle};

/// The backend for platforms without DPI awareness contexts. It behaves like a Windows version
/// that predates them: nothing is available and nothing is ever forwarded.
#[derive(Debug, Default, Copy, Clone)]
pub struct UnsupportedDpiApi;

impl UnsupportedDpiApi {
    pub fn load() -> Self {
        Self
    }
}

impl DpiApi for UnsupportedDpiApi {
    fn is_api_available(&self, _name: &str) -> bool {
        false
    }

    fn get_thread_dpi_awareness_context(&self) -> DpiAwarenessContext {
        DpiAwarenessContext::UNSPECIFIED
    }

    fn set_thread_dpi_awareness_context(
        &self,
        _context: DpiAwarenessContext,
    ) -> DpiAwarenessContext {
        DpiAwarenessContext::UNSPECIFIED
    }

    fn are_dpi_awareness_contexts_equal(
        &self,
        _a: DpiAwarenessContext,
        _b: DpiAwarenessContext,
    ) -> bool {
        false
    }

    fn get_window_dpi_awareness_context(
        &self,
        _window: WindowHandle,
    ) -> DpiAwarenessContext {
        DpiAwarenessContext::UNSPECIFIED
    }
}
