use crate::{DpiAwarenessContext, WindowHandle};

/// The `user32.dll` entry points this crate forwards to. All of them first shipped with
/// Windows 10, version 1607.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum DpiFunction {
    GetThreadDpiAwarenessContext,
    SetThreadDpiAwarenessContext,
    AreDpiAwarenessContextsEqual,
    GetWindowDpiAwarenessContext,
}

impl DpiFunction {
    pub const ALL: [DpiFunction; 4] = [
        DpiFunction::GetThreadDpiAwarenessContext,
        DpiFunction::SetThreadDpiAwarenessContext,
        DpiFunction::AreDpiAwarenessContextsEqual,
        DpiFunction::GetWindowDpiAwarenessContext,
    ];

    /// The exported symbol name.
    pub fn name(self) -> &'static str {
        match self {
            DpiFunction::GetThreadDpiAwarenessContext => "GetThreadDpiAwarenessContext",
            DpiFunction::SetThreadDpiAwarenessContext => "SetThreadDpiAwarenessContext",
            DpiFunction::AreDpiAwarenessContextsEqual => "AreDpiAwarenessContextsEqual",
            DpiFunction::GetWindowDpiAwarenessContext => "GetWindowDpiAwarenessContext",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }
}

/// A source of DPI awareness context functions that may or may not exist on the running OS.
///
/// The call methods are only invoked after [`DpiApi::is_available`] returned `true` for the
/// matching [`DpiFunction`]. Whatever the OS returns is passed back unchanged, including
/// [`DpiAwarenessContext::UNSPECIFIED`].
pub trait DpiApi {
    /// Whether an entry point with this exported name can be resolved at runtime.
    fn is_api_available(&self, name: &str) -> bool;

    fn is_available(&self, function: DpiFunction) -> bool {
        self.is_api_available(function.name())
    }

    fn get_thread_dpi_awareness_context(&self) -> DpiAwarenessContext;

    /// Returns the previous context, or [`DpiAwarenessContext::UNSPECIFIED`] if the OS
    /// rejected `context`.
    fn set_thread_dpi_awareness_context(
        &self,
        context: DpiAwarenessContext,
    ) -> DpiAwarenessContext;

    fn are_dpi_awareness_contexts_equal(
        &self,
        a: DpiAwarenessContext,
        b: DpiAwarenessContext,
    ) -> bool;

    fn get_window_dpi_awareness_context(
        &self,
        window: WindowHandle,
    ) -> DpiAwarenessContext;
}

impl<T: DpiApi + ?Sized> DpiApi for &T {
    fn is_api_available(&self, name: &str) -> bool {
        (**self).is_api_available(name)
    }

    fn is_available(&self, function: DpiFunction) -> bool {
        (**self).is_available(function)
    }

    fn get_thread_dpi_awareness_context(&self) -> DpiAwarenessContext {
        (**self).get_thread_dpi_awareness_context()
    }

    fn set_thread_dpi_awareness_context(
        &self,
        context: DpiAwarenessContext,
    ) -> DpiAwarenessContext {
        (**self).set_thread_dpi_awareness_context(context)
    }

    fn are_dpi_awareness_contexts_equal(
        &self,
        a: DpiAwarenessContext,
        b: DpiAwarenessContext,
    ) -> bool {
        (**self).are_dpi_awareness_contexts_equal(a, b)
    }

    fn get_window_dpi_awareness_context(
        &self,
        window: WindowHandle,
    ) -> DpiAwarenessContext {
        (**self).get_window_dpi_awareness_context(window)
    }
}

impl<T: DpiApi + ?Sized> DpiApi for Box<T> {
    fn is_api_available(&self, name: &str) -> bool {
        (**self).is_api_available(name)
    }

    fn is_available(&self, function: DpiFunction) -> bool {
        (**self).is_available(function)
    }

    fn get_thread_dpi_awareness_context(&self) -> DpiAwarenessContext {
        (**self).get_thread_dpi_awareness_context()
    }

    fn set_thread_dpi_awareness_context(
        &self,
        context: DpiAwarenessContext,
    ) -> DpiAwarenessContext {
        (**self).set_thread_dpi_awareness_context(context)
    }

    fn are_dpi_awareness_contexts_equal(
        &self,
        a: DpiAwarenessContext,
        b: DpiAwarenessContext,
    ) -> bool {
        (**self).are_dpi_awareness_contexts_equal(a, b)
    }

    fn get_window_dpi_awareness_context(
        &self,
        window: WindowHandle,
    ) -> DpiAwarenessContext {
        (**self).get_window_dpi_awareness_context(window)
    }
}
