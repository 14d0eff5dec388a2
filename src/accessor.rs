use std::marker::PhantomData;

use crate::{DpiApi, DpiAwarenessContext, DpiFunction, Error, PlatformDpiApi, Result, WindowHandle};

/// Probes for the DPI awareness context APIs and forwards to them when they exist.
///
/// On an OS without these APIs every query returns `None` instead of failing, so callers can
/// treat older Windows versions as an ordinary branch.
#[derive(Debug)]
pub struct DpiContextAccessor<A: DpiApi = PlatformDpiApi> {
    api: A,
}

impl DpiContextAccessor<PlatformDpiApi> {
    /// An accessor backed by the running platform.
    pub fn platform() -> Self {
        Self::new(PlatformDpiApi::load())
    }
}

impl<A: DpiApi> DpiContextAccessor<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn into_api(self) -> A {
        self.api
    }

    /// Whether the named entry point can be resolved at runtime.
    pub fn is_api_available(&self, name: &str) -> bool {
        self.api.is_api_available(name)
    }

    pub fn is_function_available(&self, function: DpiFunction) -> bool {
        self.api.is_available(function)
    }

    pub fn is_get_thread_dpi_awareness_context_available(&self) -> bool {
        self.is_function_available(DpiFunction::GetThreadDpiAwarenessContext)
    }

    pub fn is_set_thread_dpi_awareness_context_available(&self) -> bool {
        self.is_function_available(DpiFunction::SetThreadDpiAwarenessContext)
    }

    pub fn is_are_dpi_awareness_contexts_equal_available(&self) -> bool {
        self.is_function_available(DpiFunction::AreDpiAwarenessContextsEqual)
    }

    pub fn is_get_window_dpi_awareness_context_available(&self) -> bool {
        self.is_function_available(DpiFunction::GetWindowDpiAwarenessContext)
    }

    /// The calling thread's DPI awareness context, or `None` on a legacy OS.
    pub fn try_get_thread_dpi_awareness_context(&self) -> Option<DpiAwarenessContext> {
        if !self.is_get_thread_dpi_awareness_context_available() {
            log::debug!("GetThreadDpiAwarenessContext is unavailable, no thread context");
            return None;
        }

        Some(self.api.get_thread_dpi_awareness_context())
    }

    /// Sets the calling thread's DPI awareness context and returns the previous one.
    ///
    /// Returns `Ok(None)` without touching the thread on a legacy OS. When the API exists a
    /// context has to be supplied, otherwise this fails with [`Error::MissingContext`]. A
    /// context the OS rejects yields `Ok(Some(DpiAwarenessContext::UNSPECIFIED))`.
    pub fn try_set_thread_dpi_awareness_context(
        &self,
        context: Option<DpiAwarenessContext>,
    ) -> Result<Option<DpiAwarenessContext>> {
        if !self.is_set_thread_dpi_awareness_context_available() {
            log::debug!("SetThreadDpiAwarenessContext is unavailable, thread context unchanged");
            return Ok(None);
        }

        let context = context.ok_or(Error::MissingContext)?;
        let previous = self.api.set_thread_dpi_awareness_context(context);
        if previous.is_unspecified() {
            log::warn!("SetThreadDpiAwarenessContext rejected {:?}", context);
        }

        Ok(Some(previous))
    }

    /// The window's DPI awareness context, or `None` on a legacy OS. A handle the OS does not
    /// recognize yields [`DpiAwarenessContext::UNSPECIFIED`].
    pub fn try_get_window_dpi_awareness_context(
        &self,
        window: WindowHandle,
    ) -> Option<DpiAwarenessContext> {
        if !self.is_get_window_dpi_awareness_context_available() {
            log::debug!("GetWindowDpiAwarenessContext is unavailable, no context for {:?}", window);
            return None;
        }

        Some(self.api.get_window_dpi_awareness_context(window))
    }

    /// Compares two possibly absent contexts.
    ///
    /// Two absent contexts are equal, a present and an absent one never are. Present contexts
    /// are compared by the OS, and are never equal when the OS cannot compare them.
    pub fn try_are_dpi_awareness_contexts_equal(
        &self,
        a: Option<DpiAwarenessContext>,
        b: Option<DpiAwarenessContext>,
    ) -> bool {
        let (a, b) = match (a, b) {
            (None, None) => return true,
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };

        if !self.is_are_dpi_awareness_contexts_equal_available() {
            // Raw values are not comparable across OS versions.
            log::debug!("AreDpiAwarenessContextsEqual is unavailable, contexts treated as unequal");
            return false;
        }

        self.api.are_dpi_awareness_contexts_equal(a, b)
    }

    /// Switches the calling thread to `context` until the returned guard is dropped.
    ///
    /// On a legacy OS, or when the OS rejects `context`, the guard does nothing.
    pub fn enter_thread_dpi_scope(
        &self,
        context: DpiAwarenessContext,
    ) -> Result<ThreadDpiScope<'_, A>> {
        let previous = self
            .try_set_thread_dpi_awareness_context(Some(context))?
            .filter(|previous| !previous.is_unspecified());

        Ok(ThreadDpiScope { accessor: self, previous, _not_send: PhantomData })
    }
}

/// Restores the thread's previous DPI awareness context when dropped.
///
/// Must be dropped on the thread that created it.
#[must_use = "the previous context is restored as soon as the scope is dropped"]
pub struct ThreadDpiScope<'a, A: DpiApi> {
    accessor: &'a DpiContextAccessor<A>,
    previous: Option<DpiAwarenessContext>,
    _not_send: PhantomData<*const ()>,
}

impl<A: DpiApi> ThreadDpiScope<'_, A> {
    /// The context that will be restored, if any.
    pub fn previous(&self) -> Option<DpiAwarenessContext> {
        self.previous
    }

    pub fn is_active(&self) -> bool {
        self.previous.is_some()
    }
}

impl<A: DpiApi> Drop for ThreadDpiScope<'_, A> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            if let Err(err) = self.accessor.try_set_thread_dpi_awareness_context(Some(previous)) {
                log::warn!("failed to restore thread DPI awareness context: {}", err);
            }
        }
    }
}
