use std::cell::Cell;

use dpi_context::{
    DpiApi, DpiAwarenessContext, DpiContextAccessor, DpiFunction, Error, UnsupportedDpiApi,
    WindowHandle,
};

/// A Windows build that only shipped the thread queries. Panics if anything else is forwarded.
#[derive(Default)]
struct ThreadOnlyApi {
    thread_context: Cell<isize>,
}

impl DpiApi for ThreadOnlyApi {
    fn is_api_available(&self, name: &str) -> bool {
        matches!(name, "GetThreadDpiAwarenessContext" | "SetThreadDpiAwarenessContext")
    }

    fn get_thread_dpi_awareness_context(&self) -> DpiAwarenessContext {
        DpiAwarenessContext::from_raw(self.thread_context.get())
    }

    fn set_thread_dpi_awareness_context(
        &self,
        context: DpiAwarenessContext,
    ) -> DpiAwarenessContext {
        DpiAwarenessContext::from_raw(self.thread_context.replace(context.as_raw()))
    }

    fn are_dpi_awareness_contexts_equal(
        &self,
        _a: DpiAwarenessContext,
        _b: DpiAwarenessContext,
    ) -> bool {
        panic!("AreDpiAwarenessContextsEqual must not be called");
    }

    fn get_window_dpi_awareness_context(
        &self,
        _window: WindowHandle,
    ) -> DpiAwarenessContext {
        panic!("GetWindowDpiAwarenessContext must not be called");
    }
}

#[test]
fn unsupported_backend_behaves_like_a_legacy_os() {
    let accessor = DpiContextAccessor::new(UnsupportedDpiApi);

    for function in DpiFunction::ALL {
        assert!(!accessor.is_function_available(function));
        assert!(!accessor.is_api_available(function.name()));
    }
    assert!(accessor.try_get_thread_dpi_awareness_context().is_none());
    assert!(accessor.try_set_thread_dpi_awareness_context(None).unwrap().is_none());
    assert!(accessor.try_get_window_dpi_awareness_context(WindowHandle::from_raw(1)).is_none());

    let a = Some(DpiAwarenessContext::SYSTEM_AWARE);
    assert!(accessor.try_are_dpi_awareness_contexts_equal(None, None));
    assert!(!accessor.try_are_dpi_awareness_contexts_equal(a, None));
    assert!(!accessor.try_are_dpi_awareness_contexts_equal(a, a));
}

#[test]
fn partially_supported_os_only_forwards_what_exists() {
    let accessor = DpiContextAccessor::new(ThreadOnlyApi::default());
    let aware = DpiAwarenessContext::PER_MONITOR_AWARE_V2;

    // The thread starts out unspecified, which is a present context, not a legacy result.
    let previous = accessor.try_set_thread_dpi_awareness_context(Some(aware)).unwrap();
    assert!(previous.is_some_and(DpiAwarenessContext::is_unspecified));
    assert_eq!(
        accessor.try_get_thread_dpi_awareness_context().map(DpiAwarenessContext::as_raw),
        Some(aware.as_raw())
    );

    assert!(accessor.try_get_window_dpi_awareness_context(WindowHandle::from_raw(7)).is_none());
    assert!(!accessor.try_are_dpi_awareness_contexts_equal(Some(aware), Some(aware)));
}

#[test]
fn missing_context_is_an_error_when_the_os_can_set_one() {
    let accessor = DpiContextAccessor::new(ThreadOnlyApi::default());

    let err = accessor.try_set_thread_dpi_awareness_context(None).unwrap_err();
    assert!(matches!(err, Error::MissingContext));
}

#[test]
fn boxed_backend() {
    let api: Box<dyn DpiApi> = Box::new(ThreadOnlyApi::default());
    let accessor = DpiContextAccessor::new(api);

    assert!(accessor.is_set_thread_dpi_awareness_context_available());
    assert!(!accessor.is_get_window_dpi_awareness_context_available());
}
