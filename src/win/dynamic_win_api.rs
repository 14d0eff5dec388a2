use std::ffi::{c_void, CString, OsStr};
use std::os::windows::ffi::OsStrExt;

use windows_sys::core::BOOL;
use windows_sys::Win32::Foundation::{FARPROC, HMODULE, HWND};
use windows_sys::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};
use windows_sys::Win32::UI::HiDpi::DPI_AWARENESS_CONTEXT;

use crate::{DpiApi, DpiAwarenessContext, DpiFunction, WindowHandle};

type GetThreadDpiAwarenessContextFn = unsafe extern "system" fn() -> DPI_AWARENESS_CONTEXT;

type SetThreadDpiAwarenessContextFn =
    unsafe extern "system" fn(value: DPI_AWARENESS_CONTEXT) -> DPI_AWARENESS_CONTEXT;

type AreDpiAwarenessContextsEqualFn =
    unsafe extern "system" fn(a: DPI_AWARENESS_CONTEXT, b: DPI_AWARENESS_CONTEXT) -> BOOL;

type GetWindowDpiAwarenessContextFn =
    unsafe extern "system" fn(hwnd: HWND) -> DPI_AWARENESS_CONTEXT;

macro_rules! resolve {
    ($module:expr, $function:expr, $ty:ty) => {
        proc_address($module, $function.name())
            .map(|f| unsafe { std::mem::transmute::<unsafe extern "system" fn() -> isize, $ty>(f) })
    };
}

/// Provides access to the DPI awareness context functions in "user32.dll", which only exist
/// from Windows 10, version 1607 onwards.
///
/// Each function is resolved once when the library is loaded. A function that is missing from
/// the running Windows version stays `None` and [`DpiApi::is_available`] reports it, so the
/// accessor can return its legacy result without calling anything.
#[derive(Debug)]
pub struct User32DpiApi {
    user32_library: HMODULE,
    get_thread: Option<GetThreadDpiAwarenessContextFn>,
    set_thread: Option<SetThreadDpiAwarenessContextFn>,
    are_equal: Option<AreDpiAwarenessContextsEqualFn>,
    get_window: Option<GetWindowDpiAwarenessContextFn>,
}

// The module handle and the function pointers stay valid for the lifetime of the process.
unsafe impl Send for User32DpiApi {}
unsafe impl Sync for User32DpiApi {}

impl User32DpiApi {
    /// Loads "user32.dll" and resolves the DPI awareness context functions. If the library
    /// cannot be loaded every function is reported as unavailable.
    pub fn load() -> Self {
        let user32_library = unsafe { LoadLibraryW(to_wstr("user32.dll").as_ptr()) };
        if user32_library.is_null() {
            log::warn!("failed to load user32.dll, DPI awareness contexts are unavailable");
        }

        let api = Self {
            user32_library,
            get_thread: resolve!(
                user32_library,
                DpiFunction::GetThreadDpiAwarenessContext,
                GetThreadDpiAwarenessContextFn
            ),
            set_thread: resolve!(
                user32_library,
                DpiFunction::SetThreadDpiAwarenessContext,
                SetThreadDpiAwarenessContextFn
            ),
            are_equal: resolve!(
                user32_library,
                DpiFunction::AreDpiAwarenessContextsEqual,
                AreDpiAwarenessContextsEqualFn
            ),
            get_window: resolve!(
                user32_library,
                DpiFunction::GetWindowDpiAwarenessContext,
                GetWindowDpiAwarenessContextFn
            ),
        };

        for function in DpiFunction::ALL {
            log::trace!("{}: available = {}", function.name(), api.is_available(function));
        }

        api
    }
}

impl DpiApi for User32DpiApi {
    fn is_api_available(&self, name: &str) -> bool {
        proc_address(self.user32_library, name).is_some()
    }

    fn is_available(&self, function: DpiFunction) -> bool {
        match function {
            DpiFunction::GetThreadDpiAwarenessContext => self.get_thread.is_some(),
            DpiFunction::SetThreadDpiAwarenessContext => self.set_thread.is_some(),
            DpiFunction::AreDpiAwarenessContextsEqual => self.are_equal.is_some(),
            DpiFunction::GetWindowDpiAwarenessContext => self.get_window.is_some(),
        }
    }

    fn get_thread_dpi_awareness_context(&self) -> DpiAwarenessContext {
        match self.get_thread {
            Some(get_thread) => from_os(unsafe { get_thread() }),
            None => DpiAwarenessContext::UNSPECIFIED,
        }
    }

    fn set_thread_dpi_awareness_context(
        &self,
        context: DpiAwarenessContext,
    ) -> DpiAwarenessContext {
        match self.set_thread {
            Some(set_thread) => from_os(unsafe { set_thread(to_os(context)) }),
            None => DpiAwarenessContext::UNSPECIFIED,
        }
    }

    fn are_dpi_awareness_contexts_equal(
        &self,
        a: DpiAwarenessContext,
        b: DpiAwarenessContext,
    ) -> bool {
        match self.are_equal {
            Some(are_equal) => unsafe { are_equal(to_os(a), to_os(b)) != 0 },
            None => false,
        }
    }

    fn get_window_dpi_awareness_context(
        &self,
        window: WindowHandle,
    ) -> DpiAwarenessContext {
        match self.get_window {
            Some(get_window) => from_os(unsafe { get_window(window.as_raw() as HWND) }),
            None => DpiAwarenessContext::UNSPECIFIED,
        }
    }
}

fn proc_address(module: HMODULE, name: &str) -> FARPROC {
    if module.is_null() {
        return None;
    }

    // Names with an interior NUL can't be exported symbols.
    let name = CString::new(name).ok()?;
    unsafe { GetProcAddress(module, name.as_ptr() as *const u8) }
}

fn from_os(context: DPI_AWARENESS_CONTEXT) -> DpiAwarenessContext {
    DpiAwarenessContext::from_raw(context as isize)
}

fn to_os(context: DpiAwarenessContext) -> DPI_AWARENESS_CONTEXT {
    context.as_raw() as *mut c_void
}

fn to_wstr(str: &str) -> Vec<u16> {
    let mut wide: Vec<u16> = OsStr::new(str).encode_wide().collect();
    wide.push(0);
    wide
}
