mod dynamic_win_api;

pub use dynamic_win_api::User32DpiApi;

pub type PlatformDpiApi = User32DpiApi;
