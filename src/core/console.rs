//! Console logging.
//!
//! On `wasm32` messages go to the browser console through `web-sys`.
//! Native builds (tests, benches) drop them.

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}

/// `format!`-style wrapper around [`log`].
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::console::log(&format!($($arg)*))
    };
}

/// `format!`-style wrapper around [`warn`].
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::console::warn(&format!($($arg)*))
    };
}
