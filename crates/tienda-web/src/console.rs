//! Log sink writing to the browser console.

use std::rc::Rc;

use tienda_observability::{LogEntry, LogLevel, LogSink};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A sink that sends each rendered line to the console method matching its
/// level.
pub fn console_sink() -> LogSink {
    LogSink::Callback(Rc::new(|entry: &LogEntry, line: &str| {
        let line = JsValue::from_str(line);
        match entry.level {
            LogLevel::Error => console::error_1(&line),
            LogLevel::Warn => console::warn_1(&line),
            LogLevel::Info => console::info_1(&line),
            LogLevel::Debug | LogLevel::Trace => console::debug_1(&line),
        }
    }))
}
