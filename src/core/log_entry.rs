//! Log entry structure

use super::level_map::SinkLevel;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// Source location of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub module_path: &'static str,
    /// Full path of the enclosing function, empty when unknown
    pub function: &'static str,
}

impl Location {
    pub const fn new(file: &'static str, line: u32, module_path: &'static str) -> Self {
        Self {
            file,
            line,
            module_path,
            function: "",
        }
    }

    #[must_use]
    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = function;
        self
    }

    /// Unqualified name of the enclosing function; closures resolve to the
    /// function that contains them.
    pub fn function_name(&self) -> &'static str {
        self.function
            .rsplit("::")
            .find(|segment| *segment != "{{closure}}")
            .unwrap_or("")
    }
}

/// Location of the caller, captured at the macro expansion site, including
/// the enclosing function.
#[macro_export]
macro_rules! location {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        $crate::Location::new(file!(), line!(), module_path!())
            .with_function(name.strip_suffix("::f").unwrap_or(name))
    }};
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: SinkLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub module_path: Option<String>,
    pub function: Option<String>,
    pub thread_id: String,
    pub thread_name: Option<String>,
}

impl LogEntry {
    /// Escape line breaks and tabs so a single call always renders as a single line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: SinkLevel, message: impl AsRef<str>) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message.as_ref()),
            timestamp: Local::now(),
            file: None,
            line: None,
            module_path: None,
            function: None,
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.file = Some(location.file.to_string());
        self.line = Some(location.line);
        self.module_path = Some(location.module_path.to_string());
        let function = location.function_name();
        self.function = (!function.is_empty()).then(|| function.to_string());
        self
    }
}
