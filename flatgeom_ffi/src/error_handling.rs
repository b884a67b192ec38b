use std::{cell::RefCell, ffi::CString};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Name of the function that failed.
    pub function_name: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, function_name: CString) -> Self {
        LastErrorData {
            error_msg,
            function_name,
        }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

fn to_c_string<T: Into<Vec<u8>>>(bytes: T, fallback: &'static str) -> CString {
    CString::new(bytes).unwrap_or_else(|_| CString::new(fallback).unwrap_or_default())
}

/// Set last error information.
///
/// `error_msg` and `function_name` are turned into CStrings from bytes, interior nulls are
/// replaced by a fallback message.
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T, function_name: &str) {
    let msg = to_c_string(error_msg, "failed to create error message string");
    let name = to_c_string(function_name, "failed to create function name string");

    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = Some(LastErrorData::new(msg, name));
    });
}

/// Clear the last error information for the current thread.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = None;
    });
}
