// FFI functions are inherently unsafe: callers must ensure pointer validity.
#![allow(clippy::missing_safety_doc)]

// porter-ffi: C ABI over the process-wide stemmer handle.
//
// There is no handle object on the C side. Every call goes to the single
// handle returned by `::porter_stem::global()`, which starts with an empty
// stopword set.
//
// Memory management rules:
// - Returned strings: caller must free with `porter_free_str`.
// - Error messages written to `error_out`: caller must free with `porter_free_str`.
// - `porter_version` returns a static string that must NOT be freed.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;
use std::str::Utf8Error;

use porter_core::StemMode;
use porter_stem::PorterHandle;

// ── Stemming ────────────────────────────────────────────────────

/// Stem a word.
///
/// `plurals_only` selects plurals-only mode when non-zero. Returns a
/// heap-allocated C string, or NULL if the word is NULL, not UTF-8, or longer
/// than the stemmer accepts. On failure, if `error_out` is non-NULL, it
/// receives a heap-allocated error message.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_stem(
    word: *const c_char,
    plurals_only: c_int,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(word) = cstr_to_str(word) else {
        set_error(error_out, "word is null or not valid UTF-8");
        return ptr::null_mut();
    };
    let mode = StemMode::from_plurals_only(plurals_only != 0);
    match ::porter_stem::global().stem_with_mode(word, mode) {
        Ok(stem) => str_to_c(&stem),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

// ── Stopwords ───────────────────────────────────────────────────

/// Replace the stopword set with `count` words read from `words`.
///
/// Returns 0 on success. If any element is NULL or not UTF-8 the whole batch
/// is rejected, the previous set stays active, and the error code is
/// returned (see `porter_core::error`). A NULL `words` with a non-zero
/// `count` is rejected the same way. `count == 0` clears the set.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_set_stopwords(
    words: *const *const c_char,
    count: usize,
    error_out: *mut *mut c_char,
) -> c_int {
    let entries: &[*const c_char] = if count == 0 {
        &[]
    } else if words.is_null() {
        set_error(error_out, "stopword array is null");
        return porter_core::error::ERR_MALFORMED_STOPWORD;
    } else {
        unsafe { slice::from_raw_parts(words, count) }
    };

    let batch = entries.iter().map(|&p| entry_to_str(p));
    match ::porter_stem::global().try_set_stopwords(batch) {
        Ok(()) => 0,
        Err(e) => {
            set_error(error_out, &e.to_string());
            e.code()
        }
    }
}

/// Check whether a word is in the current stopword set.
/// Returns 1 if it is, 0 if not, -1 if the word is NULL or not UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_is_stopword(word: *const c_char) -> c_int {
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    if ::porter_stem::global().is_stopword(word) { 1 } else { 0 }
}

/// Number of words in the current stopword set.
#[unsafe(no_mangle)]
pub extern "C" fn porter_stopword_count() -> usize {
    ::porter_stem::global().stopword_count()
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn porter_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(PorterHandle::version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by porter functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_free_str(s: *mut c_char) {
    free_c_str(s);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

/// Why a stopword array element could not be read.
#[derive(Debug, thiserror::Error)]
enum EntryError {
    #[error("null pointer")]
    Null,
    #[error("not valid UTF-8 ({0})")]
    Utf8(#[from] Utf8Error),
}

fn entry_to_str<'a>(s: *const c_char) -> Result<&'a str, EntryError> {
    if s.is_null() {
        return Err(EntryError::Null);
    }
    Ok(unsafe { CStr::from_ptr(s) }.to_str()?)
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}
