// WASM bindings for the Porter stemmer.
//
// Provides a `WasmStemmer` class exported via wasm-bindgen. Each instance
// owns its own `PorterHandle`, so stopword sets are per instance. Options
// cross the boundary as plain objects through serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const stemmer = new WasmStemmer();                 // full mode
//   stemmer.stem("caresses");                          // => "caress"
//   stemmer.stemWith("motoring", { mode: "pluralsOnly" }); // => "motoring"
//   stemmer.setStopwords(["the", "news"]);
//   stemmer.stem("news");                              // => "news"
//   stemmer.stopwords();                               // => ["news", "the"]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use porter_core::{StemError, StemmerOptions};
use porter_stem::PorterHandle;

// ============================================================================
// Conversion helpers
// ============================================================================

fn stem_error_to_js(e: StemError) -> JsError {
    JsError::new(&e.to_string())
}

fn options_from_js(value: JsValue) -> Result<StemmerOptions, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(StemmerOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Serializable summary of an instance, returned by `info()`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStemmerInfo {
    version: &'static str,
    options: StemmerOptions,
    stopword_count: usize,
}

// ============================================================================
// WasmStemmer
// ============================================================================

/// Porter stemmer for WebAssembly.
#[wasm_bindgen]
pub struct WasmStemmer {
    handle: PorterHandle,
}

#[wasm_bindgen]
impl WasmStemmer {
    /// Create a stemmer. `options` is optional: `{ mode: "full" | "pluralsOnly" }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WasmStemmer, JsError> {
        let options = options_from_js(options)?;
        Ok(WasmStemmer {
            handle: PorterHandle::with_options(options),
        })
    }

    /// Stem a word in the instance's mode.
    pub fn stem(&self, word: &str) -> Result<String, JsError> {
        self.handle.stem(word).map_err(stem_error_to_js)
    }

    /// Stem a word with per-call options.
    #[wasm_bindgen(js_name = "stemWith")]
    pub fn stem_with(&self, word: &str, options: JsValue) -> Result<String, JsError> {
        let options = options_from_js(options)?;
        self.handle
            .stem_with_mode(word, options.mode)
            .map_err(stem_error_to_js)
    }

    /// Replace the stopword set. Every element must be a string; otherwise
    /// the whole array is rejected and the previous set stays active.
    #[wasm_bindgen(js_name = "setStopwords")]
    pub fn set_stopwords(&self, words: js_sys::Array) -> Result<(), JsError> {
        let entries = words
            .iter()
            .map(|v| v.as_string().ok_or("not a string"));
        self.handle
            .try_set_stopwords(entries)
            .map_err(stem_error_to_js)
    }

    #[wasm_bindgen(js_name = "isStopword")]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.handle.is_stopword(word)
    }

    #[wasm_bindgen(js_name = "stopwordCount")]
    pub fn stopword_count(&self) -> usize {
        self.handle.stopword_count()
    }

    /// Current stopwords, sorted.
    pub fn stopwords(&self) -> Vec<String> {
        self.handle
            .stopwords()
            .sorted()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Version, options and stopword count as a plain object.
    pub fn info(&self) -> Result<JsValue, JsError> {
        let info = JsStemmerInfo {
            version: PorterHandle::version(),
            options: self.handle.options(),
            stopword_count: self.handle.stopword_count(),
        };
        serde_wasm_bindgen::to_value(&info).map_err(|e| JsError::new(&e.to_string()))
    }
}
