// Error type shared by the stemming engine and the binding crates.
//
// The engine itself is total over its input; the only failures are the two
// validation errors raised at the boundary before the engine runs.

/// Numeric code for [`StemError::InputTooLong`] at the C ABI.
pub const ERR_INPUT_TOO_LONG: i32 = 1;

/// Numeric code for [`StemError::MalformedStopwordEntry`] at the C ABI.
pub const ERR_MALFORMED_STOPWORD: i32 = 2;

/// Error returned by stemming and stopword operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StemError {
    /// The word has more characters than the stemmer buffer accepts.
    #[error("word has {len} characters, the stemmer accepts at most {max}")]
    InputTooLong { len: usize, max: usize },

    /// An element of a stopword batch is not a valid string. The whole batch
    /// is rejected.
    #[error("stopword entry {index} is malformed: {reason}")]
    MalformedStopwordEntry { index: usize, reason: String },
}

impl StemError {
    /// Stable numeric code used by the C ABI.
    pub fn code(&self) -> i32 {
        match self {
            StemError::InputTooLong { .. } => ERR_INPUT_TOO_LONG,
            StemError::MalformedStopwordEntry { .. } => ERR_MALFORMED_STOPWORD,
        }
    }
}
