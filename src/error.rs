use thiserror::Error;

/// Error types for form body operations.
///
/// Building a body never fails: percent-encoding is total over `&str`.
/// These variants cover the surfaces around it, namely parsing fields
/// supplied on the command line and decoding an existing body.
///
/// # Error Handling Examples
///
/// ```rust
/// use form_body::{FormBody, FormBodyError};
///
/// match "name=rahul&broken".parse::<FormBody>() {
///     Ok(body) => println!("{} fields", body.len()),
///     Err(FormBodyError::Parse(msg)) => eprintln!("Bad body: {}", msg),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FormBodyError {
    /// A field given as `KEY=VALUE` text could not be split into a pair.
    ///
    /// # Common Causes
    /// - Missing `=` separator
    /// - Empty key
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Failed to decode an encoded form body.
    ///
    /// Returned for segments without a `=` separator and for escapes that
    /// decode to invalid UTF-8.
    #[error("Failed to parse form body: {0}")]
    Parse(String),

    /// JSON rendering errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
