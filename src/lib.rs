//! Build `application/x-www-form-urlencoded` bodies from ordered fields.
//!
//! ```rust
//! let body = form_body::build([("name", "ra hul"), ("loc1tion", "delhi")]);
//! assert_eq!(body, "name=ra+hul&loc1tion=delhi");
//! ```

pub mod body;
pub mod error;
pub mod field;
pub mod form_data;
pub mod output;

pub use body::{build, encode_value, FormBody, FormBodyBuilder};
pub use error::FormBodyError;
pub use field::{reference_fields, FormField, REFERENCE_FIXED_FIELDS};
pub use form_data::parse_form_data;

pub type Result<T> = std::result::Result<T, FormBodyError>;
