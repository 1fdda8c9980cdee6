//! Encoding of ordered fields into an `application/x-www-form-urlencoded` body.

use crate::field::is_plain;
use crate::{FormBodyError, FormField};
use std::fmt;
use std::str::FromStr;

/// Percent-encode a single form value.
///
/// ASCII alphanumerics and `-`, `_`, `.`, `*` pass through, space becomes
/// `+`, and every other UTF-8 byte becomes `%XX` with uppercase hex.
///
/// ```rust
/// assert_eq!(form_body::encode_value("ra hul"), "ra+hul");
/// assert_eq!(form_body::encode_value("é/~"), "%C3%A9%2F%7E");
/// ```
pub fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Build a form body from ordered `(key, value)` pairs.
///
/// Each pair is written as `key=encoded(value)` and pairs are joined with
/// `&` in input order. Keys are written unencoded; a key containing
/// characters that need encoding is logged as a warning and still emitted
/// verbatim. An empty input produces an empty string.
///
/// # Examples
///
/// ```rust
/// let body = form_body::build([
///     ("data", "https://final.example.com/path"),
///     ("name", ""),
/// ]);
/// assert_eq!(body, "data=https%3A%2F%2Ffinal.example.com%2Fpath&name=");
/// ```
pub fn build<I, K, V>(fields: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut body = String::new();
    let mut count = 0usize;

    for (key, value) in fields {
        let key = key.as_ref();
        if !is_plain(key) {
            log::warn!("Form key '{key}' needs encoding but is emitted unencoded");
        }

        if count > 0 {
            body.push('&');
        }
        body.push_str(key);
        body.push('=');
        body.extend(form_urlencoded::byte_serialize(value.as_ref().as_bytes()));
        count += 1;
    }

    log::debug!("Built form body: {} fields, {} bytes", count, body.len());
    body
}

/// An ordered, immutable list of form fields.
///
/// `Display` renders the encoded body and `FromStr` decodes one, so a body
/// can be round-tripped through text.
///
/// # Examples
///
/// ```rust
/// use form_body::FormBody;
///
/// let body = FormBody::builder()
///     .field("name", "ra hul")
///     .field("loc1tion", "delhi")
///     .build();
///
/// assert_eq!(body.to_string(), "name=ra+hul&loc1tion=delhi");
/// assert_eq!(body.get("name"), Some("ra hul"));
///
/// let decoded: FormBody = "name=ra+hul&loc1tion=delhi".parse().unwrap();
/// assert_eq!(decoded, body);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormBody {
    fields: Vec<FormField>,
}

impl FormBody {
    /// Start an empty [`FormBodyBuilder`].
    pub fn builder() -> FormBodyBuilder {
        FormBodyBuilder::new()
    }

    /// All fields in send order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Number of fields, duplicates included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the body has no fields; it then encodes to `""`.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of the first field with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.value.as_str())
    }

    /// The encoded `key=value&...` body.
    pub fn encode(&self) -> String {
        build(
            self.fields
                .iter()
                .map(|field| (field.key.as_str(), field.value.as_str())),
        )
    }

    /// Iterate over the fields in send order.
    pub fn iter(&self) -> std::slice::Iter<'_, FormField> {
        self.fields.iter()
    }
}

impl From<Vec<FormField>> for FormBody {
    fn from(fields: Vec<FormField>) -> Self {
        Self { fields }
    }
}

impl fmt::Display for FormBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for FormBody {
    type Err = FormBodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_form_data(s)
    }
}

impl IntoIterator for FormBody {
    type Item = FormField;
    type IntoIter = std::vec::IntoIter<FormField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormBody {
    type Item = &'a FormField;
    type IntoIter = std::slice::Iter<'a, FormField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Consuming builder for [`FormBody`]; fields keep the order they are added in.
#[derive(Debug, Default)]
pub struct FormBodyBuilder {
    fields: Vec<FormField>,
}

impl FormBodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::new(key, value));
        self
    }

    pub fn fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FormField>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> FormBody {
        FormBody {
            fields: self.fields,
        }
    }
}
