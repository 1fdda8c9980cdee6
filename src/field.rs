use crate::FormBodyError;
use std::str::FromStr;

/// Value sent for the `data` field of the reference body.
pub const REFERENCE_DATA: &str = "https://final.example.com/path";
/// Value sent for the `host` field of the reference body.
pub const REFERENCE_HOST: &str = "bad-tracker.com";
/// Number of leading fixed fields in [`reference_fields`].
pub const REFERENCE_FIXED_FIELDS: usize = 2;

/// A single `key=value` entry of a form body.
///
/// Keys are written to the body as-is; only values are percent-encoded.
/// See [`FormField::key_is_plain`] for checking whether a key survives
/// that unencoded.
///
/// # Examples
///
/// ```rust
/// use form_body::FormField;
///
/// let field = FormField::new("name", "rahul");
/// assert_eq!(field.key, "name");
/// assert!(field.key_is_plain());
///
/// let field: FormField = "loc1tion=new delhi".parse().unwrap();
/// assert_eq!(field.value, "new delhi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormField {
    /// Field name, emitted unencoded
    pub key: String,
    /// Raw field value, encoded when the body is built
    pub value: String,
}

impl FormField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether the key is made only of characters the form encoding leaves
    /// unchanged (ASCII alphanumerics, `-`, `_`, `.`, `*`).
    ///
    /// Keys failing this check still go into the body verbatim, which can
    /// produce a body that does not decode back to the same fields.
    pub fn key_is_plain(&self) -> bool {
        is_plain(&self.key)
    }
}

pub(crate) fn is_plain(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'*'))
}

impl<K, V> From<(K, V)> for FormField
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Parses `KEY=VALUE` text, splitting on the first `=`.
///
/// The value is taken literally (no percent-decoding) and may be empty.
impl FromStr for FormField {
    type Err = FormBodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s.split_once('=').ok_or_else(|| {
            FormBodyError::InvalidField(format!("expected KEY=VALUE, got '{s}'"))
        })?;

        if key.is_empty() {
            return Err(FormBodyError::InvalidField(format!("empty key in '{s}'")));
        }

        Ok(Self::new(key, value))
    }
}

/// The four fields of the reference body, in send order: `data` and `host`
/// are fixed, `name` and `loc1tion` come from the caller.
pub fn reference_fields(name: &str, loc1tion: &str) -> Vec<FormField> {
    vec![
        FormField::new("data", REFERENCE_DATA),
        FormField::new("host", REFERENCE_HOST),
        FormField::new("name", name),
        FormField::new("loc1tion", loc1tion),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_plain() {
        assert!(FormField::new("loc1tion", "").key_is_plain());
        assert!(FormField::new("a-b_c.d*", "").key_is_plain());
        assert!(!FormField::new("a b", "").key_is_plain());
        assert!(!FormField::new("a&b", "").key_is_plain());
        assert!(!FormField::new("clé", "").key_is_plain());
    }

    #[test]
    fn test_parse_field_splits_on_first_equals() {
        let field: FormField = "data=a=b".parse().unwrap();
        assert_eq!(field, FormField::new("data", "a=b"));

        let field: FormField = "name=".parse().unwrap();
        assert_eq!(field, FormField::new("name", ""));
    }

    #[test]
    fn test_parse_field_rejects_missing_separator() {
        let err = "name".parse::<FormField>().unwrap_err();
        assert!(matches!(err, FormBodyError::InvalidField(_)));

        let err = "=value".parse::<FormField>().unwrap_err();
        assert!(err.to_string().contains("empty key"));
    }

    #[test]
    fn test_reference_fields_order() {
        let fields = reference_fields("rahul", "delhi");
        let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["data", "host", "name", "loc1tion"]);
        assert_eq!(fields[0].value, REFERENCE_DATA);
        assert_eq!(fields[3].value, "delhi");

        let supplied: Vec<&str> = fields[REFERENCE_FIXED_FIELDS..]
            .iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(supplied, vec!["name", "loc1tion"]);
    }
}
