//! Console renderings of a form body.
//!
//! These return text rather than printing it; the binary decides where it goes.

use crate::{FormBody, FormField, Result};

/// The `Form body to send:` block followed by the `Key -> Value` listing.
///
/// Only `listed` fields appear in the listing, so fixed fields can be sent
/// without being echoed.
///
/// ```rust
/// use form_body::{output, FormBody};
///
/// let body = FormBody::builder()
///     .field("host", "bad-tracker.com")
///     .field("name", "ra hul")
///     .build();
/// assert_eq!(
///     output::render_text(&body, &body.fields()[1..]),
///     "Form body to send:\nhost=bad-tracker.com&name=ra+hul\n\nKey -> Value\nname -> ra hul\n"
/// );
/// ```
pub fn render_text(body: &FormBody, listed: &[FormField]) -> String {
    format!(
        "Form body to send:\n{}\n\n{}",
        body.encode(),
        render_pairs(listed)
    )
}

/// `Key -> Value` header and one `<key> -> <value>` line per field, raw values.
pub fn render_pairs(fields: &[FormField]) -> String {
    let mut out = String::from("Key -> Value\n");
    for field in fields {
        out.push_str(&format!("{} -> {}\n", field.key, field.value));
    }
    out
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    body: String,
    fields: &'a [FormField],
}

/// Pretty JSON object with the encoded `body` and the raw `fields`.
pub fn render_json(body: &FormBody) -> Result<String> {
    let output = JsonOutput {
        body: body.encode(),
        fields: body.fields(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
