use crate::{FormBody, FormBodyError, FormField, Result};

/// Parse URL-encoded form data into ordered fields.
///
/// Segments are split on `&` and each one on its first `=`. Empty segments
/// are skipped; order and duplicate keys are kept. `+` decodes to a space
/// and `%XX` escapes to bytes. Malformed escapes are kept literally.
pub fn parse_form_data(data: &str) -> Result<FormBody> {
    let mut fields = Vec::new();

    for pair in data.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| FormBodyError::Parse(format!("missing '=' in segment '{pair}'")))?;

        fields.push(FormField::new(decode_component(key)?, decode_component(value)?));
    }

    log::debug!("Parsed {} form fields", fields.len());
    Ok(FormBody::from(fields))
}

fn decode_component(component: &str) -> Result<String> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| FormBodyError::Parse(format!("'{component}' is not valid UTF-8: {e}")))
}
