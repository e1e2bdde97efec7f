//! Scalar parsers for action inputs.

use url::Url;

use super::InputError;

/// Parse a non-negative base-10 integer. Signs and whitespace are rejected.
pub fn parse_amount(input: &'static str, value: &str) -> Result<u64, InputError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidFormat {
            input,
            value: value.to_string(),
            details: "expected a non-negative integer".into(),
        });
    }
    value.parse::<u64>().map_err(|e| InputError::InvalidFormat {
        input,
        value: value.to_string(),
        details: e.to_string(),
    })
}

/// Parse a boolean flag, case-insensitively.
///
/// Accepts `1`, `t`, `true`, `0`, `f` and `false`.
pub fn parse_bool(input: &'static str, value: &str) -> Result<bool, InputError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(InputError::InvalidFormat {
            input,
            value: value.to_string(),
            details: "expected a boolean".into(),
        }),
    }
}

/// Validate that `value` is an absolute http(s) URL.
pub fn parse_service_url(input: &'static str, value: &str) -> Result<Url, InputError> {
    let url = Url::parse(value).map_err(|e| InputError::InvalidFormat {
        input,
        value: value.to_string(),
        details: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(InputError::InvalidFormat {
            input,
            value: value.to_string(),
            details: format!("unsupported scheme '{}'", other),
        }),
    }
}
