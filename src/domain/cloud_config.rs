//! Atlas project file for migration directories served by Atlas Cloud.

use url::form_urlencoded;

use super::input::CloudInput;
use super::AppError;

/// File extension atlas expects for project files.
pub const CLOUD_CONFIG_EXTENSION: &str = "hcl";

/// Render the project file that points atlas at a cloud migration directory.
///
/// The env block is named after `atlas.env`, so it is selected by whatever name
/// is passed with `--env`.
pub fn render_cloud_config(cloud: &CloudInput) -> Result<String, AppError> {
    let dir = cloud.dir.as_deref().ok_or_else(|| {
        AppError::InternalError("cloud configuration requested without cloud-dir".into())
    })?;
    let token = cloud.token.as_deref().ok_or_else(|| {
        AppError::InternalError("cloud configuration requested without cloud-token".into())
    })?;

    let mut dir_url = format!("atlas://{}", dir);
    if let Some(tag) = cloud.tag.as_deref() {
        dir_url.push_str("?tag=");
        dir_url.extend(form_urlencoded::byte_serialize(tag.as_bytes()));
    }

    let mut lines = vec![
        "env {".to_string(),
        "  name = atlas.env".to_string(),
        "  migration {".to_string(),
        format!("    dir = {}", hcl_string(&dir_url)),
        "  }".to_string(),
        "}".to_string(),
        String::new(),
        "atlas {".to_string(),
        "  cloud {".to_string(),
        format!("    token = {}", hcl_string(token)),
    ];
    if let Some(url) = cloud.url.as_deref() {
        lines.push(format!("    url = {}", hcl_string(url)));
    }
    lines.push("  }".to_string());
    lines.push("}".to_string());

    Ok(lines.join("\n") + "\n")
}

/// Quote `value` as an HCL string literal, escaping template sequences.
fn hcl_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
