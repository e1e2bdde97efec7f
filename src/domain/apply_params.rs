use url::Url;

use super::input::TxMode;

/// Name of the environment declared by the rendered cloud configuration.
pub const CLOUD_ENV_NAME: &str = "atlas";

const REDACTED: &str = "xxxxx";

/// Arguments for one `atlas migrate apply` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyParams {
    pub url: String,
    pub dir_url: Option<String>,
    pub config_url: Option<String>,
    pub env: Option<String>,
    pub amount: u64,
    pub tx_mode: Option<TxMode>,
    pub baseline_version: Option<String>,
    pub allow_dirty: bool,
    pub revisions_schema: Option<String>,
}

impl ApplyParams {
    /// Command-line arguments following the binary name.
    pub fn to_args(&self) -> Vec<String> {
        let mut args: Vec<String> =
            ["migrate", "apply", "--format", "{{ json . }}"].map(String::from).to_vec();

        if let Some(env) = &self.env {
            args.extend(["--env".into(), env.clone()]);
        }
        if let Some(config_url) = &self.config_url {
            args.extend(["--config".into(), config_url.clone()]);
        }
        if !self.url.is_empty() {
            args.extend(["--url".into(), self.url.clone()]);
        }
        if let Some(dir_url) = &self.dir_url {
            args.extend(["--dir".into(), dir_url.clone()]);
        }
        if self.allow_dirty {
            args.push("--allow-dirty".into());
        }
        if let Some(schema) = &self.revisions_schema {
            args.extend(["--revisions-schema".into(), schema.clone()]);
        }
        if let Some(baseline) = &self.baseline_version {
            args.extend(["--baseline".into(), baseline.clone()]);
        }
        if let Some(tx_mode) = self.tx_mode {
            args.extend(["--tx-mode".into(), tx_mode.label().to_string()]);
        }
        if self.amount > 0 {
            args.push(self.amount.to_string());
        }
        args
    }

    /// Arguments as they may appear in the run log: the database password is redacted.
    pub fn display_args(&self) -> Vec<String> {
        Self { url: redact_password(&self.url), ..self.clone() }.to_args()
    }
}

/// Password embedded in a database URL, as written in the URL.
pub fn url_password(url: &str) -> Option<String> {
    Url::parse(url).ok()?.password().map(str::to_string)
}

/// Replace the password of a database URL with a placeholder.
pub fn redact_password(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if parsed.password().is_none() || parsed.set_password(Some(REDACTED)).is_err() {
        return url.to_string();
    }
    parsed.to_string()
}

/// Turn a local migration directory into the URL form atlas expects.
///
/// Values that already carry a scheme are passed through.
pub fn dir_url(dir: &str) -> String {
    if has_scheme(dir) { dir.to_string() } else { format!("file://{}", dir) }
}

fn has_scheme(value: &str) -> bool {
    match value.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
