//! GitHub Actions workflow commands.
//!
//! Log lines go to stdout as `::command::data`. Step outputs are appended to
//! the file named by `GITHUB_OUTPUT`, falling back to the legacy
//! `::set-output` command when the runner does not provide one.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::AppError;
use crate::ports::{ActionLog, ActionOutput};

pub struct WorkflowCommands<W: Write = io::Stdout> {
    out: RefCell<W>,
    output_file: Option<PathBuf>,
}

impl WorkflowCommands<io::Stdout> {
    /// Write to stdout and to `GITHUB_OUTPUT` when the runner sets it.
    pub fn from_env() -> Self {
        let output_file =
            std::env::var_os("GITHUB_OUTPUT").filter(|v| !v.is_empty()).map(PathBuf::from);
        Self::new(io::stdout(), output_file)
    }
}

impl<W: Write> WorkflowCommands<W> {
    pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
        Self { out: RefCell::new(out), output_file }
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn issue(&self, command: &str, properties: &[(&str, &str)], data: &str) {
        let mut line = format!("::{}", command);
        if !properties.is_empty() {
            let props: Vec<String> = properties
                .iter()
                .map(|(key, value)| format!("{}={}", key, escape_property(value)))
                .collect();
            line.push(' ');
            line.push_str(&props.join(","));
        }
        line.push_str("::");
        line.push_str(&escape_data(data));
        self.write_line(&line);
    }

    fn write_line(&self, line: &str) {
        // A broken stdout must not abort the migration.
        let _ = writeln!(self.out.borrow_mut(), "{}", line);
    }
}

impl<W: Write> ActionLog for WorkflowCommands<W> {
    fn debug(&self, message: &str) {
        self.issue("debug", &[], message);
    }

    fn info(&self, message: &str) {
        self.write_line(message);
    }

    fn warning(&self, message: &str) {
        self.issue("warning", &[], message);
    }

    fn error(&self, message: &str) {
        self.issue("error", &[], message);
    }

    fn add_mask(&self, secret: &str) {
        self.issue("add-mask", &[], secret);
    }
}

impl<W: Write> ActionOutput for WorkflowCommands<W> {
    fn set_output(&self, name: &str, value: &str) -> Result<(), AppError> {
        let Some(path) = &self.output_file else {
            self.issue("set-output", &[("name", name)], value);
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
            AppError::InternalError(format!("Failed to open GITHUB_OUTPUT: {}", e))
        })?;
        file.write_all(file_command_entry(name, value).as_bytes()).map_err(|e| {
            AppError::InternalError(format!("Failed to write GITHUB_OUTPUT: {}", e))
        })?;
        Ok(())
    }
}

/// Format one `name=value` entry, switching to a heredoc for multi-line values.
fn file_command_entry(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }
    let mut seed = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let mut delimiter = format!("ghadelimiter_{}", seed);
    while value.contains(&delimiter) {
        seed = seed.wrapping_add(1);
        delimiter = format!("ghadelimiter_{}", seed);
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
