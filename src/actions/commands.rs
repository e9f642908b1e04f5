//! GitHub Actions workflow-command reporter.

use std::env;
use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;

use super::{ActionOutput, ActionReporter};
use crate::github::error::ActionError;

const OUTPUT_FILE_VARIABLE: &str = "GITHUB_OUTPUT";
const HEREDOC_DELIMITER: &str = "ghadelimiter";

/// Escapes a workflow-command message.
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a workflow-command property value.
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Formats an entry for the `GITHUB_OUTPUT` file.
///
/// Single-line values use `name=value`; multi-line values use the heredoc
/// form with a delimiter that does not occur in the value.
fn output_file_entry(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{name}={value}\n");
    }

    let mut delimiter = HEREDOC_DELIMITER.to_owned();
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

fn io_error(context: &str, error: &io::Error) -> ActionError {
    ActionError::Io {
        message: format!("{context}: {error}"),
    }
}

/// Reports through workflow commands on `W` and the `GITHUB_OUTPUT` file.
///
/// When no output file is configured, outputs fall back to the legacy
/// `::set-output` command.
pub struct WorkflowCommandReporter<W>
where
    W: Write,
{
    writer: W,
    output_file: Option<Utf8PathBuf>,
}

impl WorkflowCommandReporter<io::Stdout> {
    /// Reporter for the current runner: stdout plus `GITHUB_OUTPUT`.
    #[must_use]
    pub fn for_runner() -> Self {
        let output_file = env::var(OUTPUT_FILE_VARIABLE)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(Utf8PathBuf::from);
        Self::new(io::stdout(), output_file)
    }
}

impl<W> WorkflowCommandReporter<W>
where
    W: Write,
{
    /// Creates a reporter writing commands to `writer` and outputs to
    /// `output_file` when present.
    #[must_use]
    pub const fn new(writer: W, output_file: Option<Utf8PathBuf>) -> Self {
        Self {
            writer,
            output_file,
        }
    }

    /// Consumes the reporter, returning the command writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn append_output(path: &Utf8Path, entry: &str) -> Result<(), ActionError> {
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path.file_name().ok_or_else(|| ActionError::Io {
            message: format!("invalid output file path '{path}': no file name"),
        })?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
            io_error(&format!("failed to open output directory '{parent}'"), &error)
        })?;
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        let mut file = dir
            .open_with(file_name, &options)
            .map_err(|error| io_error(&format!("failed to open output file '{path}'"), &error))?;

        file.write_all(entry.as_bytes())
            .map_err(|error| io_error(&format!("failed to write output file '{path}'"), &error))
    }
}

impl<W> ActionReporter for WorkflowCommandReporter<W>
where
    W: Write,
{
    fn set_outputs(&mut self, outputs: &[ActionOutput]) -> Result<(), ActionError> {
        if let Some(path) = self.output_file.as_deref() {
            let entries: String = outputs
                .iter()
                .map(|output| output_file_entry(output.name, &output.value))
                .collect();
            return Self::append_output(path, &entries);
        }

        let commands: String = outputs
            .iter()
            .map(|output| {
                format!(
                    "::set-output name={}::{}\n",
                    escape_property(output.name),
                    escape_data(&output.value)
                )
            })
            .collect();
        self.writer
            .write_all(commands.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|error| io_error("failed to write set-output commands", &error))
    }

    fn set_failed(&mut self, message: &str) {
        tracing::error!("{message}");
        if let Err(error) = writeln!(self.writer, "::error::{}", escape_data(message)) {
            tracing::error!("failed to write error command: {error}");
        }
    }
}
