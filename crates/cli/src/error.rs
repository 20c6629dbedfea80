//! Failure modes of the renderer CLI and their exit codes.
//!
//! | code | cause |
//! |------|-------|
//! | 2    | clap rejected the arguments (including `--pointer`, `--resize-at`) |
//! | 10   | the network config did not validate |
//! | 11   | a PNG or the sequence directory could not be written |
//! | 12   | `--params` is not JSON, or `--fps` is not a positive number |
//! | 13   | the `--json` report could not be serialized |

use ambient_net_core::NetError;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum CliError {
    Config(NetError),
    /// Writing `path` failed.
    Write { path: PathBuf, reason: String },
    /// `--params` could not be parsed as JSON.
    Params(String),
    FrameRate(f64),
    Report(String),
}

impl CliError {
    pub fn write(path: &Path, reason: impl fmt::Display) -> Self {
        CliError::Write {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 10,
            CliError::Write { .. } => 11,
            CliError::Params(_) | CliError::FrameRate(_) => 12,
            CliError::Report(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{e}"),
            CliError::Write { path, reason } => {
                write!(f, "cannot write {}: {reason}", path.display())
            }
            CliError::Params(reason) => write!(f, "invalid --params JSON: {reason}"),
            CliError::FrameRate(fps) => write!(f, "--fps must be a positive number, got {fps}"),
            CliError::Report(reason) => write!(f, "cannot serialize report: {reason}"),
        }
    }
}

impl From<NetError> for CliError {
    fn from(e: NetError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Report(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_exits_10_and_names_the_field() {
        let err = CliError::from(NetError::invalid_config("hover_radius", "must be >= 0"));
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("hover_radius"));
    }

    #[test]
    fn write_failure_exits_11_and_names_the_path() {
        let err = CliError::write(Path::new("out/frame_00003.png"), "disk full");
        assert_eq!(err.exit_code(), 11);
        let msg = err.to_string();
        assert!(msg.contains("out/frame_00003.png"), "got: {msg}");
        assert!(msg.contains("disk full"), "got: {msg}");
    }

    #[test]
    fn bad_params_and_frame_rate_exit_12() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let params = CliError::Params(json_err.to_string());
        assert_eq!(params.exit_code(), 12);
        assert!(params.to_string().starts_with("invalid --params JSON"));

        let fps = CliError::FrameRate(-30.0);
        assert_eq!(fps.exit_code(), 12);
        assert!(fps.to_string().contains("-30"));
    }

    #[test]
    fn serde_errors_are_report_failures() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err = CliError::from(json_err);
        assert_eq!(err.exit_code(), 13);
        assert!(err.to_string().starts_with("cannot serialize report"));
    }
}
