use std::path::{Path, PathBuf};

use crate::tool::ToolError;

/// Abstraction over build-tool execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait BuildExecutor: Send + Sync {
    /// Run the build tool with the given arguments and capture stdout.
    ///
    /// Returns the raw output bytes: Jib's payload line may carry
    /// Windows-style paths that are not valid JSON escapes yet, so all
    /// decoding is left to the extraction pipeline.
    async fn exec(&self, args: &[String]) -> Result<Vec<u8>, ToolError>;
}

/// Real build-tool executor, invoking `program` inside the project directory.
pub struct RealExecutor {
    program: String,
    project_dir: PathBuf,
}

impl RealExecutor {
    pub fn new(program: impl Into<String>, project_dir: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            project_dir: project_dir.as_ref().to_path_buf(),
        }
    }
}

impl BuildExecutor for RealExecutor {
    async fn exec(&self, args: &[String]) -> Result<Vec<u8>, ToolError> {
        use std::process::Stdio;

        let output = tokio::process::Command::new(&self.program)
            .args(args)
            .current_dir(&self.project_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ToolError::NotFound {
                program: self.program.clone(),
                source: e,
            })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(ToolError::CommandFailed {
                program: self.program.clone(),
                args: args.to_vec(),
                stderr,
            })
        }
    }
}
