use std::fmt;
use std::path::Path;

use crate::executor::{BuildExecutor, RealExecutor};
use crate::extract::{self, ExtractError};
use crate::normalize;
use crate::syncmap::{SyncMap, SyncMapError};
use crate::tool::ToolError;

/// Jib integration client, parameterized over the executor for testability.
pub struct JibClient<E: BuildExecutor = RealExecutor> {
    executor: E,
}

impl JibClient<RealExecutor> {
    /// Client driving `program` (e.g. `mvn`, `./gradlew`) inside
    /// `project_dir`.
    pub fn new(program: impl Into<String>, project_dir: impl AsRef<Path>) -> Self {
        Self {
            executor: RealExecutor::new(program, project_dir),
        }
    }
}

impl<E: BuildExecutor> JibClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Runs the build tool and extracts the sync map from its output.
    ///
    /// The map is rebuilt from scratch on every call and owned by the
    /// caller once returned; skiff keeps no reference to it. Concurrent
    /// calls for different builds are independent.
    ///
    /// # Errors
    ///
    /// - [`SyncError::Build`] when the build tool fails to run or exits
    ///   abnormally.
    /// - [`SyncError::Extract`] when the output carries no usable payload;
    ///   [`SyncError::is_unavailable`] separates "no sync data produced"
    ///   (fall back to a full build) from hard scan failures.
    /// - [`SyncError::Map`] when the payload does not decode or a source
    ///   file cannot be stat'ed. No partial map escapes.
    pub async fn sync_map(&self, args: &[String]) -> Result<SyncMap, SyncError> {
        let output = self
            .executor
            .exec(args)
            .await
            .map_err(|e| SyncError::Build { source: e })?;

        let payload =
            extract::extract_payload(&output).map_err(|e| SyncError::Extract { source: e })?;
        let normalized = normalize::escape_backslashes(payload);

        let map =
            SyncMap::from_payload(&normalized).map_err(|e| SyncError::Map { source: e })?;

        tracing::debug!(entries = map.len(), "sync map extracted");
        Ok(map)
    }

    /// First line of the tool's `--version` output, for diagnostics.
    pub async fn tool_version(&self) -> Result<String, ToolError> {
        let output = self.executor.exec(&["--version".to_owned()]).await?;
        let text = String::from_utf8_lossy(&output);
        // arch-lint: allow(no-silent-result-drop) reason="Option::unwrap_or_default — no Result error to drop; empty first line is a valid diagnostic"
        Ok(text.lines().next().unwrap_or_default().trim().to_owned())
    }
}

// ── Error types ──

/// Failure conditions of one sync-map extraction, distinguishable so the
/// build orchestrator can pick its fallback policy. No retries happen
/// here; transient conditions are the caller's responsibility.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The build tool failed to run or exited abnormally.
    #[error("jib build failed")]
    Build { source: ToolError },

    /// Output scanning found no usable payload.
    #[error("failed to locate sync-map payload in build output")]
    Extract { source: ExtractError },

    /// Payload decoding or local file resolution failed.
    #[error("failed to build sync map")]
    Map { source: SyncMapError },
}

impl SyncError {
    /// True when the build simply produced no sync data (no marker line).
    /// Callers are expected to fall back to a full build rather than
    /// abort.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Extract {
                source: ExtractError::MarkerMissing
            }
        )
    }
}

// ── Doctor types ──

#[derive(Debug, Default)]
pub struct DoctorReport {
    pub build_file: CheckResult,
    pub tool: CheckResult,
    pub wrapper: CheckResult,
}

impl DoctorReport {
    pub fn all_passed(&self) -> bool {
        self.build_file.passed && self.tool.passed && self.wrapper.passed
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Build file: {}", self.build_file.icon(), self.build_file.detail)?;
        writeln!(f, "{} Build tool: {}", self.tool.icon(), self.tool.detail)?;
        write!(f, "{} Wrapper:    {}", self.wrapper.icon(), self.wrapper.detail)
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}
