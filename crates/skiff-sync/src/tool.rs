#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("build tool '{program}' not found — is it installed and on PATH?")]
    NotFound {
        program: String,
        source: std::io::Error,
    },

    #[error("build tool failed: {program} {args:?}\n{stderr}")]
    CommandFailed {
        program: String,
        args: Vec<String>,
        stderr: String,
    },
}
