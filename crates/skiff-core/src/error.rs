use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Build-tool discovery ──
    #[error(
        "no pom.xml or build.gradle found in {dir} — skiff needs a Jib-enabled Maven or Gradle project"
    )]
    NoBuildFile { dir: PathBuf },
}
