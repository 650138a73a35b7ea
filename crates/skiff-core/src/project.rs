//! Build-tool discovery for Jib projects.
//!
//! Jib runs as a Maven or Gradle plugin, so before skiff can ask for a
//! sync map it has to work out which build system owns the project
//! directory, which program to invoke (the project's wrapper script when
//! one is checked in), and which goal or task makes Jib print the map.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The build system driving a Jib project.
///
/// # Examples
///
/// ```no_run
/// use skiff_core::BuildTool;
/// use std::path::Path;
///
/// let tool = BuildTool::detect(Path::new(".")).unwrap();
/// let args = tool.sync_map_args(None, &[]);
/// println!("{} {}", tool.program(Path::new(".")), args.join(" "));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl BuildTool {
    /// Detect the build tool from the build files in `project_dir`.
    ///
    /// A `pom.xml` selects Maven; otherwise `build.gradle` or
    /// `build.gradle.kts` selects Gradle. Projects carrying both are
    /// treated as Maven; set `[build].tool` in skiff.toml to override.
    ///
    /// # Errors
    ///
    /// [`Error::NoBuildFile`](crate::Error::NoBuildFile) when neither
    /// build file is present.
    pub fn detect(project_dir: &Path) -> crate::Result<Self> {
        if project_dir.join("pom.xml").exists() {
            tracing::debug!(dir = %project_dir.display(), "detected Maven project");
            return Ok(Self::Maven);
        }
        if project_dir.join("build.gradle").exists()
            || project_dir.join("build.gradle.kts").exists()
        {
            tracing::debug!(dir = %project_dir.display(), "detected Gradle project");
            return Ok(Self::Gradle);
        }
        Err(crate::Error::NoBuildFile {
            dir: project_dir.to_path_buf(),
        })
    }

    /// The program to invoke: the project's wrapper script when present,
    /// otherwise the tool from `PATH`.
    pub fn program(&self, project_dir: &Path) -> String {
        let wrapper = match self {
            Self::Maven => "mvnw",
            Self::Gradle => "gradlew",
        };
        if project_dir.join(wrapper).exists() {
            format!("./{wrapper}")
        } else {
            match self {
                Self::Maven => "mvn",
                Self::Gradle => "gradle",
            }
            .to_owned()
        }
    }

    /// Arguments that make Jib print a sync map for this project.
    ///
    /// Maven runs the `jib:_skaffold-sync-map` goal, Gradle the
    /// `_jibSkaffoldSyncMap` task, both quietly so the marker line is not
    /// drowned in build chatter. `module` narrows a multi-module build;
    /// `flags` are appended verbatim.
    pub fn sync_map_args(&self, module: Option<&str>, flags: &[String]) -> Vec<String> {
        let mut args: Vec<String> = match self {
            Self::Maven => {
                let mut maven = vec!["--batch-mode".to_owned(), "-q".to_owned()];
                if let Some(module) = module {
                    maven.push("--projects".to_owned());
                    maven.push(module.to_owned());
                    maven.push("--also-make".to_owned());
                }
                maven.push("jib:_skaffold-sync-map".to_owned());
                maven
            }
            Self::Gradle => {
                let task = match module {
                    Some(module) => format!(":{module}:_jibSkaffoldSyncMap"),
                    None => "_jibSkaffoldSyncMap".to_owned(),
                };
                vec!["-q".to_owned(), task]
            }
        };
        args.extend(flags.iter().cloned());
        args
    }

    /// Human-readable name, e.g. for doctor output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Maven => "Maven",
            Self::Gradle => "Gradle",
        }
    }
}
