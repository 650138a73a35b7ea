use serde::{Deserialize, Serialize};

use crate::project::BuildTool;

/// skiff.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkiffConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (defaults to the project directory name)
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Build tool override. When unset, detected from the build files
    /// in the project directory.
    pub tool: Option<BuildTool>,
    /// Module to build in a multi-module project.
    pub module: Option<String>,
    /// Extra flags appended to every build-tool invocation.
    #[serde(default)]
    pub flags: Vec<String>,
}

impl SkiffConfig {
    /// Load from skiff.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("skiff.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}
