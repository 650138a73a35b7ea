use skiff_core::{BuildTool, SkiffConfig};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = SkiffConfig::load(tmp.path()).unwrap();

    assert!(config.project.name.is_none());
    assert!(config.build.tool.is_none());
    assert!(config.build.module.is_none());
    assert!(config.build.flags.is_empty());
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[project]
name = "petclinic"

[build]
tool = "gradle"
module = "web"
flags = ["-DskipTests", "--offline"]
"#;
    std::fs::write(tmp.path().join("skiff.toml"), toml).unwrap();

    let config = SkiffConfig::load(tmp.path()).unwrap();

    assert_eq!(config.project.name.as_deref(), Some("petclinic"));
    assert_eq!(config.build.tool, Some(BuildTool::Gradle));
    assert_eq!(config.build.module.as_deref(), Some("web"));
    assert_eq!(config.build.flags, vec!["-DskipTests", "--offline"]);
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[build]
tool = "maven"
"#;
    std::fs::write(tmp.path().join("skiff.toml"), toml).unwrap();

    let config = SkiffConfig::load(tmp.path()).unwrap();

    assert_eq!(config.build.tool, Some(BuildTool::Maven));
    assert!(config.project.name.is_none());
    assert!(config.build.flags.is_empty());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("skiff.toml"), "not valid {{{{ toml").unwrap();

    let result = SkiffConfig::load(tmp.path());
    assert!(result.is_err());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("skiff.toml"), "got: {err}");
}

#[test]
fn load_rejects_unknown_build_tool() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("skiff.toml"), "[build]\ntool = \"ant\"").unwrap();

    let result = SkiffConfig::load(tmp.path());
    assert!(result.is_err());
}
