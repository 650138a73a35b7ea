use skiff_core::BuildTool;
use tempfile::TempDir;

#[test]
fn detects_maven_from_pom() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("pom.xml"), "<project/>").unwrap();

    assert_eq!(BuildTool::detect(tmp.path()).unwrap(), BuildTool::Maven);
}

#[test]
fn detects_gradle_from_build_script() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("build.gradle"), "plugins {}").unwrap();

    assert_eq!(BuildTool::detect(tmp.path()).unwrap(), BuildTool::Gradle);
}

#[test]
fn detects_gradle_from_kotlin_build_script() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("build.gradle.kts"), "plugins {}").unwrap();

    assert_eq!(BuildTool::detect(tmp.path()).unwrap(), BuildTool::Gradle);
}

#[test]
fn maven_wins_when_both_build_files_exist() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("pom.xml"), "<project/>").unwrap();
    std::fs::write(tmp.path().join("build.gradle"), "plugins {}").unwrap();

    assert_eq!(BuildTool::detect(tmp.path()).unwrap(), BuildTool::Maven);
}

#[test]
fn detect_errors_without_build_file() {
    let tmp = TempDir::new().unwrap();

    let result = BuildTool::detect(tmp.path());
    assert!(result.is_err());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("no pom.xml or build.gradle"), "got: {err}");
}

#[test]
fn program_prefers_maven_wrapper() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("mvnw"), "#!/bin/sh").unwrap();

    assert_eq!(BuildTool::Maven.program(tmp.path()), "./mvnw");
}

#[test]
fn program_prefers_gradle_wrapper() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("gradlew"), "#!/bin/sh").unwrap();

    assert_eq!(BuildTool::Gradle.program(tmp.path()), "./gradlew");
}

#[test]
fn program_falls_back_to_global_install() {
    let tmp = TempDir::new().unwrap();

    assert_eq!(BuildTool::Maven.program(tmp.path()), "mvn");
    assert_eq!(BuildTool::Gradle.program(tmp.path()), "gradle");
}
