use skiff_core::{BuildTool, SkiffConfig};
use skiff_sync::{CheckResult, DoctorReport, JibClient};
use std::path::Path;

/// Run all readiness checks without early return and print the report.
pub async fn doctor() -> anyhow::Result<()> {
    let project_dir = Path::new(".");
    let config = SkiffConfig::load(project_dir);
    let tool_override = config
        .as_ref()
        // arch-lint: allow(no-silent-result-drop) reason="doctor must report diagnostics even when skiff.toml is missing or invalid"
        .ok()
        .and_then(|c| c.build.tool);

    let mut report = DoctorReport::default();

    let detected = match tool_override {
        Some(tool) => Ok(tool),
        None => BuildTool::detect(project_dir),
    };

    match detected {
        Err(e) => {
            report.build_file = CheckResult::fail(&e.to_string());
        }
        Ok(tool) => {
            report.build_file = CheckResult::ok(tool.name());

            let program = tool.program(project_dir);
            report.wrapper = if program.starts_with("./") {
                CheckResult::ok(&program)
            } else {
                CheckResult::ok(&format!("none, using global '{program}'"))
            };

            let client = JibClient::new(&program, project_dir);
            report.tool = match client.tool_version().await {
                Ok(version) => CheckResult::ok(&version),
                Err(e) => CheckResult::fail(&e.to_string()),
            };
        }
    }

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}
