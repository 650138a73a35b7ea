use skiff_core::{BuildTool, SkiffConfig};
use skiff_sync::{JibClient, SyncMap};
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

/// Run the Jib build and print the extracted sync map.
pub async fn sync(json: bool) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = SkiffConfig::load(&project_dir)?;

    let tool = match config.build.tool {
        Some(tool) => tool,
        None => BuildTool::detect(&project_dir)?,
    };
    let program = tool.program(&project_dir);
    let args = tool.sync_map_args(config.build.module.as_deref(), &config.build.flags);
    tracing::debug!(program = %program, args = ?args, "invoking build tool");

    if !json {
        match &config.project.name {
            Some(name) => println!("Running {} sync-map build for {name}...", tool.name()),
            None => println!("Running {} sync-map build...", tool.name()),
        }
    }

    let client = JibClient::new(&program, &project_dir);
    let map = match client.sync_map(&args).await {
        Ok(map) => map,
        Err(e) if e.is_unavailable() => {
            // Soft condition: the build produced no sync data.
            println!("No sync data produced — fall back to a full rebuild.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", render_json(&map));
    } else {
        for (src, entry) in map.iter() {
            let kind = if entry.is_direct { "direct" } else { "generated" };
            for dest in &entry.dest {
                println!("{src} -> {dest} ({kind})");
            }
        }
        println!();
        println!("{} files tracked for sync.", map.len());
    }

    Ok(())
}

fn render_json(map: &SyncMap) -> String {
    let mut object = serde_json::Map::new();
    for (src, entry) in map.iter() {
        let mtime_ms = entry
            .file_time
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            // arch-lint: allow(no-silent-result-drop) reason="a stat'd source's file_time cannot predate UNIX_EPOCH; 0 is an acceptable mtime fallback"
            .unwrap_or(0);
        object.insert(
            src.clone(),
            serde_json::json!({
                "dest": entry.dest,
                "mtime_ms": mtime_ms,
                "direct": entry.is_direct,
            }),
        );
    }
    serde_json::Value::Object(object).to_string()
}
