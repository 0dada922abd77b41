use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use recdec_core::{Schema, build_report, decode};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.bin");
        if !input.exists() {
            continue;
        }
        let schema = schema_for_case(&path)?;
        let output = path.join("expected_report.json");
        regenerate_one(&input, &output, schema)?;
    }

    Ok(())
}

// Golden directories are named <schema>_<scenario>.
fn schema_for_case(dir: &Path) -> Result<Schema, String> {
    let name = dir
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("unreadable directory name: {}", dir.display()))?;
    if name.starts_with("flat_") {
        Ok(Schema::Flat)
    } else if name.starts_with("graph_") {
        Ok(Schema::Graph)
    } else {
        Err(format!("cannot infer schema for case '{}'", name))
    }
}

fn regenerate_one(input: &Path, output: &Path, schema: Schema) -> Result<(), String> {
    let payload =
        fs::read(input).map_err(|err| format!("failed to read {}: {}", input.display(), err))?;
    let body = decode(&payload, schema)
        .map_err(|err| format!("decode failed for {}: {}", input.display(), err))?;
    let report = build_report(
        &input.display().to_string(),
        payload.len() as u64,
        schema,
        body,
    );
    let json = serde_json::to_string(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
