use std::{
    fs,
    path::Path,
    process::{Command, ExitCode, Output},
};

use tracing::{error, info, Level};

const WASM_LIB: &str = "siege_wasm";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
const OUTPUT_DIR: &str = "dist";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .compact()
        .init();

    info!(
        "📦 Packaging [[ {} ]] lib into '{}' directory for serving through HTTP",
        WASM_LIB, OUTPUT_DIR,
    );

    match pack() {
        Ok(()) => {
            info!(
                "⚡ Finished packaging browser resources into './{}' directory",
                OUTPUT_DIR
            );
            list_output();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("✖ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn pack() -> Result<(), String> {
    let wasm_path = ["target/", WASM_TARGET, "/release/", WASM_LIB, ".wasm"].join("");

    let mut command = Command::new("cargo");
    command
        .arg("build")
        .args(["-p", WASM_LIB])
        .arg("--lib")
        .args(["--target", WASM_TARGET])
        .arg("--release");

    validate_command_result(&mut command)?;

    let mut command = Command::new("wasm-bindgen");
    command
        .arg(wasm_path)
        .args(["--out-dir", OUTPUT_DIR])
        .args(["--target", "web"])
        .arg("--typescript");

    validate_command_result(&mut command)?;

    let page = Path::new(WASM_LIB).join("index.html");
    fs::copy(&page, Path::new(OUTPUT_DIR).join("index.html"))
        .map_err(|e| format!("failed to copy {} :: {}", page.display(), e))?;

    Ok(())
}

fn validate_command_result(command: &mut Command) -> Result<(), String> {
    info!("EXECUTING :: ( {:?} )", command);
    let output = command
        .output()
        .map_err(|e| format!("failed to execute {:?} :: {}", command, e))?;

    if output.status.success() {
        info!("SUCCESS ✔");
        Ok(())
    } else {
        error!("FAILURE ✖");
        write_all_feedback(&output);
        Err(format!("{:?} exited with {}", command, output.status))
    }
}

fn list_output() {
    match fs::read_dir(OUTPUT_DIR) {
        Ok(entries) => {
            for entry in entries.flatten() {
                info!("  {}", entry.file_name().to_string_lossy());
            }
        }
        Err(e) => error!("could not list '{}' :: {}", OUTPUT_DIR, e),
    }
}

fn write_all_feedback(output: &Output) {
    for stream in [&output.stdout, &output.stderr] {
        let text = String::from_utf8_lossy(stream);
        if !text.trim().is_empty() {
            error!("{}", text.trim_end());
        }
    }
}
