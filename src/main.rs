use phase_contrast::config::load_config;
use phase_contrast::pipeline;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(out_path) => {
            println!("wrote {}", out_path.display());
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("usage: phase_contrast <input-image> <arterial|venous> [output.png]");
            eprintln!("       phase_contrast --config <runtime.json>");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<PathBuf, String> {
    let (input_path, phase, out_path) = match args {
        [flag, config_path] if flag == "--config" => {
            let config = load_config(Path::new(config_path))?;
            let out = config
                .output
                .png_out
                .unwrap_or_else(|| default_out(&config.input_path, config.phase.as_str()));
            (config.input_path, config.phase.as_str().to_string(), out)
        }
        [input, phase] => {
            let input = PathBuf::from(input);
            let out = default_out(&input, phase);
            (input, phase.clone(), out)
        }
        [input, phase, out] => (PathBuf::from(input), phase.clone(), PathBuf::from(out)),
        _ => return Err("expected an input image and a phase".to_string()),
    };

    let bytes = fs::read(&input_path)
        .map_err(|e| format!("Failed to read {}: {e}", input_path.display()))?;
    let png = pipeline::process_str(&bytes, &phase).map_err(|e| e.to_string())?;
    fs::write(&out_path, png)
        .map_err(|e| format!("Failed to write {}: {e}", out_path.display()))?;
    Ok(out_path)
}

fn default_out(input: &Path, phase: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_{phase}.png"))
}
