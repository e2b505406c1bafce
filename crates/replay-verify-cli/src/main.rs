use clap::Parser;
use replay_verify_core::verify_bundle;
use std::path::{Path, PathBuf};

mod exit_codes;

/// Verify the integrity of a sealed replay bundle.
///
/// Checks that every required file exists, that each artifact matches its
/// declared SHA-256 in digests.json, and that the manifest's bundle digest
/// matches the recomputed canonical commitment. Prints a machine-readable
/// report followed by a one-line validity summary.
#[derive(Parser, Debug)]
#[command(name = "replay-verify", version, about)]
struct Cli {
    /// Bundle directory to verify
    #[arg(default_value = ".")]
    bundle: PathBuf,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::STRUCTURAL
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;
    let root = absolutize(&cli.bundle, &cwd);

    let report = verify_bundle(&root);

    // The structured report always prints, failure paths included.
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!("\nVALID: {}", report.valid);

    Ok(if report.valid {
        exit_codes::SUCCESS
    } else if report.halted() {
        exit_codes::STRUCTURAL
    } else {
        exit_codes::INVALID
    })
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
