use std::path::Path;

use xshell::{cmd, Shell};

use crate::cli::FuzzOptions;
use crate::step::step;
use crate::{CARGO, FUZZ_TARGETS, LOCAL_CARGO_ROOT};

// Pinned so every machine fuzzes with the same driver.
const CARGO_FUZZ_VERSION: &str = "0.12.0";

const DEFAULT_DURATION_SECS: u32 = 5;

pub(crate) fn run(sh: &Shell, options: FuzzOptions) -> anyhow::Result<()> {
    if cfg!(target_os = "windows") {
        eprintln!("Skip fuzzing: libFuzzer is not supported on Windows");
        return Ok(());
    }

    let targets: Vec<&str> = match &options.target {
        Some(target) if FUZZ_TARGETS.contains(&target.as_str()) => vec![target.as_str()],
        Some(target) => anyhow::bail!("unknown fuzz target `{target}`, expected one of {FUZZ_TARGETS:?}"),
        None => FUZZ_TARGETS.to_vec(),
    };
    let duration = options.duration.unwrap_or(DEFAULT_DURATION_SECS).to_string();

    step("fuzz-install", || install(sh))?;

    let _guard = sh.push_dir("./fuzz");
    for target in targets {
        step(&format!("fuzz {target}"), || {
            cmd!(sh, "rustup run nightly cargo fuzz run {target} -- -max_total_time={duration}").run()?;
            Ok(())
        })?;
    }

    Ok(())
}

fn install(sh: &Shell) -> anyhow::Result<()> {
    let binary = Path::new(LOCAL_CARGO_ROOT).join("bin/cargo-fuzz");

    if sh.path_exists(&binary) {
        crate::trace(format_args!("cargo-fuzz is already installed at {}", binary.display()));
    } else {
        // Debug build: compiles faster and the driver does not need to be fast.
        cmd!(
            sh,
            "{CARGO} install --debug --locked --root {LOCAL_CARGO_ROOT} cargo-fuzz@{CARGO_FUZZ_VERSION}"
        )
        .run()?;
    }

    cmd!(sh, "rustup toolchain install nightly --profile=minimal").run()?;

    Ok(())
}
