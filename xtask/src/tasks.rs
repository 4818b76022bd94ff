use xshell::{cmd, Shell};

use crate::step::step;
use crate::{CARGO, CORE_CRATE};

pub(crate) fn fmt(sh: &Shell) -> anyhow::Result<()> {
    step("fmt", || {
        let output = cmd!(sh, "{CARGO} fmt --all -- --check").ignore_status().output()?;
        if !output.status.success() {
            anyhow::bail!("bad formatting, run `cargo fmt --all`");
        }
        Ok(())
    })
}

pub(crate) fn lints(sh: &Shell) -> anyhow::Result<()> {
    step("lints", || {
        cmd!(sh, "{CARGO} clippy --workspace --all-targets --locked -- -D warnings").run()?;
        Ok(())
    })
}

pub(crate) fn no_std(sh: &Shell) -> anyhow::Result<()> {
    step("nostd", || {
        for features in [&[][..], &["--features", "alloc"][..]] {
            cmd!(sh, "{CARGO} check --locked -p {CORE_CRATE} --no-default-features {features...}").run()?;
        }
        Ok(())
    })
}

pub(crate) fn test(sh: &Shell, no_run: bool) -> anyhow::Result<()> {
    let no_run = no_run.then_some("--no-run");

    step("test", || {
        cmd!(sh, "{CARGO} test --workspace --locked {no_run...}").run()?;
        Ok(())
    })
}

pub(crate) fn clean(sh: &Shell) -> anyhow::Result<()> {
    step("clean", || {
        for folder in ["./fuzz/artifacts", "./fuzz/coverage", "./fuzz/target"] {
            sh.remove_path(folder)?;
        }
        cmd!(sh, "{CARGO} clean").run()?;
        Ok(())
    })
}
