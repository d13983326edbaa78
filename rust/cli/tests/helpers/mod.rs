#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Stdio};

/// Every variable the CLI reads.
pub const HOLDEM_VARS: &[&str] = &[
    "HOLDEM_CONFIG",
    "HOLDEM_STARTING_STACK",
    "HOLDEM_SMALL_BLIND",
    "HOLDEM_BIG_BLIND",
    "HOLDEM_SEED",
    "HOLDEM_BLUFF_MAX",
    "HOLDEM_AI",
    "HOLDEM_LOG",
];

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in-process through `holdem_cli::run`.
pub fn run_cli(args: &[&str]) -> CliResult {
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = holdem_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// Runs the built binary with `input` on stdin and a clean `HOLDEM_*`
/// environment plus `env`.
pub fn run_binary(args: &[&str], input: &str, env: &[(&str, &str)]) -> CliResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_holdem"));
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for var in HOLDEM_VARS {
        cmd.env_remove(var);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().expect("spawn holdem binary");
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes()).expect("write stdin");
    }
    let output = child.wait_with_output().expect("wait for holdem binary");
    CliResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Sets variables for the life of the guard and restores the previous
/// values on drop. Tests using it must be `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Clears every `HOLDEM_*` variable, then applies `pairs`.
    pub fn clean(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in HOLDEM_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
