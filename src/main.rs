use std::process::ExitCode;

use anyhow::Result;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    notch::run()
}
