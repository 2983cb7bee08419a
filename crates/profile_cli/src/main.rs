//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `profile_core` linkage without a UI host.
//! - With a database path argument, open it and print collection statistics.
//!
//! Usage: `profile_cli [DB_PATH]`

use profile_core::{CoreConfig, ProfileApp};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("profile_core ping={}", profile_core::ping());
    println!("profile_core version={}", profile_core::core_version());

    let Some(db_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return ExitCode::SUCCESS;
    };

    let config = CoreConfig {
        db_path: Some(db_path),
        ..CoreConfig::default()
    };
    let app = match ProfileApp::open(&config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to open database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stats = app.profiles().stats();
    let settings = app.settings().settings();
    println!(
        "profiles total={} good={} bad={} neutral={} average_rating={}",
        stats.total,
        stats.good,
        stats.bad,
        stats.neutral,
        stats.average_rating_label()
    );
    println!(
        "settings theme={} language={} custom_themes={}",
        settings.theme.as_str(),
        settings.language.code(),
        settings.custom_themes
    );
    ExitCode::SUCCESS
}
