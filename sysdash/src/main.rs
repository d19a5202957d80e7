//! Entry point for the sysdash TUI. Parses args, resolves the connection profile and runs the App.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sysdash::app::App;
use sysdash::cli::Cli;
use sysdash::http::{metrics_endpoint, MetricsClient};
use sysdash::poller::DEFAULT_INTERVAL;
use sysdash::profiles::{
    load_profiles, save_profiles, ProfileEntry, ProfileRequest, ProfilesFile, ResolveProfile,
};

// Logs go to a file: the terminal belongs to the TUI.
fn setup_logging(verbosity: u8) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var("SYSDASH_LOG")
        .from_env_lossy();

    let log_dir = dirs_next::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sysdash")
        .join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "sysdash.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the duration of the program
    let _logging_guard = setup_logging(cli.verbose)?;

    let mut profiles = load_profiles();
    let req = ProfileRequest {
        profile_name: cli.profile.clone(),
        url: cli.url.clone(),
        tls_ca: cli.tls_ca.clone(),
        interval_ms: cli.interval_ms,
    };

    let Some(entry) = resolve_connection(&cli, req, &mut profiles)? else {
        return Ok(());
    };

    if cli.dry_run {
        println!("{}", entry.url);
        return Ok(());
    }

    let endpoint = metrics_endpoint(&entry.url)
        .with_context(|| format!("invalid metrics URL '{}'", entry.url))?;
    let interval = entry
        .interval_ms
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_INTERVAL);
    let client = MetricsClient::new(
        endpoint.clone(),
        entry.tls_ca.as_deref().map(Path::new),
        Duration::from_millis(cli.timeout_ms),
    )?;

    info!(%endpoint, ?interval, "connecting");
    let mut app = App::new(endpoint.to_string());
    app.run(client, interval).await
}

/// Turn CLI input plus saved profiles into the connection to use, saving or
/// prompting along the way. `None` means the user aborted.
fn resolve_connection(
    cli: &Cli,
    req: ProfileRequest,
    profiles: &mut ProfilesFile,
) -> anyhow::Result<Option<ProfileEntry>> {
    let entry = match req.resolve(profiles) {
        ResolveProfile::Direct(entry) => {
            // Possibly save if profile specified and --save or new entry
            if let Some(name) = cli.profile.as_ref() {
                let overwrite = match profiles.profiles.get(name) {
                    // New profile: auto-save immediately
                    None => true,
                    Some(existing) if *existing != entry => {
                        cli.save
                            || prompt_yes_no(&format!(
                                "Overwrite existing profile '{name}'? [y/N]: "
                            ))
                    }
                    Some(_) => false,
                };
                if overwrite {
                    profiles.profiles.insert(name.clone(), entry.clone());
                    persist(profiles);
                }
            }
            entry
        }
        ResolveProfile::Loaded(entry) => entry,
        ResolveProfile::PromptSelect(names) => {
            eprintln!("Select profile:");
            for (i, n) in names.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, n);
            }
            let line = prompt_string("Enter number (or blank to abort): ")?;
            let picked = line
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|idx| (1..=names.len()).contains(idx))
                .and_then(|idx| profiles.profiles.get(&names[idx - 1]).cloned());
            match picked {
                Some(entry) => entry,
                None => return Ok(None),
            }
        }
        ResolveProfile::PromptCreate(name) => {
            eprintln!("Profile '{name}' does not exist yet.");
            let url = prompt_string("Enter URL (http://HOST:PORT or https://...): ")?;
            if url.trim().is_empty() {
                return Ok(None);
            }
            let ca = prompt_string("Enter TLS CA path (or leave blank): ")?;
            let entry = ProfileEntry {
                url: url.trim().to_string(),
                tls_ca: Some(ca.trim().to_string()).filter(|s| !s.is_empty()),
                interval_ms: cli.interval_ms,
            };
            profiles.profiles.insert(name, entry.clone());
            persist(profiles);
            entry
        }
        ResolveProfile::None => {
            eprintln!("No URL provided and no profiles to select. See --help.");
            return Ok(None);
        }
    };
    Ok(Some(entry))
}

fn persist(profiles: &ProfilesFile) {
    if let Err(e) = save_profiles(profiles) {
        warn!("saving profiles failed: {e}");
        eprintln!("warning: could not save profiles: {e}");
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    match prompt_string(prompt) {
        Ok(line) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn prompt_string(prompt: &str) -> io::Result<String> {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
