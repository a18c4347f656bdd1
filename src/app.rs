use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::{Receiver, Sender};
use notify::{Event as NotifyEvent, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::{get_config_path, load_and_validate_config, load_or_create_config};
use crate::dispatch::Dispatcher;
use crate::model::{ConfigEvent, StatusMessage, UnknownPrefixPolicy};
use crate::platform::{self, DryRun, OperatingSystem, PlatformServices};
use crate::ui::status::{format_alias_table, format_status, status_for};

const PROMPT: &str = "notch> ";
const QUIT_COMMAND: &str = ":q";
const CONFIG_DEBOUNCE_DURATION: Duration = Duration::from_millis(500);

/// Dispatch -nav / -exp / -sys / -app commands to the desktop
#[derive(Parser, Debug)]
#[command(name = "notch", version)]
#[command(after_help = "Prefixes: -nav <web search>, -exp <path or file search>, \
                        -sys <settings panel>, -app <application>")]
pub struct Args {
    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How to treat input without a prefix (overrides the config file)
    #[arg(long, value_enum)]
    pub policy: Option<UnknownPrefixPolicy>,

    /// Resolve commands and report the target without opening anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the settings and application aliases for this platform, then exit
    #[arg(long)]
    pub list_aliases: bool,

    /// Command to dispatch once; without it, commands are read from stdin
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

pub fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let config = load_or_create_config(&config_path).context("failed to load configuration")?;

    let platform: Box<dyn PlatformServices> = if args.dry_run {
        Box::new(DryRun)
    } else {
        platform::native()
    };
    let mut dispatcher = Dispatcher::from_config(&config, OperatingSystem::current(), platform);
    if let Some(policy) = args.policy {
        dispatcher.set_policy(policy);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_aliases {
        write!(
            out,
            "{}\n{}",
            format_alias_table("Settings (-sys)", dispatcher.settings_aliases()),
            format_alias_table("Applications (-app)", dispatcher.app_aliases())
        )?;
        return Ok(ExitCode::SUCCESS);
    }

    if !args.command.is_empty() {
        let line = args.command.join(" ");
        let outcome = dispatcher.dispatch(&line);
        writeln!(out, "{}", format_status(&status_for(&outcome)))?;
        return Ok(if outcome.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let (reload_tx, reload_rx) = crossbeam_channel::unbounded();
    let _config_watcher = spawn_config_watcher(config_path, reload_tx);
    let stdin = io::stdin();
    run_prompt(&mut dispatcher, stdin.lock(), &mut out, &reload_rx, args.policy)?;
    Ok(ExitCode::SUCCESS)
}

/// Reads commands line by line until EOF or `:q`, dispatching each one.
///
/// Pending config reloads are applied before every dispatch, so a command
/// never sees a half-applied config. `policy_override` survives reloads.
pub fn run_prompt<P, R, W>(
    dispatcher: &mut Dispatcher<P>,
    input: R,
    out: &mut W,
    reloads: &Receiver<ConfigEvent>,
    policy_override: Option<UnknownPrefixPolicy>,
) -> Result<()>
where
    P: PlatformServices,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim() == QUIT_COMMAND {
            break;
        }

        for event in reloads.try_iter() {
            let status = apply_config_event(dispatcher, event, policy_override);
            writeln!(out, "{}", format_status(&status))?;
        }

        let outcome = dispatcher.dispatch(&line);
        writeln!(out, "{}", format_status(&status_for(&outcome)))?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn apply_config_event<P: PlatformServices>(
    dispatcher: &mut Dispatcher<P>,
    event: ConfigEvent,
    policy_override: Option<UnknownPrefixPolicy>,
) -> StatusMessage {
    match event {
        ConfigEvent::Reloaded(config) => {
            dispatcher.apply_config(&config);
            if let Some(policy) = policy_override {
                dispatcher.set_policy(policy);
            }
            log::info!("Config reloaded");
            StatusMessage::info(format!(
                "Config reloaded ({} settings, {} app aliases)",
                dispatcher.settings_aliases().len(),
                dispatcher.app_aliases().len()
            ))
        }
        ConfigEvent::ReloadFailed(message) => StatusMessage::warning(message),
    }
}

fn is_config_event(event: &NotifyEvent, config_path: &Path) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == config_path.file_name())
}

fn spawn_config_watcher(
    config_path: PathBuf,
    events: Sender<ConfigEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let (tx, rx) = mpsc::channel();

        let mut watcher: RecommendedWatcher = match Watcher::new(
            move |res: Result<NotifyEvent, notify::Error>| {
                let _ = tx.send(res);
            },
            notify::Config::default(),
        ) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create config watcher: {}", e);
                return;
            }
        };

        // Watch the directory: editors often replace the file instead of writing it
        let watch_dir = match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if let Err(e) = watcher.watch(&watch_dir, RecursiveMode::NonRecursive) {
            log::error!("Failed to watch config directory: {}", e);
            return;
        }

        log::debug!("Config watcher started for {:?}", config_path);
        forward_config_changes(rx, &config_path, &events);
    })
}

/// Reloads the config once changes have been quiet for the debounce period.
///
/// A save can arrive as several events (truncate, then write); only the
/// settled file is read.
fn forward_config_changes(
    rx: mpsc::Receiver<notify::Result<NotifyEvent>>,
    config_path: &Path,
    events: &Sender<ConfigEvent>,
) {
    let mut deadline: Option<Instant> = None;

    loop {
        let received = match deadline {
            Some(at) => rx.recv_timeout(at.saturating_duration_since(Instant::now())),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(Ok(event)) => {
                if is_config_event(&event, config_path) {
                    deadline = Some(Instant::now() + CONFIG_DEBOUNCE_DURATION);
                }
            }
            Ok(Err(e)) => log::error!("Config watch error: {}", e),
            Err(RecvTimeoutError::Timeout) => {
                deadline = None;
                if events.send(reload_config(config_path)).is_err() {
                    return;
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                if deadline.is_some() {
                    let _ = events.send(reload_config(config_path));
                }
                return;
            }
        }
    }
}

fn reload_config(config_path: &Path) -> ConfigEvent {
    log::debug!("Config file changed, attempting reload");
    match load_and_validate_config(config_path) {
        Ok(new_config) => ConfigEvent::Reloaded(new_config),
        Err(e) => {
            let msg = format!("Config reload failed: {:#}", e);
            log::warn!("{}", msg);
            ConfigEvent::ReloadFailed(msg)
        }
    }
}
