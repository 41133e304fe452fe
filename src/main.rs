//! devlog-capture - Entry Point

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use devlog_capture::config::resolve_config;
use devlog_capture::gate::{self, Gate};
use devlog_capture::logging;
use devlog_capture::model::{EventKind, HookResponse};
use devlog_capture::source::{EventSource, Transport};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

/// devlog-capture - record agent hook events to dev-mode JSONL logs
#[derive(Parser, Debug)]
#[command(name = "devlog-capture")]
#[command(version)]
#[command(about = "Capture agent tool-use and prompt hook events when dev mode is enabled")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log directory (default: ~/.claude/denoland-dev-logs)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Hook event to capture
    #[command(subcommand)]
    pub event: EventCommand,
}

/// Hook event handlers.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCommand {
    /// Capture a finished tool call to tool-uses.jsonl
    ToolUse {
        /// Where the event data comes from
        #[arg(long, value_enum, default_value_t = Transport::Stdin)]
        source: Transport,
    },
    /// Capture a submitted prompt to user-prompts.jsonl
    UserPrompt {
        /// Where the event data comes from
        #[arg(long, value_enum, default_value_t = Transport::Stdin)]
        source: Transport,
    },
}

impl EventCommand {
    /// Event category and transport for this handler.
    pub fn split(self) -> (EventKind, Transport) {
        match self {
            EventCommand::ToolUse { source } => (EventKind::ToolUse, source),
            EventCommand::UserPrompt { source } => (EventKind::UserPrompt, source),
        }
    }
}

/// Help and version requests keep clap's own output and exit code.
fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if is_informational(e.kind()) => e.exit(),
        Err(e) => {
            // A misconfigured hook command must not block the host event
            let _ = e.print();
            let _ = HookResponse::ACKNOWLEDGE.write_to(io::stdout().lock());
            return ExitCode::SUCCESS;
        }
    };
    let (kind, transport) = args.event.split();

    // Defaults → Config File → Env Vars → CLI Args; never fails
    let (config, config_error) = resolve_config(args.config, args.log_dir);

    // Diagnostics: configured file, else stderr. Losing them is not fatal.
    if let Err(e) = logging::init(config.diagnostics_file.as_deref(), &config.log_level) {
        let _ = logging::init(None, &config.log_level);
        warn!(error = %e, "Diagnostics file unavailable, using stderr");
    }
    if let Some(e) = config_error {
        warn!(error = %e, "Ignoring unusable config file");
    }

    debug!(config = ?config, event = %kind, ?transport, "Configuration resolved");

    let gate = Gate::evaluate(config.log_dir);
    let source = EventSource::for_transport(transport, kind);
    gate::run(&gate, kind, source, io::stdout().lock());

    ExitCode::SUCCESS
}
