//! Console banner and log setup.

use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prints the banner and installs the log subscriber.
///
/// Safe to call multiple times; only the first call has effect. The filter
/// defaults to `info` and honours `RUST_LOG`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init();
    });
}

pub fn print_banner() {
    let banner = r#"
  ____                       _    ____           _
 / ___| _ __ ___   __ _ _ __| |_ / ___|__ _ _ __| |_
 \___ \| '_ ` _ \ / _` | '__| __| |   / _` | '__| __|
  ___) | | | | | | (_| | |  | |_| |__| (_| | |  | |_
 |____/|_| |_| |_|\__,_|_|   \__|\____\__,_|_|   \__|
"#;

    let version_line = format!("          v{VERSION} - Genetic Shopping Route Optimizer\n");

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// Prints where the server can be reached.
pub fn print_listening(address: &str) {
    println!(
        "{} Server listening on {}",
        "▸".bright_green(),
        format!("http://{address}").bright_cyan().underline()
    );
    println!(
        "{} Try {}\n",
        "▸".bright_green(),
        format!("http://{address}/api/health").bright_cyan().underline()
    );
}
