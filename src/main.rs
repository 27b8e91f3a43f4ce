use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use zenno::{PreferenceStore, Theme};

#[derive(Parser)]
#[command(name = "zenno")]
#[command(about = "Developer productivity dashboard")]
struct Cli {
    /// Directory holding the preference database
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect or change the stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print the stored theme and sign-in flag
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Remove both entries so the next start uses the defaults
    Reset,
    /// Store a theme (light or dark)
    SetTheme {
        #[arg(value_name = "THEME")]
        theme: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(&args);

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    match args.command {
        Some(Command::Prefs { action }) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_prefs(data_dir, action))
        }
        None => launch_gui(data_dir),
    }
}

fn init_logging(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if cli.verbose { "debug" } else { cli.log_level.as_str() };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("zenno"))
        .unwrap_or_else(|| PathBuf::from(".zenno"))
}

async fn run_prefs(data_dir: PathBuf, action: PrefsAction) -> anyhow::Result<()> {
    let store = PreferenceStore::open_in(&data_dir).await?;

    match action {
        PrefsAction::Show { json } => {
            let preference = store.load().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&preference)?);
            } else {
                println!("Preferences: {:?}", store.db_file());
                println!("  theme:         {}", preference.theme);
                println!("  authenticated: {}", preference.authenticated);
            }
        }
        PrefsAction::Reset => {
            store.reset().await?;
            info!(db_file = ?store.db_file(), "preferences reset");
            println!("Preferences reset to defaults");
        }
        PrefsAction::SetTheme { theme } => {
            let theme: Theme = theme.parse()?;
            store.set_theme(theme).await?;
            println!("Theme set to {}", theme);
        }
    }

    store.close().await;
    Ok(())
}

#[cfg(feature = "gui")]
fn launch_gui(data_dir: PathBuf) -> anyhow::Result<()> {
    info!(data_dir = ?data_dir, "starting dashboard");
    zenno::gui::run(data_dir).map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_data_dir: PathBuf) -> anyhow::Result<()> {
    anyhow::bail!("zenno was built without the `gui` feature; only `prefs` commands are available")
}
