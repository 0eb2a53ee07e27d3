use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use steamscan::{SteamApp, SteamInstall};
use tabled::{settings::Style, Table, Tabled};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "steamscan")]
#[command(
    author,
    version,
    about = "Locate Steam installations, libraries and installed apps"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate the Steam installation
    Locate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find one app by its numeric id
    App {
        /// Steam app id (e.g. 440)
        app_id: String,

        /// Use this installation root instead of discovering one
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all installed apps across every library folder
    List {
        /// Use this installation root instead of discovering one
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the Steam client is running
    Running,
}

#[derive(Tabled)]
struct AppRow {
    #[tabled(rename = "App ID")]
    app_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Install Dir")]
    install_dir: String,
}

impl From<&SteamApp> for AppRow {
    fn from(app: &SteamApp) -> Self {
        Self {
            app_id: app.app_id.clone(),
            name: app.name.clone().unwrap_or_else(|| "-".to_string()),
            size: app.size_on_disk.map(format_size).unwrap_or_else(|| "-".to_string()),
            install_dir: app
                .install_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Locate { json } => {
            let install = steamscan::locate().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&install)?);
            } else {
                print_install(&install);
            }
        }
        Commands::App { app_id, root, json } => {
            let app = steamscan::find_app(&app_id, root.as_deref()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&app)?);
            } else {
                print_apps(std::slice::from_ref(&app));
            }
        }
        Commands::List { root, json } => {
            let apps = steamscan::list_apps(root.as_deref()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&apps)?);
            } else if apps.is_empty() {
                println!("No installed apps found.");
            } else {
                println!("Found {} installed apps:", apps.len());
                println!();
                print_apps(&apps);
            }
        }
        Commands::Running => {
            if steamscan::is_running().await {
                println!("Steam is running.");
            } else {
                println!("Steam is not running.");
            }
        }
    }

    Ok(())
}

fn print_install(install: &SteamInstall) {
    println!("Steam installation");
    println!();
    println!("  Path:      {}", install.path.display());
    println!("  Platform:  {}", install.platform);
    println!("  Running:   {}", if install.is_running { "yes" } else { "no" });
    println!(
        "  Version:   {}",
        install.version.as_deref().unwrap_or("unknown")
    );
    println!("  Libraries:");
    for library in &install.libraries {
        println!("    {}", library.display());
    }
}

fn print_apps(apps: &[SteamApp]) {
    let rows: Vec<AppRow> = apps.iter().map(AppRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}
