use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "win-autostart",
    version,
    about = "Register applications to launch at Windows login"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register an application to launch at login
    Enable {
        /// Registration name (registry value name / shortcut filename stem)
        #[arg(long)]
        name: String,
        /// Executable to launch; defaults to the current executable
        #[arg(long)]
        path: Option<PathBuf>,
        /// Start the application hidden
        #[arg(long)]
        hidden: bool,
        /// The install is managed by a desktop-shell updater
        #[arg(long)]
        managed_runtime: bool,
    },
    /// Remove every login registration for an application
    Disable {
        #[arg(long)]
        name: String,
    },
    /// Report whether an application is registered to launch at login
    Status {
        #[arg(long)]
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(Cli::parse())
}

#[cfg(target_os = "windows")]
fn run(cli: Cli) -> anyhow::Result<()> {
    use anyhow::Context;
    use win_autostart::{AppIdentity, AutostartManager, RuntimeEnv};

    match cli.command {
        Commands::Enable {
            name,
            path,
            hidden,
            managed_runtime,
        } => {
            let env = RuntimeEnv::detect(managed_runtime)?;
            let path = path.unwrap_or_else(|| env.current_exe.clone());
            AutostartManager::new(env)
                .enable(&AppIdentity::new(&name, path), hidden)
                .context("failed to enable autostart")?;
            println!("{name}: enabled");
        }
        Commands::Disable { name } => {
            AutostartManager::new(RuntimeEnv::detect(false)?)
                .disable(&name)
                .context("failed to disable autostart")?;
            println!("{name}: disabled");
        }
        Commands::Status { name } => {
            let enabled = AutostartManager::new(RuntimeEnv::detect(false)?)
                .is_enabled(&name)
                .context("failed to query autostart state")?;
            println!("{name}: {}", if enabled { "enabled" } else { "disabled" });
        }
    }

    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn run(_cli: Cli) -> anyhow::Result<()> {
    anyhow::bail!("win-autostart only manages Windows login items")
}
