use acceso_app_core::FilePersistence;
use acceso_cli::settings::{self, SettingsUpdate};
use acceso_cli::{commands, CliBackend, Ports};
use acceso_config::{API_KEY_ENV, PROJECT_ID_ENV};
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, value_enum, default_value_t = CliBackend::Firebase)]
    backend: CliBackend,
    /// Settings file to use instead of the platform config directory
    #[arg(long, global = true)]
    settings: Option<Utf8PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BackendArgs {
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, env = PROJECT_ID_ENV)]
    project_id: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Create an account and its profile document
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long = "confirm")]
        confirmation: String,
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Show or change stored backend settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    Show,
    Set {
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        project_id: Option<String>,
        #[arg(long)]
        identity_endpoint: Option<String>,
        #[arg(long)]
        firestore_endpoint: Option<String>,
        #[arg(long)]
        timeout_secs: Option<u64>,
        #[arg(long)]
        rollback: Option<bool>,
    },
}

fn connect(
    persistence: &FilePersistence,
    backend: CliBackend,
    args: BackendArgs,
) -> anyhow::Result<(Ports, acceso_app_core::RegisterOptions)> {
    let mut settings = persistence.load_settings()?;
    SettingsUpdate {
        api_key: args.api_key,
        project_id: args.project_id,
        ..Default::default()
    }
    .apply(&mut settings);
    let ports = Ports::connect(backend, &settings)?;
    Ok((ports, settings.register_options()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let builder = FmtSubscriber::builder().with_max_level(level);
    match EnvFilter::try_from_default_env() {
        Ok(filter) => tracing::subscriber::set_global_default(
            builder.with_env_filter(filter).finish(),
        ),
        Err(_) => tracing::subscriber::set_global_default(builder.finish()),
    }
    .expect("default subscriber");

    let persistence = match cli.settings {
        Some(path) => FilePersistence::at(path.into_std_path_buf()),
        None => FilePersistence::new(),
    };

    match cli.command {
        Commands::Login {
            email,
            password,
            backend,
        } => {
            let (ports, _) = connect(&persistence, cli.backend, backend)?;
            commands::cmd_login(&ports, email, password).await?;
        }
        Commands::Register {
            name,
            email,
            password,
            confirmation,
            backend,
        } => {
            let (ports, options) = connect(&persistence, cli.backend, backend)?;
            commands::cmd_register(&ports, options, name, email, password, confirmation).await?;
        }
        Commands::Settings { command } => match command {
            SettingsCommands::Show => settings::handle_show(&persistence)?,
            SettingsCommands::Set {
                api_key,
                project_id,
                identity_endpoint,
                firestore_endpoint,
                timeout_secs,
                rollback,
            } => settings::handle_set(
                &persistence,
                SettingsUpdate {
                    api_key,
                    project_id,
                    identity_endpoint,
                    firestore_endpoint,
                    timeout_secs,
                    rollback,
                },
            )?,
        },
    }

    Ok(())
}
