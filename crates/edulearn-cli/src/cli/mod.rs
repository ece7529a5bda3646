//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use edulearn_core::auth::{AuthMode, Credentials};
use edulearn_core::{config, interrupt};

mod commands;

#[derive(Parser)]
#[command(name = "edulearn")]
#[command(version)]
#[command(about = "EduLearn terminal learning companion")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print catalog data
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Run a headless session against the identity provider
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

#[derive(clap::Subcommand)]
enum CatalogCommands {
    /// List courses
    Courses,
    /// List the lessons of a course
    Lessons {
        /// Course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
    },
    /// List students
    Students,
}

/// Arguments shared by the auth subcommands.
#[derive(clap::Args, Debug, Clone)]
struct SessionArgs {
    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,

    /// Sign out again once signed in
    #[arg(long)]
    sign_out: bool,

    /// Print the identity as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Subcommand)]
enum AuthCommands {
    /// Sign in with an existing account
    SignIn {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Create an account and sign in
    SignUp {
        /// Full name shown in the app
        #[arg(long)]
        name: String,

        #[command(flatten)]
        session: SessionArgs,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init().context("install Ctrl+C handler")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // default to the interactive app
    let Some(command) = cli.command else {
        return commands::app::run(&config).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },

        Commands::Catalog { command } => match command {
            CatalogCommands::Courses => commands::catalog::courses(&config),
            CatalogCommands::Lessons { course_id } => {
                commands::catalog::lessons(&config, &course_id)
            }
            CatalogCommands::Students => commands::catalog::students(&config),
        },

        Commands::Auth { command } => {
            let (mode, credentials, session) = match command {
                AuthCommands::SignIn { session } => (
                    AuthMode::SignIn,
                    Credentials::new(&session.email, &session.password),
                    session,
                ),
                AuthCommands::SignUp { name, session } => (
                    AuthMode::SignUp,
                    Credentials::new(&session.email, &session.password).with_display_name(name),
                    session,
                ),
            };
            commands::auth::run(commands::auth::AuthRunOptions {
                config: &config,
                mode,
                credentials,
                sign_out: session.sign_out,
                json: session.json,
            })
            .await
        }
    }
}
