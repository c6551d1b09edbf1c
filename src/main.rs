use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "equinox")]
#[command(about = "Coaching platform core - accounts, workouts, badges and leaderboards")]
#[command(version)]
struct Cli {
    /// Path to the data directory (defaults to ~/.equinox)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new coach or client account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Coach or Client
        #[arg(long, default_value = "Client")]
        role: String,
    },

    /// Sign in and show the account profile
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Show the client leaderboard
    Leaderboard,

    /// Show the client-by-badge achievement matrix (coach overview)
    Achievements,

    /// List the workout catalog
    Workouts,

    /// Add a workout to the catalog (coach)
    AddWorkout {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "Beginner")]
        difficulty: String,
        #[arg(long, default_value = "")]
        equipment: String,
        #[arg(long, default_value = "")]
        body_part: String,
    },

    /// Generate a randomized workout program (client)
    Program {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        body_part: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        /// Mark the generated program as completed
        #[arg(long)]
        complete: bool,
    },

    /// Post a board message (coach)
    Post {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        message: String,
        /// General, Urgent or Info (repeatable)
        #[arg(long, default_value = "General")]
        category: Vec<String>,
    },

    /// List all coach messages, newest first
    Messages,

    /// Reply to a board message by id
    Reply {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        content: String,
    },

    /// Create or overwrite a named workout plan (coach)
    Plan {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        /// Challenge titles, in plan order (repeatable)
        #[arg(long, required = true)]
        title: Vec<String>,
    },

    /// Show a motivational quote
    Quote,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let data_dir = cli
        .data_dir
        .unwrap_or_else(equinox::store::default_data_dir);

    match cli.command {
        Commands::Signup {
            email,
            username,
            password,
            role,
        } => cli::accounts::signup(&data_dir, &email, &username, &password, &role),
        Commands::Signin { email, password } => cli::accounts::signin(&data_dir, &email, &password),
        Commands::Leaderboard => cli::accounts::leaderboard(&data_dir),
        Commands::Achievements => cli::accounts::achievements(&data_dir),
        Commands::Workouts => cli::workouts::list(&data_dir),
        Commands::AddWorkout {
            email,
            password,
            title,
            description,
            difficulty,
            equipment,
            body_part,
        } => cli::workouts::add(
            &data_dir,
            &email,
            &password,
            &title,
            &description,
            &difficulty,
            &equipment,
            &body_part,
        ),
        Commands::Program {
            email,
            password,
            body_part,
            difficulty,
            complete,
        } => cli::workouts::program(
            &data_dir,
            &email,
            &password,
            body_part.as_deref(),
            difficulty.as_deref(),
            complete,
        ),
        Commands::Post {
            email,
            password,
            message,
            category,
        } => cli::board::post(&data_dir, &email, &password, &message, &category),
        Commands::Messages => cli::board::list(&data_dir),
        Commands::Reply {
            email,
            password,
            id,
            content,
        } => cli::board::reply(&data_dir, &email, &password, &id, &content),
        Commands::Plan {
            email,
            password,
            name,
            title,
        } => cli::workouts::plan(&data_dir, &email, &password, &name, title),
        Commands::Quote => cli::workouts::quote(&data_dir),
    }
}
