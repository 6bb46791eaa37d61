use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use monolog_app::api::HttpProfileApi;
use monolog_app::board::PostBoard;
use monolog_app::config::{self, AppConfig, Settings};
use monolog_app::profile::{ProfileState, ProfileView};
use monolog_app::shell::{self, Shell};
use monolog_core::store::PostStore;
use monolog_storage::kv::FileStore;
use monolog_storage::posts::LocalPostRepository;

/// Personal page: profile and monologue posts
#[derive(Parser, Debug)]
#[command(name = "monolog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the profile server
    #[arg(long, global = true, env = "MONOLOG_API_URL")]
    api_url: Option<String>,

    /// Directory for locally stored posts
    #[arg(long, global = true, env = "MONOLOG_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page at a route
    View {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Add a post
    Post {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a post by id
    Delete { id: u64 },
    /// Show the monologue view
    Posts,
    /// Change the profile name
    Rename { name: String },
    /// Show effective settings
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        save: bool,
    },
}

type Board = PostBoard<LocalPostRepository<FileStore>>;

fn open_board(settings: &Settings) -> Board {
    let repo = LocalPostRepository::new(FileStore::new(&settings.data_dir));
    PostBoard::new(PostStore::load(repo))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = config::config_path()?;
    let file_config = config::load_config(&config_path)?;
    let settings = Settings::resolve(cli.api_url, cli.data_dir, file_config.as_ref())?;
    tracing::debug!(?settings, "settings resolved");

    match cli.command.unwrap_or(Command::View {
        path: "/".to_string(),
    }) {
        Command::View { path } => {
            let api = HttpProfileApi::new(&settings.api_base_url);
            let mut shell = Shell::new(ProfileView::new(api), open_board(&settings));
            print!("{}", shell.render(&path).await);
        }
        Command::Posts => {
            print!("{}", shell::render_header("/monologue"));
            print!("{}", open_board(&settings).render());
        }
        Command::Post { text } => {
            let mut board = open_board(&settings);
            board.set_input(text.join(" "));
            match board.submit()? {
                Some(post) => println!("posted #{}", post.id),
                None => println!("nothing to post"),
            }
        }
        Command::Delete { id } => {
            let mut board = open_board(&settings);
            if board.delete(id)? {
                println!("deleted #{id}");
            } else {
                println!("no post #{id}");
            }
        }
        Command::Rename { name } => {
            let mut view = ProfileView::new(HttpProfileApi::new(&settings.api_base_url));
            view.mount().await;
            if let ProfileState::Error(message) = view.state() {
                return Err(eyre::eyre!("{message}"));
            }

            view.edit();
            view.set_draft(name);
            let saved = view.save().await;
            print!("{}", view.render());
            if !saved {
                return Err(eyre::eyre!("profile was not saved"));
            }
        }
        Command::Config { save } => {
            println!("config file: {}", config_path.display());
            println!("api url:     {}", settings.api_base_url);
            println!("data dir:    {}", settings.data_dir.display());
            if save {
                let config = AppConfig {
                    api_base_url: settings.api_base_url.clone(),
                    data_dir: Some(settings.data_dir.clone()),
                    ..AppConfig::default()
                };
                config::save_config(&config_path, &config)?;
            }
        }
    }

    Ok(())
}
