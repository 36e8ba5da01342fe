//! `huellitas`: command-line client for the Huellitas adoption backend.
//!
//! Shares `api-client` with the web front-end. The session token and cached
//! user live in a JSON file (see [`store`]) so commands can be chained across
//! invocations the way browser tabs share `localStorage`.

mod store;


use std::path::PathBuf;
use std::sync::Arc;

use api_client::config::ConfigError;
use api_client::geocoding::GeocodeError;
use api_client::types::{Credentials, GeoPoint, PetQuery, Registration, RequestStatus, Sex, Species};
use api_client::{ApiClient, ApiError, ClientConfig, ReqwestTransport, SessionController, SessionState, UserType};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::store::{FileStore, default_session_path};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error("not signed in; run `huellitas login` first")]
    NotSignedIn,
    #[error("unknown {kind} `{value}`")]
    InvalidValue { kind: &'static str, value: String },
    #[error("session file: {0}")]
    SessionFile(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "huellitas", about = "Huellitas pet adoption CLI")]
struct Cli {
    /// Backend root, e.g. `https://api.example.org/api`.
    #[arg(long, env = "HUELLITAS_API_URL")]
    api_url: Option<String>,

    #[arg(long, env = "HUELLITAS_MAPBOX_TOKEN", hide_env_values = true)]
    mapbox_token: Option<String>,

    #[arg(long, env = "HUELLITAS_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Log api-client activity to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        email: String,
        #[arg(long, env = "HUELLITAS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register(RegisterArgs),
    Logout,
    Whoami {
        /// Rotate the stored token and re-fetch the profile from the backend.
        #[arg(long)]
        refresh: bool,
    },
    Pets(PetsCommand),
    Requests(RequestsCommand),
    Favorites(FavoritesCommand),
    Lost(LostCommand),
    Geocode {
        query: String,
    },
    Stats,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long = "type", default_value = "usuario")]
    user_type: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "HUELLITAS_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    phone: Option<String>,
}

#[derive(Args, Debug)]
struct PetsCommand {
    #[command(subcommand)]
    command: PetsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PetsSubcommand {
    List {
        #[arg(long)]
        species: Option<String>,
        #[arg(long)]
        sex: Option<String>,
        #[arg(long, default_value_t = false)]
        available: bool,
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Mine,
}

#[derive(Args, Debug)]
struct RequestsCommand {
    #[command(subcommand)]
    command: RequestsSubcommand,
}

#[derive(Subcommand, Debug)]
enum RequestsSubcommand {
    Mine,
    Received,
    Cancel { id: String },
    Approve { id: String },
    Reject { id: String },
}

#[derive(Args, Debug)]
struct FavoritesCommand {
    #[command(subcommand)]
    command: FavoritesSubcommand,
}

#[derive(Subcommand, Debug)]
enum FavoritesSubcommand {
    List,
    Add { pet_id: String },
    Remove { pet_id: String },
}

#[derive(Args, Debug)]
struct LostCommand {
    #[command(subcommand)]
    command: LostSubcommand,
}

#[derive(Subcommand, Debug)]
enum LostSubcommand {
    Near {
        address: String,
        #[arg(long, default_value_t = 5.0)]
        radius_km: f64,
    },
    Found {
        id: String,
    },
}

/// Geocoder hit as printed by `geocode` and `lost near`.
#[derive(Debug, Serialize)]
struct PlaceOutput<'a> {
    name: &'a str,
    location: GeoPoint,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    let config = match &cli.api_url {
        Some(url) => ClientConfig::from_env()?.with_base_url(url)?,
        None => ClientConfig::from_env()?,
    };
    let config = match cli.mapbox_token {
        Some(token) => config.with_mapbox_token(token),
        None => config,
    };
    let store = FileStore::open(cli.session_file.unwrap_or_else(default_session_path))?;
    let transport = ReqwestTransport::new()?;
    let api = ApiClient::new(&config, Arc::new(transport), Arc::new(store));
    let session = SessionController::new(api);

    run(&session, &config, cli.command).await
}

async fn run(session: &Arc<SessionController>, config: &ClientConfig, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            let response = session.sign_in(&Credentials { email, password }).await?;
            println!("signed in as {} ({})", response.user.display_name(), response.user.user_type.label());
            Ok(())
        }
        Command::Register(args) => run_register(session, args).await,
        Command::Logout => {
            session.sign_out();
            println!("signed out");
            Ok(())
        }
        Command::Whoami { refresh } => {
            let mut user = restore(session).await?;
            if refresh {
                match session.refresh_token().await {
                    Err(e) if e.is_unauthorized() => return Err(e.into()),
                    Err(e) => tracing::warn!(error = %e, "token refresh failed; keeping current token"),
                    Ok(()) => {}
                }
                user = session.refresh_user().await?;
            }
            print_json(&user)
        }
        Command::Pets(pets) => run_pets(session, pets).await,
        Command::Requests(requests) => run_requests(session, requests).await,
        Command::Favorites(favorites) => run_favorites(session, favorites).await,
        Command::Lost(lost) => run_lost(session, config, lost).await,
        Command::Geocode { query } => {
            let places = session.api().geocoder(config.mapbox_token.clone()).search(&query).await?;
            let output = places.iter().map(|p| PlaceOutput { name: &p.name, location: p.point }).collect::<Vec<_>>();
            print_json(&output)
        }
        Command::Stats => {
            restore(session).await?;
            print_json(&session.api().dashboard_stats().await?)
        }
    }
}

/// Restore the persisted session and confirm it with the backend.
async fn restore(session: &Arc<SessionController>) -> Result<api_client::User, CliError> {
    if let Some(revalidation) = session.initialize().await {
        revalidation.run().await;
    }
    match session.state() {
        SessionState::Authenticated(user) => Ok(user),
        _ => Err(CliError::NotSignedIn),
    }
}

async fn run_register(session: &Arc<SessionController>, args: RegisterArgs) -> Result<(), CliError> {
    let user_type = parse_user_type(&args.user_type)?;
    let registration = Registration {
        name: args.name,
        email: args.email,
        password: args.password,
        phone: args.phone,
        ..Registration::default()
    };
    let response = if user_type == UserType::Usuario {
        session.register(&registration).await?
    } else {
        session.register_by_type(user_type, &registration).await?
    };
    println!("registered {} as {}", response.user.email, response.user.user_type.label());
    Ok(())
}

async fn run_pets(session: &Arc<SessionController>, pets: PetsCommand) -> Result<(), CliError> {
    match pets.command {
        PetsSubcommand::List { species, sex, available, search } => {
            let query = PetQuery {
                species: species.as_deref().map(parse_species).transpose()?,
                sex: sex.as_deref().map(parse_sex).transpose()?,
                size: None,
                available: available.then_some(true),
                search,
            };
            print_json(&session.api().list_pets(&query).await?)
        }
        PetsSubcommand::Show { id } => print_json(&session.api().get_pet(&id).await?),
        PetsSubcommand::Mine => {
            restore(session).await?;
            print_json(&session.api().my_pets().await?)
        }
    }
}

async fn run_requests(session: &Arc<SessionController>, requests: RequestsCommand) -> Result<(), CliError> {
    restore(session).await?;
    let api = session.api();
    match requests.command {
        RequestsSubcommand::Mine => print_json(&api.my_adoption_requests().await?),
        RequestsSubcommand::Received => print_json(&api.received_adoption_requests().await?),
        RequestsSubcommand::Cancel { id } => {
            api.cancel_adoption_request(&id).await?;
            println!("cancelled {id}");
            Ok(())
        }
        RequestsSubcommand::Approve { id } => print_json(&api.set_adoption_status(&id, RequestStatus::Approved).await?),
        RequestsSubcommand::Reject { id } => print_json(&api.set_adoption_status(&id, RequestStatus::Rejected).await?),
    }
}

async fn run_favorites(session: &Arc<SessionController>, favorites: FavoritesCommand) -> Result<(), CliError> {
    restore(session).await?;
    let api = session.api();
    match favorites.command {
        FavoritesSubcommand::List => print_json(&api.favorites().await?),
        FavoritesSubcommand::Add { pet_id } => {
            api.add_favorite(&pet_id).await?;
            println!("added {pet_id}");
            Ok(())
        }
        FavoritesSubcommand::Remove { pet_id } => {
            api.remove_favorite(&pet_id).await?;
            println!("removed {pet_id}");
            Ok(())
        }
    }
}

async fn run_lost(session: &Arc<SessionController>, config: &ClientConfig, lost: LostCommand) -> Result<(), CliError> {
    match lost.command {
        LostSubcommand::Near { address, radius_km } => {
            let place = session.api().geocoder(config.mapbox_token.clone()).locate(&address).await?;
            eprintln!("searching {radius_km} km around {}", place.name);
            print_json(&session.api().lost_pets_near(place.point, radius_km).await?)
        }
        LostSubcommand::Found { id } => {
            restore(session).await?;
            print_json(&session.api().mark_lost_pet_found(&id).await?)
        }
    }
}

fn parse_user_type(raw: &str) -> Result<UserType, CliError> {
    UserType::parse(raw)
        .filter(|t| UserType::REGISTRABLE.contains(t))
        .ok_or_else(|| CliError::InvalidValue { kind: "account type", value: raw.to_owned() })
}

fn parse_species(raw: &str) -> Result<Species, CliError> {
    Species::parse(raw).ok_or_else(|| CliError::InvalidValue { kind: "species", value: raw.to_owned() })
}

fn parse_sex(raw: &str) -> Result<Sex, CliError> {
    Sex::parse(raw).ok_or_else(|| CliError::InvalidValue { kind: "sex", value: raw.to_owned() })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
