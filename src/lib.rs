pub mod config;
pub mod error;
pub mod models;
pub mod catalog; // Sample catalogs per domain
pub mod presentation; // Badge mapping tables
pub mod filter; // Search/filter reducer
pub mod stats; // Stat cards
pub mod navigation; // Role sidebars
pub mod dashboard; // View model composer
pub mod assistant; // Simulated chat replies

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::config::DashboardPolicy;
use crate::dashboard::{compose_dashboard, FilterStates};
use crate::error::DashboardError;
use crate::filter::FilterState;
use crate::models::{Domain, Role};
use crate::navigation::OVERVIEW;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `carehub [role] [view] [query]`
    Dashboard {
        role: Role,
        view: String,
        query: Option<String>,
    },
    /// `carehub catalog <domain>`
    Catalog { domain: Domain },
    /// `carehub ask <prompt...>`
    Ask { prompt: String },
}

/// Parses positional arguments (program name already stripped).
pub fn parse_args<I>(args: I) -> Result<Command, DashboardError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let first = args.next();

    match first.as_deref() {
        Some("ask") => {
            let prompt = args.collect::<Vec<_>>().join(" ");
            return Ok(Command::Ask { prompt });
        }
        Some("catalog") => {
            let raw = args.next().unwrap_or_default();
            return Ok(Command::Catalog {
                domain: Domain::from_str(&raw)?,
            });
        }
        _ => {}
    }

    let role = match first {
        Some(raw) => Role::from_str(&raw)?,
        None => Role::Admin,
    };
    let view = args.next().unwrap_or_else(|| OVERVIEW.to_string());
    let query = args.next().filter(|q| !q.is_empty());

    Ok(Command::Dashboard { role, view, query })
}

/// Installs the fmt subscriber on stderr. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Executes a command against the sample catalogs and returns pretty JSON.
pub async fn run(command: Command) -> Result<String, DashboardError> {
    let policy = DashboardPolicy::default();
    tracing::info!("{} v{} handling {:?}", config::APP_NAME, config::APP_VERSION, command);

    match command {
        Command::Dashboard { role, view, query } => {
            let filters: FilterStates = match query {
                Some(query) => Domain::ALL
                    .iter()
                    .map(|domain| (*domain, FilterState::new().with_query(query.as_str())))
                    .collect(),
                None => FilterStates::new(),
            };
            let view_model = compose_dashboard(role, &view, catalog::sample(), &filters, &policy)?;
            Ok(serde_json::to_string_pretty(&view_model)?)
        }
        Command::Catalog { domain } => {
            Ok(serde_json::to_string_pretty(&catalog::sample().domain_json(domain)?)?)
        }
        Command::Ask { prompt } => {
            let mut handle = assistant::schedule_reply(&prompt, policy.assistant_delay);
            let outcome = handle.wait(policy.assistant_delay * 2).await;
            Ok(serde_json::to_string_pretty(&outcome)?)
        }
    }
}
