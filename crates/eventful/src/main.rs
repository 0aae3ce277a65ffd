//! eventful CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use eventful_client::GraphQlClient;
use eventful_core::storage::EventCache;
use eventful_core::Resource;
use tokio_stream::{Stream, StreamExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eventful::cli::{BrowseArgs, CacheBackend, Cli, Commands, OutputFormat};
use eventful::output;
use eventful::{Config, EventFeed, EventRepository};

type Repository<C> = EventRepository<GraphQlClient, C>;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output.
    let default_filter = if cli.quiet {
        "eventful=error"
    } else {
        "eventful=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.apply(Config::from_env());

    tracing::debug!(
        endpoint = %config.endpoint,
        cache = ?cli.cache,
        snapshot = ?config.snapshot,
        "Starting eventful"
    );

    match cli.cache {
        #[cfg(feature = "sqlite")]
        CacheBackend::Sqlite => {
            let cache = eventful::storage::SqliteCache::new(&config.sqlite_path).await?;
            run(&cli, &config, cache).await
        }
        #[cfg(not(feature = "sqlite"))]
        CacheBackend::Sqlite => anyhow::bail!("eventful was built without the sqlite feature"),
        #[cfg(feature = "inmemory")]
        CacheBackend::Memory => {
            let cache = eventful::storage::InMemoryCache::new();
            run(&cli, &config, cache).await
        }
        #[cfg(not(feature = "inmemory"))]
        CacheBackend::Memory => anyhow::bail!("eventful was built without the inmemory feature"),
    }
}

async fn run<C>(cli: &Cli, config: &Config, cache: C) -> Result<ExitCode>
where
    C: EventCache + 'static,
{
    let cache = Arc::new(cache);
    // The remote client is only built for commands that talk to it.
    let repository = || -> Result<Repository<C>> {
        let client = GraphQlClient::new(&config.endpoint, config.request_timeout())?;
        Ok(EventRepository::with_config(
            Arc::new(client),
            Arc::clone(&cache),
            config.repository(),
        ))
    };

    let code = match &cli.command {
        Commands::List => {
            let repo = repository()?;
            let last = print(repo.get_events(), cli, output::format_events_resource).await;
            exit_code(last.as_ref())
        }
        Commands::More { offset, limit } => {
            let repo = repository()?;
            let limit = limit.unwrap_or(config.page_size);
            let last = print(
                repo.load_more_events(*offset, limit),
                cli,
                output::format_events_resource,
            )
            .await;
            exit_code(last.as_ref())
        }
        Commands::Show { id } => {
            let repo = repository()?;
            let last = print(
                repo.get_event_by_id(id.clone()),
                cli,
                output::format_event_resource,
            )
            .await;
            exit_code(last.as_ref())
        }
        Commands::Browse(args) => browse(&repository()?, config, args, cli.format).await,
        Commands::ClearCache => {
            cache.clear().await?;
            if !cli.quiet {
                println!("Cleared cached events");
            }
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

async fn print<T>(
    stream: impl Stream<Item = Resource<T>>,
    cli: &Cli,
    format: impl Fn(&Resource<T>, OutputFormat) -> String,
) -> Option<Resource<T>> {
    output::print_emissions(stream, cli.quiet, |resource| {
        println!("{}", format(resource, cli.format))
    })
    .await
}

/// Failure only when the command ended in an error with nothing to show.
fn exit_code<T>(last: Option<&Resource<T>>) -> ExitCode {
    match last {
        Some(Resource::Error { data: None, .. }) | None => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

async fn browse<C>(
    repo: &Repository<C>,
    config: &Config,
    args: &BrowseArgs,
    format: OutputFormat,
) -> ExitCode
where
    C: EventCache + 'static,
{
    let mut feed = EventFeed::new(config.page_size);

    let first = repo.get_events();
    tokio::pin!(first);
    while let Some(resource) = first.next().await {
        feed.apply_first_page(&resource);
    }

    // A failed first page leaves the cursor at zero; don't page from there.
    let mut pages = 0;
    while feed.error().is_none() && pages < args.pages {
        let Some(request) = feed.next_page() else {
            break;
        };
        let more = repo.load_more_events(request.offset, request.limit);
        tokio::pin!(more);
        while let Some(resource) = more.next().await {
            feed.apply_more(&resource);
        }
        pages += 1;
    }

    let visible = feed.visible(&args.filter(), chrono::Utc::now());
    println!("{}", output::format_feed(&feed, &visible, format));

    if feed.events().is_empty() && feed.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
