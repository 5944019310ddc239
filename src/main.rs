use chrono::NaiveDate;
use clap::Parser;
use std::sync::Arc;
use tradejournal::cli::commands::{Cli, Commands};
use tradejournal::domain::error::DomainError;
use tradejournal::domain::ports::trade_provider::TradeProvider;
use tradejournal::domain::values::date_window::DateWindow;
use tradejournal::domain::values::month_key::MonthKey;
use tradejournal::domain::values::sort::{SortDirection, SortField, SortSpec};
use tradejournal::infrastructure::provider::http::HttpTradeProvider;
use tradejournal::infrastructure::provider::snapshot::SnapshotProvider;
use tradejournal::infrastructure::render::terminal;
use tradejournal::TradeJournal;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let provider = match build_provider(&cli) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match run_command(TradeJournal::with_provider(provider), cli.command).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn build_provider(cli: &Cli) -> Result<Arc<dyn TradeProvider>, Box<dyn std::error::Error>> {
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| std::env::var("TRADEJOURNAL_ENDPOINT").ok());
    let snapshot = cli
        .snapshot
        .clone()
        .or_else(|| std::env::var("TRADEJOURNAL_SNAPSHOT").ok());

    // An explicit flag wins over either environment variable.
    match (cli.endpoint.is_some(), endpoint, snapshot) {
        (true, Some(url), _) | (false, Some(url), None) => Ok(Arc::new(HttpTradeProvider::new(url))),
        (_, _, Some(path)) => Ok(Arc::new(SnapshotProvider::from_file(path)?)),
        (_, None, None) => Err(
            "No data source configured. Set TRADEJOURNAL_ENDPOINT or TRADEJOURNAL_SNAPSHOT, or pass --endpoint/--snapshot"
                .into(),
        ),
    }
}

/// Returns Ok(false) when the run completed but the provider reported problems.
async fn run_command(mut journal: TradeJournal, cmd: Commands) -> Result<bool, Box<dyn std::error::Error>> {
    // The text report shows notices inline; everything else reports them on stderr.
    let mut print_notices = true;
    match cmd {
        Commands::Months => {
            journal.load_months().await;
            for m in journal.months() {
                println!("{m}");
            }
        }
        Commands::Report {
            month,
            from,
            to,
            all_dates,
            search,
            sort,
            order,
            json,
        } => {
            let month: Option<MonthKey> = month
                .map(|m| m.parse())
                .transpose()
                .map_err(DomainError::InvalidInput)?;
            let from = parse_day(from.as_deref())?;
            let to = parse_day(to.as_deref())?;
            let direction: SortDirection = order.parse().map_err(DomainError::InvalidInput)?;
            let sort = sort
                .map(|s| s.parse::<SortField>())
                .transpose()
                .map_err(DomainError::InvalidInput)?
                .map(|field| SortSpec::new(field, direction));

            journal.load_months().await;
            let selected = month.or_else(|| journal.months().first().copied());
            if let Some(m) = selected {
                journal.select_month(m).await;
            }

            if all_dates {
                journal.set_window(DateWindow::unbounded());
            } else if from.is_some() || to.is_some() {
                let current = journal.session().window;
                journal.set_window(DateWindow::new(from.or(current.from), to.or(current.to)));
            }
            journal.set_search(&search);
            journal.set_sort(sort);

            let model = journal.render(&chrono::Local);
            if json {
                println!("{}", serde_json::to_string_pretty(&model)?);
            } else {
                print!("{}", terminal::render(&model));
                print_notices = false;
            }
        }
    }

    let notices = journal.take_notices();
    if print_notices {
        for n in &notices {
            eprintln!("{}: {}", n.message, n.detail);
        }
    }
    Ok(notices.is_empty())
}

fn parse_day(s: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    s.map(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            DomainError::InvalidInput(format!("Invalid date format: {s}. Use YYYY-MM-DD"))
        })
    })
    .transpose()
}
