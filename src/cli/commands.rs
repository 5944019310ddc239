use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradejournal", about = "Monthly trading journal reports")]
pub struct Cli {
    /// Journal endpoint URL (overrides TRADEJOURNAL_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    /// Read months and trades from a JSON snapshot instead (overrides TRADEJOURNAL_SNAPSHOT)
    #[arg(long, global = true, conflicts_with = "endpoint")]
    pub snapshot: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List selectable reporting months
    Months,
    /// Show KPIs, chart series and the trade table for a month
    Report {
        /// Month to report (YYYY-MM); defaults to the first catalog entry
        #[arg(long)]
        month: Option<String>,
        /// First day of the window (YYYY-MM-DD); defaults to the month start
        #[arg(long)]
        from: Option<String>,
        /// Last day of the window, inclusive (YYYY-MM-DD); defaults to the month end
        #[arg(long)]
        to: Option<String>,
        /// Ignore the month boundaries and report every loaded trade
        #[arg(long, conflicts_with_all = ["from", "to"])]
        all_dates: bool,
        /// Case-insensitive filter on symbol, ticket or close reason (table only)
        #[arg(long, default_value = "")]
        search: String,
        /// Table sort column (closing_time_utc, symbol, type, lots, profit_usd, commission_usd, swap_usd, close_reason, ticket)
        #[arg(long)]
        sort: Option<String>,
        /// Sort direction (asc, desc)
        #[arg(long, default_value = "asc")]
        order: String,
        /// Print the render model as JSON
        #[arg(long)]
        json: bool,
    },
}
