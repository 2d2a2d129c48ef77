use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{
    Args,
    Parser,
    Subcommand
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use workcal::configuration::Configuration;
use workcal::feed::feederror::FeedError;
use workcal::feed::holidayclassifier::DescriptionMarker;
use workcal::feed::holidaysource::{
    HolidayFeed,
    IcalFileSource,
    IcalUrlSource
};
use workcal::manager::managererror::ManagerError;
use workcal::time::daterangeformatter::{
    CollapsePolicy,
    CollapseUnit,
    DateFormat,
    format_date_range
};
use workcal::time::rangeofdates::RangeOfDates;
use workcal::time::weekday::{
    BusinessDaySet,
    WeekDay
};
use workcal::workdayrequest::{
    WorkDayRequest,
    get_work_days_for_date_range
};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Configuration(#[from] ManagerError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String)
}

#[derive(Parser)]
#[command(name = "workcal")]
#[command(author, version, about = "Work days between holidays, and compact date range labels")]
struct Cli {
    /// JSON configuration with named holiday feeds and defaults
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands {
    /// List the work days of a period, one ISO date per line
    Workdays {
        /// First day of the period, inclusive
        #[arg(long)]
        start: NaiveDate,

        /// Last day of the period, inclusive (default: end of the start month)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Business week days, 0 = Sunday .. 6 = Saturday (default: 1,2,3,4,5)
        #[arg(long, value_delimiter = ',')]
        business_days: Option<Vec<u8>>,

        /// Text that marks an event description as a public holiday
        #[arg(long, conflicts_with = "feed")]
        marker: Option<String>,

        /// Print a JSON array instead of plain lines
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        feed: FeedArgs
    },

    /// Render a label for a date range
    Format(FormatArgs)
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct FeedArgs {
    /// iCalendar feed URL
    #[arg(long)]
    url: Option<String>,

    /// Local iCalendar file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Name of a feed from the configuration file
    #[arg(long)]
    feed: Option<String>
}

impl FeedArgs {
    fn resolve(self, configuration: &Configuration, marker: Option<String>) -> Result<HolidayFeed, CliError> {
        let classifier = marker.map(|m| Arc::new(DescriptionMarker::new(&m)));
        if let Some(url) = self.url {
            let mut source = IcalUrlSource::new(url);
            if let Some(classifier) = classifier {
                source = source.with_classifier(classifier);
            }
            return Ok(HolidayFeed::IcalUrl(source));
        }
        if let Some(path) = self.file {
            let mut source = IcalFileSource::new(path);
            if let Some(classifier) = classifier {
                source = source.with_classifier(classifier);
            }
            return Ok(HolidayFeed::IcalFile(source));
        }
        match self.feed {
            Some(name) => Ok(configuration.holiday_feed_manager().get(&name)?),
            None => Err(CliError::InvalidArgument("one of --url, --file or --feed is required".to_owned()))
        }
    }
}

#[derive(Args)]
struct FormatArgs {
    /// First day of the range
    #[arg(long)]
    start: NaiveDate,

    /// Last day of the range
    #[arg(long)]
    end: NaiveDate,

    /// strftime pattern for both ends of an uncollapsed range
    #[arg(long)]
    format: Option<DateFormat>,

    /// strftime pattern for a day collapsed range
    #[arg(long)]
    day_format: Option<DateFormat>,

    /// strftime pattern for a month collapsed range
    #[arg(long)]
    month_format: Option<DateFormat>,

    /// Units collapsed when the range boundaries line up (day, month)
    #[arg(long, value_delimiter = ',', conflicts_with = "no_combine")]
    combine: Option<Vec<CollapseUnit>>,

    /// Never collapse on boundary alignment
    #[arg(long)]
    no_combine: bool,

    /// Units collapsed regardless of the boundaries (day, month)
    #[arg(long, value_delimiter = ',')]
    force_combine: Option<Vec<CollapseUnit>>,

    /// Text placed between the two ends of an uncollapsed range
    #[arg(long)]
    separator: Option<String>
}

impl FormatArgs {
    fn policy(self, mut policy: CollapsePolicy) -> CollapsePolicy {
        if let Some(format) = self.format {
            policy = policy.with_format(format);
        }
        if let Some(format) = self.day_format {
            policy = policy.with_day_format(Some(format));
        }
        if let Some(format) = self.month_format {
            policy = policy.with_month_format(Some(format));
        }
        if self.no_combine {
            policy = policy.with_combine(Vec::<CollapseUnit>::new());
        } else if let Some(units) = self.combine {
            policy = policy.with_combine(units);
        }
        if let Some(units) = self.force_combine {
            policy = policy.with_force_combine(units);
        }
        if let Some(separator) = self.separator {
            policy = policy.with_separator(separator);
        }
        policy
    }
}

fn parse_business_days(numbers: &[u8]) -> Result<BusinessDaySet, CliError> {
    numbers
        .iter()
        .map(|n| WeekDay::try_from(*n))
        .collect::<Result<BusinessDaySet, _>>()
        .map_err(|err| CliError::InvalidArgument(err.to_string()))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let configuration = match &cli.config {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new()
    };

    match cli.command {
        Commands::Workdays { start, end, business_days, marker, json, feed } => {
            let business_days = match business_days {
                Some(numbers) => parse_business_days(&numbers)?,
                None => configuration.business_days()
            };
            let source = feed.resolve(&configuration, marker)?;
            let request = WorkDayRequest::new(start)
                .with_end_date(end)
                .with_business_days(Some(business_days));
            let work_days = get_work_days_for_date_range(&source, &request).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&work_days)?);
            } else {
                for d in work_days {
                    println!("{}", d);
                }
            }
        },
        Commands::Format(args) => {
            let range = RangeOfDates::new(args.start, args.end);
            let policy = args.policy(configuration.range_format().clone());
            println!("{}", format_date_range(&range, &policy));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
