use clap::{Parser, Subcommand, Args};
use crate::models::BudgetConfig;

#[derive(Parser)]
#[command(name = "lighthouse-batch", version, about = "Batch Lighthouse audits with score budgets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress per-site console output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit a batch of sites
    Run(RunArgs),
    /// Check budgets against an existing summary.json
    Check(CheckArgs),
    /// Start the HTTP audit server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct BudgetArgs {
    /// Minimum average score (0-100)
    #[arg(long)]
    pub score: Option<f64>,

    /// Minimum accessibility score (0-100)
    #[arg(long)]
    pub accessibility: Option<f64>,

    /// Minimum performance score (0-100)
    #[arg(long)]
    pub performance: Option<f64>,

    /// Minimum best practices score (0-100)
    #[arg(long)]
    pub best_practices: Option<f64>,

    /// Minimum SEO score (0-100)
    #[arg(long)]
    pub seo: Option<f64>,

    /// Minimum PWA score (0-100)
    #[arg(long)]
    pub pwa: Option<f64>,
}

impl BudgetArgs {
    pub fn to_config(&self) -> BudgetConfig {
        BudgetConfig {
            score: self.score,
            accessibility: self.accessibility,
            performance: self.performance,
            best_practices: self.best_practices,
            seo: self.seo,
            pwa: self.pwa,
        }
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct EngineArgs {
    /// Prefer a globally installed `lighthouse` binary
    #[arg(long)]
    pub use_global: bool,

    /// Explicit engine binary or cli script
    #[arg(long)]
    pub engine: Option<String>,

    /// Per-site engine timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Sites to audit
    pub urls: Vec<String>,

    /// Comma-separated sites to audit
    #[arg(short, long = "sites", value_delimiter = ',')]
    pub site_list: Vec<String>,

    /// File with one site per line
    #[arg(short, long)]
    pub file: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Also produce an HTML report per site
    #[arg(long)]
    pub html: bool,

    /// Also produce a CSV report per site
    #[arg(long)]
    pub csv: bool,

    /// Audit with the desktop preset instead of mobile
    #[arg(long)]
    pub desktop: bool,

    /// Output directory for summary.json and report artifacts
    #[arg(short, long)]
    pub out: Option<String>,

    /// Do not write summary.json
    #[arg(long)]
    pub no_summary: bool,

    /// Exit with a failure code when any budget is violated
    #[arg(long)]
    pub fail_on_budgets: bool,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub budgets: BudgetArgs,
}

#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// summary.json written by a previous run
    #[arg(short, long, default_value = "./report/lighthouse/summary.json")]
    pub summary: String,

    /// YAML configuration file providing budgets
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(flatten)]
    pub budgets: BudgetArgs,
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
