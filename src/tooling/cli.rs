//! CLI Tooling
//!
//! Command-line interface for the org-chart viewer. Every command resolves the
//! layered configuration, loads the dataset, and renders through the same
//! [`ChartSession`] the interactive browser drives.

use crate::config::{ConfigLoader, OrgChartConfig};
use crate::dataset::{load_dataset, Dataset};
use crate::error::{ChartError, Result};
use crate::filter::{DepartmentFilter, FilterCriteria, GradeFilter};
use crate::format::{format_department_table, format_grade_table};
use crate::logging::LoggingConfig;
use crate::session::ChartSession;
use crate::tooling::browse::{render_screen, BrowseCommand, BrowseOutcome};
use crate::tree::Grade;
use clap::{Parser, Subcommand};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::path::PathBuf;
use tracing::info;

/// Orgchart CLI - browse a company hierarchy with search and filters
#[derive(Parser)]
#[command(name = "orgchart")]
#[command(about = "Collapsible org-chart with search, department and grade filtering")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset file (JSON or YAML); overrides `dataset` from configuration
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Workspace directory searched for orgchart.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Filter the chart once and print it
    Show {
        /// Name search term (case-insensitive substring)
        #[arg(long, default_value = "")]
        search: String,
        /// Department filter (All or a department name)
        #[arg(long, default_value = "All")]
        department: String,
        /// Grade filter (All, A, B, C, D)
        #[arg(long, default_value = "All")]
        grade: String,
        /// Expand a node (key or unique name); repeatable
        #[arg(long)]
        expand: Vec<String>,
        /// Collapse a node (key or unique name); repeatable
        #[arg(long)]
        collapse: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Browse the chart interactively
    Browse,
    /// Print the grade for a rating
    Grade {
        #[arg(allow_hyphen_values = true)]
        rating: f64,
    },
    /// Show the grade bands
    Grades,
    /// Show employee counts per department
    Departments,
    /// Print the effective configuration as TOML
    Config,
}

/// Resolved configuration plus CLI overrides.
pub struct CliContext {
    config: OrgChartConfig,
    data_path: Option<PathBuf>,
    color: bool,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        data_path: Option<PathBuf>,
    ) -> Result<Self> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_config(config, data_path))
    }

    /// Build a context from parsed arguments, applying logging overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut context = Self::new(cli.workspace.clone(), cli.config.clone(), cli.data.clone())?;
        apply_logging_overrides(cli, &mut context.config.logging);
        if cli.no_color {
            context.color = false;
            context.config.logging.color = false;
        }
        Ok(context)
    }

    pub fn with_config(config: OrgChartConfig, data_path: Option<PathBuf>) -> Self {
        let color = config.view.color;
        Self {
            config,
            data_path,
            color,
        }
    }

    pub fn config(&self) -> &OrgChartConfig {
        &self.config
    }

    pub fn logging_config(&self) -> &LoggingConfig {
        &self.config.logging
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    fn dataset_path(&self) -> Result<PathBuf> {
        self.data_path
            .clone()
            .or_else(|| self.config.dataset.clone())
            .ok_or_else(|| {
                ChartError::ConfigError(
                    "No dataset given; pass --data or set `dataset` in orgchart.toml".to_string(),
                )
            })
    }

    fn load(&self) -> Result<Dataset> {
        load_dataset(&self.dataset_path()?)
    }

    fn open_session(&self) -> Result<ChartSession> {
        ChartSession::with_options(
            self.load()?,
            self.config.departments.clone(),
            self.config.view.zoom(),
        )
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String> {
        match command {
            Commands::Show {
                search,
                department,
                grade,
                expand,
                collapse,
                format,
            } => self.show(search, department, grade, expand, collapse, format),
            Commands::Browse => self.browse(),
            Commands::Grade { rating } => {
                Ok(format!("{} -> grade {}", rating, Grade::from_rating(*rating)))
            }
            Commands::Grades => Ok(format_grade_table(self.color)),
            Commands::Departments => {
                let dataset = self.load()?;
                Ok(format_department_table(&dataset.department_tally(), self.color))
            }
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| ChartError::ConfigError(format!("Failed to render config: {}", e))),
        }
    }

    fn show(
        &self,
        search: &str,
        department: &str,
        grade: &str,
        expand: &[String],
        collapse: &[String],
        format: &str,
    ) -> Result<String> {
        let mut session = self.open_session()?;
        let criteria = FilterCriteria::new(
            search,
            DepartmentFilter::parse_known(department, &self.config.departments)?,
            GradeFilter::parse(grade)?,
        );
        session.apply(criteria)?;
        for query in expand {
            session.set_expanded(query, true)?;
        }
        for query in collapse {
            session.set_expanded(query, false)?;
        }

        match format {
            "json" => Ok(serde_json::to_string_pretty(session.forest())?),
            "text" => Ok(render_screen(&session, self.color)),
            other => Err(ChartError::InvalidFilter(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn browse(&self) -> Result<String> {
        let mut session = self.open_session()?;
        info!(
            nodes = session.dataset().total_nodes(),
            "starting interactive browse"
        );
        let theme = ColorfulTheme::default();
        println!("{}", render_screen(&session, self.color));
        loop {
            let line: String = Input::with_theme(&theme)
                .with_prompt("orgchart (help)")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| ChartError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

            let outcome = BrowseCommand::parse(&line).and_then(|cmd| cmd.apply(&mut session));
            match outcome {
                Ok(BrowseOutcome::Quit) => break,
                Ok(BrowseOutcome::Redraw(message)) => {
                    println!("{}", render_screen(&session, self.color));
                    if let Some(message) = message {
                        println!("{}", message);
                    }
                }
                Ok(BrowseOutcome::Message(message)) => println!("{}", message),
                Err(e) => println!("Error: {}", e),
            }
        }
        Ok(String::new())
    }
}

/// Fold `--log-*` flags into the logging configuration.
pub fn apply_logging_overrides(cli: &Cli, logging: &mut LoggingConfig) {
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        logging.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        logging.file = Some(file.clone());
    }
}
