use clap::{Args, Parser, Subcommand};
use dialoguer::{Input, Password};
use tracing_subscriber::EnvFilter;
use wxdesk::{
    AppError, Credentials, EditReport, FieldInput, LoginReport, SubmissionReport, SubmitOutcome,
};

#[derive(Parser)]
#[command(name = "wxdesk")]
#[command(version)]
#[command(about = "Record, validate and review weather observations", long_about = None)]
struct Cli {
    /// Log store requests and session changes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an admin session
    Login {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// End the current session
    Logout,
    /// Show the current role and available actions
    Whoami,
    /// List stored observations
    #[command(visible_alias = "ls")]
    List,
    /// Show one observation
    Show { id: i64 },
    /// Record a new observation (admin only)
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Edit a stored observation (admin only)
    Edit {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Args)]
struct FieldArgs {
    /// Observation date (YYYY-MM-DD, YYYY-MM-DDTHH:MM in UTC, or RFC 3339)
    #[arg(long)]
    date: Option<String>,
    /// Temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    temperature: Option<String>,
    /// Relative humidity in percent (0-100)
    #[arg(long, allow_hyphen_values = true)]
    humidity: Option<String>,
    /// Pressure in hPa
    #[arg(long, allow_hyphen_values = true)]
    pressure: Option<String>,
    /// Wind speed in m/s
    #[arg(long, allow_hyphen_values = true)]
    wind_speed: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    country: Option<String>,
    /// Weather status label, e.g. "Clear"
    #[arg(long)]
    status: Option<String>,
    /// Raw form input by field name, e.g. --set windSpeed=4
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,
}

impl FieldArgs {
    fn into_inputs(self) -> Result<Vec<FieldInput>, AppError> {
        let named = [
            ("timestamp", self.date),
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("pressure", self.pressure),
            ("windSpeed", self.wind_speed),
            ("city", self.city),
            ("country", self.country),
            ("weatherStatus", self.status),
        ];
        let mut inputs: Vec<FieldInput> = named
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| FieldInput::new(name, value)))
            .collect();
        for pair in &self.set {
            inputs.push(FieldInput::parse(pair)?);
        }
        Ok(inputs)
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("WXDESK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "wxdesk=debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn prompt_credentials(
    username: Option<String>,
    password: Option<String>,
) -> Result<Credentials, AppError> {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| AppError::config_error(format!("Cannot read username: {}", e)))?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::config_error(format!("Cannot read password: {}", e)))?,
    };
    Ok(Credentials::new(username, password))
}

fn submission_succeeded(report: &EditReport) -> bool {
    matches!(
        report,
        EditReport::Submitted(SubmissionReport {
            outcome: SubmitOutcome::Created { .. }
                | SubmitOutcome::Updated { .. },
            ..
        })
    )
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<bool, AppError> = match cli.command {
        Commands::Login { username, password } => {
            wxdesk::login(|| prompt_credentials(username, password))
                .map(|report| !matches!(report, LoginReport::Rejected { .. }))
        }
        Commands::Logout => wxdesk::logout().map(|_| true),
        Commands::Whoami => wxdesk::whoami().map(|_| true),
        Commands::List => wxdesk::list().map(|_| true),
        Commands::Show { id } => wxdesk::show(id).map(|_| true),
        Commands::Add { fields } => fields
            .into_inputs()
            .and_then(|inputs| wxdesk::add(&inputs))
            .map(|report| submission_succeeded(&report)),
        Commands::Edit { id, fields } => fields
            .into_inputs()
            .and_then(|inputs| wxdesk::edit(id, &inputs))
            .map(|report| submission_succeeded(&report)),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
