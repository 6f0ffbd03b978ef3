use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

use grade_report::form::{Field, FormController};
use grade_report::scoring::{ScoringModel, Subject};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive form (default if no subcommand)
    Tui,
    /// Validate the given values and print the report
    Report(ReportArgs),
    /// Write a config file with the built-in weights and bands
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Raw field values, validated exactly as the interactive form does.
/// Subjects outside the grade's tier are ignored.
#[derive(Args, Debug)]
struct ReportArgs {
    /// Grade level (1-12)
    #[arg(long, allow_hyphen_values = true)]
    grade: Option<String>,

    /// Attendance percentage (0-100)
    #[arg(long, allow_hyphen_values = true)]
    attendance: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    maths: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    biology: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    chemistry: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    physics: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    history: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    geography: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    economics: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    social: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    science: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    english: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    tamil: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl ReportArgs {
    fn fields(&self) -> Vec<(Field, Option<&String>)> {
        vec![
            (Field::Grade, self.grade.as_ref()),
            (Field::Subject(Subject::Maths), self.maths.as_ref()),
            (Field::Subject(Subject::Biology), self.biology.as_ref()),
            (Field::Subject(Subject::Chemistry), self.chemistry.as_ref()),
            (Field::Subject(Subject::Physics), self.physics.as_ref()),
            (Field::Subject(Subject::History), self.history.as_ref()),
            (Field::Subject(Subject::Geography), self.geography.as_ref()),
            (Field::Subject(Subject::Economics), self.economics.as_ref()),
            (Field::Subject(Subject::Social), self.social.as_ref()),
            (Field::Subject(Subject::Science), self.science.as_ref()),
            (Field::Subject(Subject::English), self.english.as_ref()),
            (Field::Subject(Subject::Tamil), self.tamil.as_ref()),
            (Field::Attendance, self.attendance.as_ref()),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "grade-report")]
#[command(about = "Student performance report from marks and attendance", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/grade-report/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Load config and build the scoring model, exiting with `EXIT_CONFIG` on
/// any problem.
fn load_model(config_path: Option<PathBuf>) -> (grade_report::config::Config, ScoringModel) {
    let config = match grade_report::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    let model = match ScoringModel::from_config(&scoring) {
        Ok(m) => m,
        Err(errors) => {
            eprintln!("Scoring config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };
    if config.scoring.is_some() {
        info!("Using scoring overrides from config");
    }

    (config, model)
}

/// Form filled with the flags that were given.
fn report_form(args: &ReportArgs, model: ScoringModel) -> FormController {
    let mut form = FormController::new(model);
    for (field, value) in args.fields() {
        if let Some(value) = value {
            form.edit(field, value.as_str());
        }
    }
    form
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    grade_report::logging::init(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);

    match cli.command.unwrap_or(Commands::Tui) {
        // No config load here, so a broken config can be replaced
        Commands::Init { force } => {
            match grade_report::config::write_default_config(config_path, force) {
                Ok(path) => println!("Config written to {}", path.display()),
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
        Commands::Tui => {
            let (config, model) = load_model(config_path);
            let theme = grade_report::tui::resolve_theme(config.theme);
            debug!(?theme, "Resolved theme");
            let app = grade_report::tui::App::new(
                model,
                grade_report::tui::ThemeColors::for_theme(theme),
            );
            if let Err(e) = grade_report::tui::run_tui(app).await {
                eprintln!("Terminal error: {:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        }
        Commands::Report(args) => {
            let (_, model) = load_model(config_path);
            let mut form = report_form(&args, model);

            let use_colors = !args.no_color && grade_report::output::should_use_colors();
            match form.submit() {
                Ok(report) => match args.format {
                    OutputFormat::Text => {
                        println!("{}", grade_report::output::format_report(report, use_colors));
                    }
                    OutputFormat::Json => match grade_report::output::format_report_json(report) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            eprintln!("{:#}", e);
                            std::process::exit(EXIT_FAILURE);
                        }
                    },
                },
                Err(e) => {
                    eprintln!("{}", grade_report::output::format_error(&e, use_colors));
                    std::process::exit(EXIT_INVALID_INPUT);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
