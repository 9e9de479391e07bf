use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_SERVER: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP backend (default if no subcommand)
    Serve {
        /// Port to listen on (overrides PORT and the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind, e.g. 127.0.0.1
        #[arg(long)]
        bind: Option<String>,

        /// Origin allowed to make cross-origin requests
        #[arg(long)]
        allowed_origin: Option<String>,
    },
    /// Score one set of biometrics locally and print the breakdown
    Score {
        /// Age in years
        #[arg(long)]
        age: Option<f64>,

        /// Height in centimeters
        #[arg(long)]
        height: Option<f64>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Systolic blood pressure (mmHg)
        #[arg(long)]
        systolic: Option<f64>,

        /// Diastolic blood pressure (mmHg)
        #[arg(long)]
        diastolic: Option<f64>,

        /// Comma-separated family conditions, e.g. diabetes,cancer
        #[arg(long, value_delimiter = ',')]
        family_history: Vec<String>,

        /// Print the API JSON response instead of the breakdown
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "risk-calc")]
#[command(about = "Health risk calculator backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/risk-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "risk_calc=debug,tower_http=debug"
    } else {
        "risk_calc=info,tower_http=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Serve {
        port: None,
        bind: None,
        allowed_origin: None,
    });

    match command {
        Commands::Serve {
            port,
            bind,
            allowed_origin,
        } => {
            let config_path = cli.config.map(PathBuf::from);
            let mut config = match risk_calc::config::load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            if let Err(e) = risk_calc::config::apply_port_env(&mut config, std::env::var("PORT").ok()) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }

            // CLI flags win over environment and file
            if port.is_some() {
                config.port = port;
            }
            if bind.is_some() {
                config.bind = bind;
            }
            if allowed_origin.is_some() {
                config.allowed_origin = allowed_origin;
            }

            // Validate config at startup
            if let Err(errors) = risk_calc::config::validate_config(&config) {
                eprintln!("Config errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }

            let server_config = match risk_calc::config::ServerConfig::from_config(&config) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            if let Err(e) = risk_calc::server::serve(server_config).await {
                tracing::error!(error = %format!("{:#}", e), "server failed");
                std::process::exit(EXIT_SERVER);
            }
        }
        Commands::Score {
            age,
            height,
            weight,
            systolic,
            diastolic,
            family_history,
            json,
        } => {
            let request = risk_calc::scoring::RiskRequest {
                age,
                height,
                weight,
                systolic,
                diastolic,
                family_history: Some(family_history),
            };

            let input = match risk_calc::scoring::validate(request) {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_INVALID_INPUT);
                }
            };

            let assessment = risk_calc::scoring::assess(&input);

            if json {
                match risk_calc::output::format_json(&assessment) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_SERVER);
                    }
                }
            } else {
                let use_colors = risk_calc::output::should_use_colors();
                println!(
                    "{}",
                    risk_calc::output::format_assessment(&assessment, use_colors)
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
