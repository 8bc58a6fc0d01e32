use std::path::PathBuf;

use clap::{Parser, Subcommand};
use promptlab::{AppError, RegisterOptions, RunOptions};

#[derive(Parser)]
#[command(name = "promptlab")]
#[command(version)]
#[command(
    about = "Template prompts, invoke a hosted completion endpoint, and register the resulting chain",
    long_about = None
)]
struct Cli {
    /// Path to the config file.
    #[arg(short, long, global = true, default_value = "promptlab.toml")]
    config: PathBuf,

    /// Print the would-be remote calls instead of performing them.
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a question directly to the completion endpoint
    #[clap(visible_alias = "a")]
    Ask {
        /// The question to send
        question: String,
    },
    /// Fill a template with an input and invoke the endpoint
    #[clap(visible_alias = "r")]
    Run {
        /// Built-in template name
        #[arg(short, long)]
        template: Option<String>,
        /// Path to a template file
        #[arg(long)]
        template_file: Option<PathBuf>,
        /// Input variable name for file templates
        #[arg(long, default_value = "input")]
        variable: String,
        /// The input substituted into the template
        input: String,
    },
    /// List built-in templates
    #[clap(visible_alias = "tp")]
    Templates,
    /// Log the configured chain as a tracked run and register it
    Register {
        /// Built-in template to package
        #[arg(short, long, default_value = "support")]
        template: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Ask { question } => promptlab::ask(&question, &cli.config, cli.mock)
            .map(|response| println!("{}", response)),
        Commands::Run { template, template_file, variable, input } => {
            let options = RunOptions { template, template_file, variable, input };
            promptlab::run_template(&options, &cli.config, cli.mock)
                .map(|response| println!("{}", response))
        }
        Commands::Templates => {
            for summary in promptlab::list_templates() {
                println!(
                    "{:<22} [{}] {}",
                    summary.name, summary.input_variable, summary.description
                );
            }
            Ok(())
        }
        Commands::Register { template } => {
            promptlab::register(&RegisterOptions { template }, &cli.config, cli.mock).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
