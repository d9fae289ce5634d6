use bambam_lts::{app::lts::lts_ops, config::LtsConfiguration, model::LtsCliError};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct LtsAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// classify ways by bicycle Level of Traffic Stress and apply the result to a graph
    Run {
        #[arg(long, help = "path to CSV of tagged OSM ways (.csv or .csv.gz)")]
        ways_file: String,
        #[arg(long, help = "path to CSV of graph edges with way ids (.csv or .csv.gz)")]
        edges_file: String,
        #[arg(long, help = "path to .toml or .json file with bambam-lts parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "output path for LTS datasets")]
        output_directory: String,
    },
}

pub fn run(app: &App) -> Result<(), LtsCliError> {
    env_logger::init();
    match app {
        App::Run {
            ways_file,
            edges_file,
            configuration_file,
            output_directory,
        } => {
            let conf = match configuration_file {
                None => Ok(LtsConfiguration::default()),
                Some(f) => {
                    log::info!("reading bambam-lts configuration from {f}");
                    LtsConfiguration::try_from(f)
                }
            }?;
            let result = lts_ops::run_lts(
                Path::new(ways_file),
                Path::new(edges_file),
                Path::new(output_directory),
                &conf,
            );
            match result {
                Ok(_) => {
                    eprintln!("finished.");
                    Ok(())
                }
                Err(e) => {
                    log::error!("bambam-lts failed: {e}");
                    Err(e)?
                }
            }
        }
    }
}

fn main() {
    let args = LtsAppArguments::parse();
    if let Err(e) = run(&args.app) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
