use clap::Parser;
use counter_cli::{
    commands::run,
    logging,
    options::cli::Cli,
    utils::exit::{exit, ExitError},
};

fn main() {
    let cli: Cli = Parser::parse();

    if let Err(err) = logging::init(&cli.log_level) {
        eprintln!("{}", err);
        exit(ExitError::LoggingError);
    }

    let opts = match cli.workload_options() {
        Ok(opts) => opts,
        Err(err) => {
            log::error!("{}", err);
            exit(ExitError::ArgumentsError);
        }
    };

    match run::run(&opts) {
        Ok(report) => println!("{}", report.value),
        Err(err) => {
            log::error!("{}", err);
            exit(ExitError::WorkloadError);
        }
    }
}
