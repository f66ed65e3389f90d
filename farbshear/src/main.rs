use clap::Parser;
use farbshear::app::run_stdio;
use farbshear::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed
            let code = if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    let options = cli.run_options();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(options.log_level().as_str()),
    )
    .init();

    let result = cli
        .shear_input()
        .and_then(run_stdio);
    match result {
        Ok(summary) => {
            log::debug!("done: {:?}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("fatal {:?}: {:?}", e.kind(), e);
            eprintln!("farbshear: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
