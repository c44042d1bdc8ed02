use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match xrates::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}\n");
            if err.wants_pair_help() {
                eprint!("{}", xrates::report::currency_pair_help());
            }
            ExitCode::from(err.exit_code())
        }
    }
}
