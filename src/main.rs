use tbejos_game::core::{demo, system::DemoSettings};

fn main() -> std::process::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match demo::run(&DemoSettings::default()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("startup aborted at {}", e.operation);
            std::process::ExitCode::FAILURE
        }
    }
}
