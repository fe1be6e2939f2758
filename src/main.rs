//! timebook main entrypoint.

use timebook::run;
use timebook::ui::messages::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
