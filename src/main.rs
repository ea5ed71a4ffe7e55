use hearnet::config::USAGE;
use hearnet::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = Config::from_args(std::env::args().skip(1)).and_then(hearnet::runtime::start);

    if let Err(e) = result {
        log::error!("{}", e);
        if e.wants_usage() {
            eprint!("{}", USAGE);
        }
        std::process::exit(1);
    }
}
