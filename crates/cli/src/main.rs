use std::{env, io, process};

use edit_distance_cli::{collect_args, config::Config, run};

fn main() {
    env_logger::init();

    let result = collect_args(env::args_os().skip(1)).and_then(|args| {
        let config = Config::from_env()?;
        run(&args, &config, &mut io::stdout().lock())
    });
    if let Err(why) = result {
        log::debug!("exiting with error: {:?}", why);
        eprintln!("{}", why);
        process::exit(1);
    }
}
