#[macro_use] extern crate log;

use points::*;
use points::output::history::{tree_dump, SwitchLogger};
use points::output::results::write_results;
use std::path::PathBuf;
use structopt::StructOpt;

/// Points -- count and apply switch changes for trains routed from the root city
#[derive(StructOpt, Debug)]
#[structopt(name="points")]
struct Opt {
    /// Verbose mode (-v, -vv), logged to stderr
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Network and query file. Reads standard input if not given.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Write results to file instead of standard output
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
}

fn run(opt: &Opt) -> AppResult<()> {
    let problem = match opt.input {
        Some(ref path) => get_problem(path)?,
        None => get_problem_string(&read_stdin()?)?,
    };
    info!("Network: {} cities, {} queries", problem.network.len(), problem.targets.len());
    if log_enabled!(log::Level::Debug) {
        debug!("Tree structure:\n{}", tree_dump(&problem.network)?);
    }

    let logger: SwitchLogger = Box::new(|e| debug!("{}", e));
    let results = evaluate_queries(&problem.network, &problem.targets, logger);

    use std::fs::File;
    use std::io::BufWriter;
    match opt.output {
        Some(ref path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            write_results(&results, &mut writer)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_results(&results, &mut writer)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use log::LevelFilter;
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

pub fn main() {
    let opt = Opt::from_args();
    init_logging(opt.verbose);
    match run(&opt) {
        Ok(()) => {},
        Err(e) => {
            eprintln!("Error:\n{}", e);
            std::process::exit(1);
        },
    }
}
