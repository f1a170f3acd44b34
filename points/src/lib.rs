extern crate smallvec;
extern crate failure;
#[macro_use] extern crate failure_derive;
#[macro_use] extern crate log;

pub mod input;
pub mod output;
pub mod railway;


use std::rc::Rc;
use std::cell::RefCell;
use input::network::{StaticNetwork, Target};
use output::history::{History, SwitchLogger};
use railway::route::QueryOutcome;
use railway::switches::SwitchNetwork;

/// Loaded network with the queries to run against it.
#[derive(Debug)]
pub struct Problem {
    pub network: StaticNetwork,
    pub targets: Vec<Target>,
}

/// Run all queries in order against a fresh switch state.
pub fn evaluate_queries(statics: &StaticNetwork,
                        targets: &[Target],
                        logger: SwitchLogger) -> Vec<QueryOutcome> {
    let mut network = SwitchNetwork::new(statics, logger);
    targets.iter().map(|&t| network.route_to(t)).collect()
}

/// Like `evaluate_queries`, also collecting every routing event.
pub fn evaluate_with_history(statics: &StaticNetwork, targets: &[Target]) -> History {
    let log = Rc::new(RefCell::new(Vec::new()));
    let logger: SwitchLogger = {
        let log = log.clone();
        Box::new(move |e| log.borrow_mut().push(e))
    };
    let results = evaluate_queries(statics, targets, logger);
    History {
        results,
        events: log.replace(Vec::new()),
    }
}


use std::path::Path;
pub type AppResult<T> = Result<T, failure::Error>;

pub fn read_file(f: &Path) -> AppResult<String> {
    use std::fs::File;
    use std::io::prelude::*;
    use std::io::BufReader;

    let file = File::open(f)?;
    let mut file = BufReader::new(&file);
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn read_stdin() -> AppResult<String> {
    use std::io::prelude::*;

    let mut contents = String::new();
    std::io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn get_problem(s: &Path) -> AppResult<Problem> {
    let contents = read_file(s)?;
    get_problem_string(&contents)
}

pub fn get_problem_string(s: &str) -> AppResult<Problem> {
    use input::parser_utils::lexer;
    use input::problem_parser::parse;
    let lex = lexer(&mut s.chars());
    let input = parse(&lex)?;
    let network = StaticNetwork::from_children(input.children)?;
    Ok(Problem { network, targets: input.targets })
}
