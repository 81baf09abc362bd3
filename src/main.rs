#[macro_use]
extern crate slog;

mod logger;
mod params;
mod queries;
mod query_parser;
mod results;

use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;
use std::time::Instant;

use rayon::prelude::*;
use slog::{Drain, Logger};
use thiserror::Error;

use sieve::{DocumentMatch, EvaluationError, IndexError, IndexReader};
use sieve::store::memory::MemoryIndexStore;

use crate::params::Params;
use crate::queries::{parse_query_file, QueryLine};
use crate::query_parser::{QueryParser, QueryParseError};


/// Why a single query produced no ranking
#[derive(Debug, Error)]
enum QueryError {
    #[error(transparent)]
    Parse(#[from] QueryParseError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Index(#[from] IndexError),
}


#[derive(Debug, Error)]
enum RunError {
    #[error("cannot open index: {0}")]
    Index(#[from] IndexError),

    #[error("cannot read query file {path:?}: {source}")]
    QueryFile {
        path: PathBuf,
        source: io::Error,
    },

    #[error("cannot write results to {path:?}: {source}")]
    Output {
        path: PathBuf,
        source: io::Error,
    },
}


fn evaluate_query<R: IndexReader + ?Sized>(query: &QueryLine, params: &Params, index: &R) -> Result<Vec<DocumentMatch>, QueryError> {
    let tree = match QueryParser::new(&params.model).parse(&query.text) {
        Ok(tree) => tree,
        Err(QueryParseError::NoTerms) => return Ok(Vec::new()),
        Err(error) => return Err(error.into()),
    };
    let scores = tree.evaluate(&params.model, index)?;

    Ok(results::rank(&scores, index, params.result_cap)?)
}


fn run(params: &Params, log: &Logger) -> Result<(), RunError> {
    let store = MemoryIndexStore::open(&params.index_path)?;
    info!(log, "[run] opened index"; "path" => %params.index_path.display(), "documents" => store.num_docs());

    let text = fs::read_to_string(&params.query_file_path).map_err(|source| {
        RunError::QueryFile {
            path: params.query_file_path.clone(),
            source: source,
        }
    })?;
    let queries = parse_query_file(&text);
    info!(log, "[run] evaluating queries"; "queries" => queries.len(), "model" => %params.model);

    let reader = store.reader();
    let rankings = queries.par_iter()
        .map(|query| {
            let start = Instant::now();
            let ranking = evaluate_query(query, params, &reader);

            (ranking, start.elapsed())
        })
        .collect::<Vec<_>>();

    let output_error = |source| {
        RunError::Output {
            path: params.trec_eval_output_path.clone(),
            source: source,
        }
    };

    let file = File::create(&params.trec_eval_output_path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);

    // Results go out in query file order
    for (query, (ranking, elapsed)) in queries.iter().zip(rankings) {
        match ranking {
            Ok(docs) => {
                info!(log, "[run] evaluated query"; "query_id" => query.id.as_str(), "matches" => docs.len(), "ms" => elapsed.as_millis() as u64);
                results::write_trec(&mut writer, &query.id, &docs, &params.run_id).map_err(output_error)?;
            }
            Err(error) => {
                error!(log, "[run] query failed"; "query_id" => query.id.as_str(), "query" => query.text.as_str(), "error" => %error);
            }
        }
    }

    writer.flush().map_err(output_error)?;

    Ok(())
}


fn make_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build();

    Logger::root(Mutex::new(drain).fuse(), o!("version" => env!("CARGO_PKG_VERSION")))
}


fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: qryeval <paramFile>");
            process::exit(1);
        }
    };

    let params = match Params::load(&path) {
        Ok(params) => params,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    if let Err(error) = logger::init(params.log_level) {
        eprintln!("cannot install engine logger: {}", error);
    }

    let log = make_logger();
    let start = Instant::now();

    if let Err(error) = run(&params, &log) {
        crit!(log, "[run] failed"; "error" => %error);
        process::exit(1);
    }

    info!(log, "[run] finished"; "output" => %params.trec_eval_output_path.display(), "ms" => start.elapsed().as_millis() as u64);
}
