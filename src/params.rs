//! The run parameter file
//!
//! One `key=value` pair per line. Blank lines and lines starting with `#`
//! are ignored.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::Level;
use thiserror::Error;

use sieve::RetrievalModel;


const DEFAULT_RUN_ID: &'static str = "run-1";
const DEFAULT_RESULT_CAP: usize = 100;


#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("cannot read parameter file: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected key=value, found '{text}'")]
    MalformedLine {
        line: usize,
        text: String,
    },

    #[error("missing required parameter '{0}'")]
    MissingKey(&'static str),

    #[error("invalid value '{value}' for parameter '{key}'")]
    InvalidValue {
        key: &'static str,
        value: String,
    },

    #[error("unknown retrieval algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("unknown Indri smoothing type '{0}'")]
    UnknownSmoothing(String),
}


#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub index_path: PathBuf,
    pub query_file_path: PathBuf,
    pub trec_eval_output_path: PathBuf,
    pub model: RetrievalModel,
    pub run_id: String,
    pub result_cap: usize,
    pub log_level: Level,
}


fn parse_pairs(text: &str) -> Result<HashMap<String, String>, ParamsError> {
    let mut pairs = HashMap::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) if !key.trim().is_empty() => {
                pairs.insert(key.trim().to_string(), value.trim().to_string());
            }
            _ => {
                return Err(ParamsError::MalformedLine {
                    line: i + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    Ok(pairs)
}


struct ParamMap(HashMap<String, String>);


impl ParamMap {
    fn required(&self, key: &'static str) -> Result<&str, ParamsError> {
        self.0.get(key).map(|value| value.as_str()).ok_or(ParamsError::MissingKey(key))
    }

    fn optional(&self, key: &'static str) -> Option<&str> {
        self.0.get(key).map(|value| value.as_str())
    }

    fn parse<T: FromStr>(&self, key: &'static str, value: &str) -> Result<T, ParamsError> {
        value.parse().map_err(|_| ParamsError::InvalidValue {
            key: key,
            value: value.to_string(),
        })
    }

    fn required_f64(&self, key: &'static str) -> Result<f64, ParamsError> {
        let value = self.required(key)?;

        self.parse(key, value)
    }
}


fn build_model(params: &ParamMap) -> Result<RetrievalModel, ParamsError> {
    let algorithm = params.required("retrievalAlgorithm")?;

    match algorithm {
        "UnrankedBoolean" => return Ok(RetrievalModel::UnrankedBoolean),
        "RankedBoolean" => return Ok(RetrievalModel::RankedBoolean),
        _ => {}
    }

    match algorithm.to_lowercase().as_ref() {
        "bm25" => {
            Ok(RetrievalModel::Bm25 {
                k1: params.required_f64("BM25:k_1")?,
                b: params.required_f64("BM25:b")?,
                k3: params.required_f64("BM25:k_3")?,
            })
        }
        "indri" => {
            let smoothing = params.required("Indri:smoothing")?;
            if smoothing != "ctf" {
                return Err(ParamsError::UnknownSmoothing(smoothing.to_string()));
            }

            Ok(RetrievalModel::Indri {
                mu: params.required_f64("Indri:mu")?,
                lambda: params.required_f64("Indri:lambda")?,
            })
        }
        _ => Err(ParamsError::UnknownAlgorithm(algorithm.to_string())),
    }
}


impl Params {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Params, ParamsError> {
        let text = fs::read_to_string(path)?;

        text.parse()
    }
}


impl FromStr for Params {
    type Err = ParamsError;

    fn from_str(text: &str) -> Result<Params, ParamsError> {
        let params = ParamMap(parse_pairs(text)?);

        let run_id = params.optional("trecEvalRunId").unwrap_or(DEFAULT_RUN_ID).to_string();

        let result_cap = match params.optional("resultCap") {
            Some(value) => params.parse("resultCap", value)?,
            None => DEFAULT_RESULT_CAP,
        };

        let log_level = match params.optional("logLevel") {
            Some(value) => params.parse("logLevel", value)?,
            None => Level::Info,
        };

        Ok(Params {
            index_path: PathBuf::from(params.required("indexPath")?),
            query_file_path: PathBuf::from(params.required("queryFilePath")?),
            trec_eval_output_path: PathBuf::from(params.required("trecEvalOutputPath")?),
            model: build_model(&params)?,
            run_id: run_id,
            result_cap: result_cap,
            log_level: log_level,
        })
    }
}


#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use log::Level;
    use sieve::RetrievalModel;

    use super::{Params, ParamsError};

    const BASE: &'static str = "indexPath=index.json\nqueryFilePath=queries.txt\ntrecEvalOutputPath=out.teIn\n";

    fn parse(extra: &str) -> Result<Params, ParamsError> {
        format!("{}{}", BASE, extra).parse()
    }

    #[test]
    fn test_boolean_params() {
        let params = parse("retrievalAlgorithm=UnrankedBoolean\n").unwrap();

        assert_eq!(params.index_path, PathBuf::from("index.json"));
        assert_eq!(params.query_file_path, PathBuf::from("queries.txt"));
        assert_eq!(params.trec_eval_output_path, PathBuf::from("out.teIn"));
        assert_eq!(params.model, RetrievalModel::UnrankedBoolean);
        assert_eq!(params.run_id, "run-1");
        assert_eq!(params.result_cap, 100);
        assert_eq!(params.log_level, Level::Info);
    }

    #[test]
    fn test_bm25_params() {
        let params = parse("retrievalAlgorithm=BM25\nBM25:k_1=1.2\nBM25:b = 0.75\nBM25:k_3=0\n").unwrap();

        assert_eq!(params.model, RetrievalModel::Bm25 {
            k1: 1.2,
            b: 0.75,
            k3: 0.0,
        });
    }

    #[test]
    fn test_indri_params() {
        let params = parse("retrievalAlgorithm=Indri\nIndri:mu=2500\nIndri:lambda=0.4\nIndri:smoothing=ctf\n").unwrap();

        assert_eq!(params.model, RetrievalModel::Indri {
            mu: 2500.0,
            lambda: 0.4,
        });
    }

    #[test]
    fn test_boolean_names_are_case_sensitive() {
        match parse("retrievalAlgorithm=rankedboolean\n") {
            Err(ParamsError::UnknownAlgorithm(ref name)) if name == "rankedboolean" => {}
            other => panic!("expected unknown algorithm, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_smoothing() {
        match parse("retrievalAlgorithm=indri\nIndri:mu=2500\nIndri:lambda=0.4\nIndri:smoothing=df\n") {
            Err(ParamsError::UnknownSmoothing(ref name)) if name == "df" => {}
            other => panic!("expected unknown smoothing, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_model_parameter() {
        match parse("retrievalAlgorithm=bm25\nBM25:k_1=1.2\nBM25:b=0.75\n") {
            Err(ParamsError::MissingKey("BM25:k_3")) => {}
            other => panic!("expected missing key, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_key() {
        match "retrievalAlgorithm=RankedBoolean\n".parse::<Params>() {
            Err(ParamsError::MissingKey("indexPath")) => {}
            other => panic!("expected missing key, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_number() {
        match parse("retrievalAlgorithm=bm25\nBM25:k_1=high\nBM25:b=0.75\nBM25:k_3=0\n") {
            Err(ParamsError::InvalidValue{key: "BM25:k_1", ..}) => {}
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn test_optional_keys() {
        let params = parse("retrievalAlgorithm=RankedBoolean\ntrecEvalRunId=mine\nresultCap=10\nlogLevel=debug\n").unwrap();

        assert_eq!(params.run_id, "mine");
        assert_eq!(params.result_cap, 10);
        assert_eq!(params.log_level, Level::Debug);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let params = parse("\n# the model\nretrievalAlgorithm=RankedBoolean\n\n").unwrap();

        assert_eq!(params.model, RetrievalModel::RankedBoolean);
    }

    #[test]
    fn test_malformed_line() {
        match parse("retrievalAlgorithm\n") {
            Err(ParamsError::MalformedLine{line: 4, ..}) => {}
            other => panic!("expected malformed line, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}retrievalAlgorithm=RankedBoolean\n", BASE).unwrap();

        let params = Params::load(file.path()).unwrap();

        assert_eq!(params.model, RetrievalModel::RankedBoolean);
    }
}
