use std::fs;
use std::io;
use std::str::FromStr;

use clap::ArgMatches;
use serde_json::Value;
use tracing::{error, info};

use crate::clique::verify_clique;
use crate::error::CliqueError;
use crate::graph::{Graph, VertexId};
use crate::search::params::SearchParams;

/// line written instead of a result when the clique check fails
pub const INCORRECT_CLIQUE:&str = "*** WARNING: incorrect clique ***";

/** search parameters read from the command line */
#[derive(Debug, Clone)]
pub struct CliParams {
    /// instance filename
    pub inst_filename: String,
    /// search parameters
    pub params: SearchParams,
    /// where to write the clique (if any)
    pub sol_file: Option<String>,
    /// where to write the statistics (if any)
    pub perf_file: Option<String>,
}

/// parses an optional numeric argument (default value if absent)
fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&str, default:T) -> Result<T, CliqueError> {
    match main_args.value_of(name) {
        None => Ok(default),
        Some(s) => s.parse::<T>().map_err(|_|
            CliqueError::InvalidParameter(format!("unable to parse --{} '{}'", name, s))
        ),
    }
}

/** reads the search parameters shared by the executables (rounds, ratio, top-k, seed) */
pub fn read_search_params(main_args:&ArgMatches) -> Result<SearchParams, CliqueError> {
    let default = SearchParams::default();
    let params = SearchParams {
        nb_rounds: parse_arg(main_args, "rounds", default.nb_rounds)?,
        perturbation_ratio: parse_arg(main_args, "ratio", default.perturbation_ratio)?,
        top_k: parse_arg(main_args, "top-k", default.top_k)?,
        seed: parse_arg(main_args, "seed", default.seed)?,
    };
    params.validate()?;
    Ok(params)
}

/** reads command line input and returns the instance name, search parameters,
solution_filename and stats_filename */
pub fn read_params(main_args:&ArgMatches) -> Result<CliParams, CliqueError> {
    let inst_filename = main_args.value_of("instance")
        .ok_or_else(|| CliqueError::InvalidParameter("missing instance".to_string()))?
        .to_string();
    let params = read_search_params(main_args)?;
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    Ok(CliParams { inst_filename, params, sol_file, perf_file })
}

/// writes a string into a file
fn write_file(filename:&str, content:&str) -> Result<(), CliqueError> {
    fs::write(filename, content).map_err(|source| CliqueError::Io {
        path: filename.to_string(),
        source,
    })
}

/// clique as a single line of space separated vertex ids
pub fn clique_to_string(clique:&[VertexId]) -> String {
    let ids:Vec<String> = clique.iter().map(|v| v.to_string()).collect();
    format!("{}\n", ids.join(" "))
}

/** exports search results to files.
The clique is checked first: an incorrect clique is reported and nothing is written.
*/
pub fn export_results(
    graph:&Graph,
    clique:&[VertexId],
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<(), CliqueError> {
    if !verify_clique(graph, clique) {
        error!("{}", INCORRECT_CLIQUE);
        return Err(CliqueError::InvalidClique);
    }
    // export statistics
    if let Some(filename) = perf_file {
        write_file(filename, &stats.to_string())?;
    }
    // export solution
    if let Some(filename) = sol_file {
        write_file(filename, &clique_to_string(clique))?;
    }
    Ok(())
}

/// rounds value to a multiple of precision
pub fn round_to(value:f64, precision:f64) -> f64 {
    (value / precision).round() * precision
}

/** result of a single instance in a benchmark report */
#[derive(Debug, Clone)]
pub struct ReportRow {
    /// instance name
    pub instance: String,
    /// clique found (None if it was incorrect)
    pub clique: Option<Vec<VertexId>>,
    /// search time (seconds)
    pub seconds: f64,
}

impl ReportRow {
    /// console line (aligned with `console_header`)
    pub fn console_line(&self) -> String {
        match &self.clique {
            None => INCORRECT_CLIQUE.to_string(),
            Some(clique) => format!(
                "{:>20}{:>10}{:>15.3}", self.instance, clique.len(), round_to(self.seconds, 0.001)
            ),
        }
    }
}

/// header of the console table
pub fn console_header() -> String {
    format!("{:>20}{:>10}{:>15}", "Instance", "Clique", "Time, sec")
}

/** benchmark report: one CSV line per instance (';' separated) */
#[derive(Debug, Default, Clone)]
pub struct CsvReport {
    rows: Vec<ReportRow>,
}

impl CsvReport {
    /// adds a result
    pub fn push(&mut self, row:ReportRow) { self.rows.push(row); }

    /// results added so far
    pub fn rows(&self) -> &[ReportRow] { &self.rows }

    /// writes the report
    pub fn write_to<W:io::Write>(&self, writer:W) -> Result<(), CliqueError> {
        let mut w = csv::WriterBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .from_writer(writer);
        w.write_record(&["File", "Clique", "Time (sec)", "Clique vertices"])?;
        for row in &self.rows {
            match &row.clique {
                None => w.write_record(&[row.instance.as_str(), INCORRECT_CLIQUE])?,
                Some(clique) => {
                    let vertices:Vec<String> = clique.iter().map(|v| v.to_string()).collect();
                    w.write_record(&[
                        row.instance.clone(),
                        clique.len().to_string(),
                        format!("{:.3}", row.seconds),
                        vertices.join(", "),
                    ])?
                }
            }
        }
        w.flush().map_err(|source| CliqueError::Io { path: "csv report".to_string(), source })
    }

    /// writes the report into a file
    pub fn write(&self, filename:&str) -> Result<(), CliqueError> {
        let file = fs::File::create(filename).map_err(|source| CliqueError::Io {
            path: filename.to_string(),
            source,
        })?;
        self.write_to(file)
    }
}
