use std::path::Path;
use std::rc::Rc;
use std::time::Instant;

use clap::{App, load_yaml};
use tracing::{error, info};

use dsatur_clique::find_clique;
use dsatur_clique::error::CliqueError;
use dsatur_clique::graph::Graph;
use dsatur_clique::util::{CsvReport, ReportRow, console_header, read_search_params};

/// DIMACS instances used by default
const BENCHMARK:[&str; 25] = [
    "brock200_1.clq", "brock200_2.clq", "brock200_3.clq", "brock200_4.clq",
    "brock400_1.clq", "brock400_2.clq", "brock400_3.clq", "brock400_4.clq",
    "C125.9.clq",
    "gen200_p0.9_44.clq", "gen200_p0.9_55.clq",
    "hamming8-4.clq",
    "johnson16-2-4.clq", "johnson8-2-4.clq",
    "keller4.clq",
    "MANN_a27.clq", "MANN_a9.clq",
    "p_hat1000-1.clq", "p_hat1000-2.clq",
    "p_hat1500-1.clq",
    "p_hat300-3.clq", "p_hat500-3.clq",
    "san1000.clq",
    "sanr200_0.9.clq", "sanr400_0.7.clq",
];


/** runs the perturbation search on every instance and writes one CSV line per instance */
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    // parse arguments
    let yaml = load_yaml!("clique_benchmark.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_search_params(&main_args)?;
    let data_dir = main_args.value_of("data").unwrap_or("data");
    let output = main_args.value_of("output").unwrap_or("clique.csv");
    let instances:Vec<&str> = match main_args.values_of("instances") {
        None => BENCHMARK.to_vec(),
        Some(values) => values.collect(),
    };

    let mut report = CsvReport::default();
    println!("{}", console_header());
    for instance in instances {
        let path = Path::new(data_dir).join(instance);
        let graph = match Graph::from_file(&path.to_string_lossy()) {
            Ok(g) => Rc::new(g),
            Err(e) => {
                error!("skipping {}: {}", instance, e);
                continue;
            }
        };
        info!("{}: {} vertices, {} edges", instance, graph.nb_vertices(), graph.nb_edges());
        let t_start = Instant::now();
        let clique = match find_clique(graph, &params) {
            Ok(clique) => Some(clique),
            Err(CliqueError::InvalidClique) => None,
            Err(e) => return Err(e.into()),
        };
        let row = ReportRow {
            instance: instance.to_string(),
            clique,
            seconds: t_start.elapsed().as_secs_f64(),
        };
        println!("{}", row.console_line());
        report.push(row);
    }
    report.write(output)?;
    info!("report written in {}", output);
    Ok(())
}
