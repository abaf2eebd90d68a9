use std::rc::Rc;
use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;
use tracing::info;

use dsatur_clique::graph::Graph;
use dsatur_clique::search::perturbation::perturbation_search;
use dsatur_clique::util::{read_params, export_results};


/** solves a CLIQUE problem using a DSATUR-guided greedy followed by a perturbation search. */
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    // parse arguments
    let yaml = load_yaml!("clique_perturbation.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let cli = read_params(&main_args)?;
    info!("reading instance: {}...", cli.inst_filename);
    let graph = Rc::new(Graph::from_file(&cli.inst_filename)?);
    graph.display_statistics();

    // solve it
    let t_start = Instant::now();
    let result = perturbation_search(graph.clone(), &cli.params)?;
    let duration = t_start.elapsed().as_secs_f32();
    let clique = result.best.vertices().to_vec();
    info!("perturbation search took {:.3} seconds. Nb vertices: {}", duration, clique.len());
    println!("{}", clique.len());
    let stats = json!({
        "primal_list": result.primal_list,
        "nb_improvements": result.nb_improvements,
        "time_searched": duration,
        "inst_name": cli.inst_filename,
        "params": cli.params,
        "clique": clique,
    });

    // export results
    export_results(&graph, &clique, &stats, cli.perf_file.as_deref(), cli.sol_file.as_deref())?;
    Ok(())
}
