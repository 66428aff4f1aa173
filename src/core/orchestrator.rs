/*!
# Pipeline Orchestrator

Sequences the retiming pipeline's stages — cycle check, W/D construction, PC construction,
solving, retiming application, scheduling — logging progress at each stage boundary with
`tracing`, in the idiom of the reference crate's own optional logging. Aborts on the first
failure without mutating the main graph.
*/

use tracing::{debug, info};

use crate::core::circuit::CircuitGraph;
use crate::core::cycle::has_zero_weight_cycle;
use crate::core::error::RetimingError;
use crate::core::matrix::Matrix;
use crate::core::pc::{build_pc_graph, build_pc_matrix};
use crate::core::retime::apply_retiming;
use crate::core::schedule::schedule;
use crate::core::solver::solve;
use crate::core::wd::build_wd;

/// Everything produced by a successful retiming run, available for inspection after the main
/// graph's edge weights have been updated in place.
pub struct RetimingReport {
    pub w: Matrix,
    pub d: Matrix,
    pub pc: Matrix,
    pub retiming_vector: Vec<i64>,
    pub schedule: Vec<i64>,
}

/// Runs the full pipeline against `circuit`, mutating its edge weights in place on success.
///
/// # Errors
///
/// [`RetimingError::CycleInGraph`] if the zero-weight subgraph contains a cycle, or
/// [`RetimingError::NegativeCycleInPc`] if no feasible retiming exists for `clock_period`. In
/// either case `circuit` is left untouched.
pub fn run(
    circuit: &mut CircuitGraph,
    delays: &[i64],
    clock_period: i64,
) -> Result<RetimingReport, RetimingError> {
    info!("checking zero-weight subgraph for cycles");
    if has_zero_weight_cycle(circuit) {
        return Err(RetimingError::CycleInGraph);
    }

    info!("building W/D matrices");
    let (w, d) = build_wd(circuit);
    debug!(side = w.side(), "W/D matrices built");

    info!("building PC matrix and PC graph");
    let pc = build_pc_matrix(&w, &d, clock_period);
    let pc_graph = build_pc_graph(&pc);

    info!("solving PC graph with Bellman-Ford");
    let retiming_vector = solve(&pc_graph)?;

    info!("applying retiming vector to main graph");
    apply_retiming(circuit, &retiming_vector);

    info!("scheduling retimed graph");
    let schedule = schedule(circuit, delays);

    Ok(RetimingReport {
        w,
        d,
        pc,
        retiming_vector,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_chain_retimes_successfully() {
        let delays = vec![0, 5, 5, 0];
        let mut g = CircuitGraph::new(&delays);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 0);
        g.add_edge(2, 3, 0);
        g.add_edge(3, 0, 0);

        let report = run(&mut g, &delays, 10).unwrap();
        for (_, _, w) in g.edges() {
            assert!(w >= 0);
        }
        assert_eq!(report.schedule.len(), 4);
    }

    #[test]
    fn test_cycle_in_zero_weight_subgraph_is_rejected() {
        let delays = vec![0, 0, 0];
        let mut g = CircuitGraph::new(&delays);
        g.add_edge(0, 1, 0);
        g.add_edge(1, 2, 0);
        g.add_edge(2, 0, 0);
        let err = run(&mut g, &delays, 4).unwrap_err();
        assert!(matches!(err, RetimingError::CycleInGraph));
    }

    #[test]
    fn test_infeasible_clock_period_reports_negative_cycle() {
        let delays = vec![0, 100, 100];
        let mut g = CircuitGraph::new(&delays);
        g.add_edge(0, 1, 0);
        g.add_edge(1, 2, 0);
        g.add_edge(2, 0, 1);
        let err = run(&mut g, &delays, 1).unwrap_err();
        assert!(matches!(err, RetimingError::NegativeCycleInPc));
    }
}
