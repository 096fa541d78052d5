use rand::{Rng, SeedableRng, rngs::SmallRng};
use rayon::{
    ThreadPoolBuilder,
    iter::{IntoParallelRefIterator, ParallelIterator},
};
use tracing::{debug, info, instrument};

use crate::{problem::delivery_problem::DeliveryProblem, timer_debug};

use super::{
    construction::random_assignment::random_assignment, ls::hill_climb::HillClimb,
    solution::Solution, solver_error::SolverError, solver_params::SolverParams,
};

type BestSolutionCallback = Box<dyn FnMut(usize, &Solution) + Send>;

/// Hill climbing with random restarts.
///
/// Every trial starts from a fresh random assignment and climbs from there; only the
/// cheapest solution over all trials is kept, the earliest one winning ties.
///
/// Each trial gets its own generator, seeded from the generator given to
/// [`Solver::solve`] before any trial runs. The result for a given generator state is
/// therefore the same whether trials run on one thread or many.
pub struct Solver<'a> {
    problem: &'a DeliveryProblem,
    params: SolverParams,
    on_best_solution: Option<BestSolutionCallback>,
}

impl<'a> Solver<'a> {
    pub fn new(problem: &'a DeliveryProblem, params: SolverParams) -> Self {
        Solver {
            problem,
            params,
            on_best_solution: None,
        }
    }

    /// Called with the trial index every time the best solution improves, in trial order.
    pub fn on_best_solution<F>(&mut self, callback: F)
    where
        F: FnMut(usize, &Solution) + Send + 'static,
    {
        self.on_best_solution = Some(Box::new(callback));
    }

    #[instrument(skip_all, level = "debug")]
    pub fn solve<R: Rng>(&mut self, rng: &mut R) -> Result<Solution, SolverError> {
        self.problem
            .fleet()
            .ensure_can_serve(self.problem.num_deliveries())?;

        let restarts = self.params.restarts_for(self.problem.num_cities());
        let trial_seeds = (0..restarts).map(|_| rng.random()).collect::<Vec<u64>>();
        let num_threads = self.params.threads.number_of_threads();
        let hill_climb = HillClimb::new(self.params.iterations);

        debug!(
            restarts,
            iterations = hill_climb.iterations(),
            num_threads,
            "Running restarts"
        );

        let problem = self.problem;
        let best = timer_debug!("Random restarts", {
            if num_threads <= 1 {
                let mut best = None;
                for (trial, &seed) in trial_seeds.iter().enumerate() {
                    let solution = run_trial(problem, hill_climb, seed)?;
                    self.keep_best(&mut best, trial, solution);
                }
                best
            } else {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()?;

                let solutions = pool.install(|| {
                    trial_seeds
                        .par_iter()
                        .map(|&seed| run_trial(problem, hill_climb, seed))
                        .collect::<Result<Vec<_>, _>>()
                })?;

                let mut best = None;
                for (trial, solution) in solutions.into_iter().enumerate() {
                    self.keep_best(&mut best, trial, solution);
                }
                best
            }
        });

        let Some(best) = best else {
            panic!("Solver: no trial was run, restarts_for must return at least one");
        };

        info!(cost = best.cost(), restarts, "Search finished");

        Ok(best)
    }

    fn keep_best(&mut self, best: &mut Option<Solution>, trial: usize, solution: Solution) {
        debug!(trial, cost = solution.cost(), "Trial finished");

        let improves = best
            .as_ref()
            .is_none_or(|current| solution.cost() < current.cost());
        if !improves {
            return;
        }

        debug!(trial, cost = solution.cost(), "New best solution");

        if let Some(callback) = self.on_best_solution.as_mut() {
            callback(trial, &solution);
        }

        *best = Some(solution);
    }
}

/// One restart: a random assignment drawn from `seed`, then a hill climb from it.
fn run_trial(
    problem: &DeliveryProblem,
    hill_climb: HillClimb,
    seed: u64,
) -> Result<Solution, SolverError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let initial = random_assignment(problem.fleet(), problem.num_cities(), &mut rng)?;

    Ok(hill_climb.climb(initial, problem.costs(), &mut rng))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::{
        problem::{cost_matrix::Cost, fleet::Fleet},
        solver::solver_params::Threads,
        test_utils,
    };

    use super::*;

    fn triangle_problem() -> DeliveryProblem {
        let graph = test_utils::create_graph(&[
            &["0", "5", "3"],
            &["5", "0", "N"],
            &["3", "N", "0"],
        ]);
        DeliveryProblem::new(&graph, Fleet::from_capacities(&[2])).unwrap()
    }

    #[test]
    fn test_solve_triangle() {
        let problem = triangle_problem();
        let mut solver = Solver::new(&problem, SolverParams::default());

        let solution = solver.solve(&mut SmallRng::seed_from_u64(1)).unwrap();

        assert_eq!(solution.cost(), 11);
        assert!(solution.assignment().is_feasible(problem.fleet(), 3));
    }

    #[test]
    fn test_best_is_minimum_over_trials() {
        let problem = test_utils::create_line_problem(8, &[3, 2, 2]);
        let params = SolverParams {
            restarts: Some(15),
            iterations: 5,
            threads: Threads::Single,
        };

        let improvements = Arc::new(Mutex::new(Vec::<(usize, Cost)>::new()));
        let recorded = Arc::clone(&improvements);

        let mut solver = Solver::new(&problem, params);
        solver.on_best_solution(move |trial, solution| {
            recorded.lock().unwrap().push((trial, solution.cost()));
        });
        let best = solver.solve(&mut SmallRng::seed_from_u64(99)).unwrap();

        // replay every trial by hand
        let mut rng = SmallRng::seed_from_u64(99);
        let seeds = (0..15).map(|_| rng.random()).collect::<Vec<u64>>();
        let trial_costs = seeds
            .iter()
            .map(|&seed| run_trial(&problem, HillClimb::new(5), seed).unwrap().cost())
            .collect::<Vec<_>>();

        assert_eq!(best.cost(), *trial_costs.iter().min().unwrap());
        assert!(trial_costs.iter().all(|&cost| best.cost() <= cost));

        let improvements = improvements.lock().unwrap();
        assert_eq!(improvements.first().map(|&(trial, _)| trial), Some(0));
        assert_eq!(improvements.last().map(|&(_, cost)| cost), Some(best.cost()));
        assert!(improvements.windows(2).all(|pair| pair[1].1 < pair[0].1));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem = test_utils::create_line_problem(10, &[4, 3, 3]);

        let sequential = Solver::new(
            &problem,
            SolverParams {
                restarts: Some(30),
                threads: Threads::Single,
                ..SolverParams::default()
            },
        )
        .solve(&mut SmallRng::seed_from_u64(2024))
        .unwrap();

        let parallel = Solver::new(
            &problem,
            SolverParams {
                restarts: Some(30),
                threads: Threads::Multi(4),
                ..SolverParams::default()
            },
        )
        .solve(&mut SmallRng::seed_from_u64(2024))
        .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_ties_keep_earliest_trial() {
        // one city per truck, every assignment costs 4 + 6
        let graph = test_utils::create_graph(&[
            &["0", "4", "6"],
            &["4", "0", "N"],
            &["6", "N", "0"],
        ]);
        let problem = DeliveryProblem::new(&graph, Fleet::from_capacities(&[1, 1])).unwrap();

        let improvements = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&improvements);

        let mut solver = Solver::new(&problem, SolverParams::default());
        solver.on_best_solution(move |trial, solution: &Solution| {
            recorded.lock().unwrap().push((trial, solution.clone()));
        });
        let best = solver.solve(&mut SmallRng::seed_from_u64(8)).unwrap();

        let improvements = improvements.lock().unwrap();
        assert_eq!(best.cost(), 10);
        assert_eq!(improvements.len(), 1);
        assert_eq!(improvements[0].0, 0);
        assert_eq!(improvements[0].1, best);
    }

    #[test]
    fn test_solve_depot_only() {
        let costs = test_utils::create_costs(vec![vec![0]]);
        let problem =
            DeliveryProblem::from_cost_matrix(costs, Fleet::from_capacities(&[0])).unwrap();

        let solution = Solver::new(&problem, SolverParams::default())
            .solve(&mut SmallRng::seed_from_u64(0))
            .unwrap();

        assert_eq!(solution.cost(), 0);
        assert_eq!(solution.assignment().num_routes(), 1);
    }
}
