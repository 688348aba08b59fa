use clap::{Parser, ValueEnum};
use slidetile::greedy::GreedySolver;
use slidetile::heuristic::{
    Euclidean, Hamming, Heuristic, Manhattan, NullHeuristic, RandomHeuristic,
};
use slidetile::node::Node;
use slidetile::puzzle::Puzzle;
use slidetile::shuffle::{ShuffleMode, Shuffler};
use slidetile::solver::{SolveResult, Solver, Tracer};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HeuristicType {
    Manhattan,
    Euclidean,
    Hamming,
    Random,
    Null,
}

fn make_heuristic(heuristic: HeuristicType, size: usize) -> Box<dyn Heuristic> {
    match heuristic {
        HeuristicType::Manhattan => Box::new(Manhattan),
        HeuristicType::Euclidean => Box::new(Euclidean),
        HeuristicType::Hamming => Box::new(Hamming),
        HeuristicType::Random => Box::new(RandomHeuristic::new(size)),
        HeuristicType::Null => Box::new(NullHeuristic::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Astar,
    Greedy,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShuffleType {
    Swap,
    Walk,
}

impl From<ShuffleType> for ShuffleMode {
    fn from(shuffle: ShuffleType) -> Self {
        match shuffle {
            ShuffleType::Swap => ShuffleMode::Swap,
            ShuffleType::Walk => ShuffleMode::Walk,
        }
    }
}

struct VerboseTracer {
    trace_start: usize,
    trace_end: usize,
}

impl VerboseTracer {
    fn new(from_iteration: usize, to_iteration: usize) -> Self {
        Self {
            trace_start: from_iteration,
            trace_end: to_iteration,
        }
    }
}

impl Tracer for VerboseTracer {
    fn trace(&self, puzzle: &Puzzle, iterations: usize, node: &Node) {
        if self.trace_start <= iterations && iterations <= self.trace_end {
            println!(
                "count={}, f_cost={:.3}, g_cost={}, h_cost={:.3}:\n{}",
                iterations,
                node.f(),
                node.g(),
                node.h(),
                puzzle
            );
        }
    }
}

struct RunStats {
    solved: bool,
    path_len: usize,
    iterations: usize,
    elapsed_ms: u128,
}

fn solve_helper<T: Tracer>(
    puzzle: &mut Puzzle,
    heuristic: Box<dyn Heuristic>,
    bound: f64,
    max_nodes: usize,
    tracer: T,
) -> RunStats {
    let mut solver = Solver::new(heuristic, bound)
        .max_nodes(max_nodes)
        .tracer(tracer);

    let start = Instant::now();
    let result = solver.solve(puzzle);
    let elapsed_ms = start.elapsed().as_millis();

    let (solved_char, path_len, solved) = match result {
        SolveResult::Solved { path_len, .. } => ('Y', path_len, true),
        SolveResult::Cutoff => ('N', 0, false),
        SolveResult::Impossible => ('X', 0, false),
    };

    println!(
        "heuristic: {:<10}  solved: {}  iterations: {:<10}  path: {:<4}  elapsed: {} ms",
        solver.heuristic().name(),
        solved_char,
        solver.iterations(),
        path_len,
        elapsed_ms
    );

    RunStats {
        solved,
        path_len,
        iterations: solver.iterations(),
        elapsed_ms,
    }
}

/// Scramble `args.runs` starts, then report the average greedy move count
/// of each heuristic over all of them.
fn greedy_report(args: &Args, puzzle: &mut Puzzle, shuffler: &mut Shuffler, seed: u64) {
    let mut starts = Vec::with_capacity(args.runs);
    for _ in 0..args.runs {
        if let Err(e) = shuffler.scramble(puzzle, args.shuffle.into()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        starts.push(puzzle.clone());
    }

    println!("runs: {}", args.runs);
    for &heuristic in &args.heuristic {
        let mut solver =
            GreedySolver::new(make_heuristic(heuristic, args.size), seed).max_moves(args.max_nodes);

        let start = Instant::now();
        let average = solver.average_moves(&starts);
        let elapsed_ms = start.elapsed().as_millis();

        let average = match average {
            Some(moves) => moves.to_string(),
            None => "cut off".to_string(),
        };
        println!(
            "heuristic: {:<10}  avg moves: {:<10}  elapsed: {} ms",
            solver.heuristic().name(),
            average,
            elapsed_ms
        );
    }
}

#[derive(Parser)]
#[command(name = "slidetile")]
#[command(about = "A weighted A* sliding-tile puzzle solver", long_about = None)]
struct Args {
    /// Side length of the puzzle
    #[arg(value_name = "SIZE", default_value = "3")]
    size: usize,

    /// Number of scrambles to solve
    #[arg(short, long, default_value = "1")]
    runs: usize,

    /// Heuristic weight (1.0 = optimal A*, larger = faster but suboptimal)
    #[arg(short, long, default_value = "1.0")]
    bound: f64,

    /// Seed for the scrambler (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Heuristics to run on each scramble
    #[arg(
        short = 'H',
        long,
        value_enum,
        default_values = ["manhattan", "euclidean", "hamming"]
    )]
    heuristic: Vec<HeuristicType>,

    /// Scrambling method
    #[arg(short = 'm', long, value_enum, default_value = "swap")]
    shuffle: ShuffleType,

    /// Search algorithm
    #[arg(short, long, value_enum, default_value = "astar")]
    algorithm: Algorithm,

    /// Maximum number of nodes to expand, or moves to make with greedy,
    /// before giving up (0 = no limit)
    #[arg(short = 'n', long, default_value = "0")]
    max_nodes: usize,

    /// Range of iterations to trace (start, end)
    #[arg(long, num_args = 2)]
    trace_range: Option<Vec<usize>>,
}

fn main() {
    let args = Args::parse();

    if !(args.bound.is_finite() && args.bound > 0.0) {
        eprintln!("Error: bound must be a positive number");
        std::process::exit(1);
    }

    if let Some(ref range) = args.trace_range {
        if range[0] > range[1] {
            eprintln!("Error: trace range start must be <= end");
            std::process::exit(1);
        }
    }

    let mut puzzle = match Puzzle::new(args.size) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut shuffler = match args.seed {
        Some(seed) => Shuffler::new(seed),
        None => Shuffler::from_entropy(),
    };

    if args.algorithm == Algorithm::Greedy {
        let seed = args.seed.unwrap_or_else(rand::random);
        greedy_report(&args, &mut puzzle, &mut shuffler, seed);
        return;
    }

    let trace_range = args.trace_range.as_ref().map(|v| (v[0], v[1]));

    let mut total_solved = 0;
    let mut total_runs = 0;
    let mut total_path = 0;
    let mut total_iterations = 0;
    let mut total_time_ms = 0;

    for run in 1..=args.runs {
        if let Err(e) = shuffler.scramble(&mut puzzle, args.shuffle.into()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        println!("\nrun {}:\n{}", run, puzzle);

        // Every heuristic starts from the same scrambled grid
        let backup = puzzle.clone();

        for &heuristic in &args.heuristic {
            puzzle.clone_from(&backup);
            let stats = match trace_range {
                Some((start, end)) => solve_helper(
                    &mut puzzle,
                    make_heuristic(heuristic, args.size),
                    args.bound,
                    args.max_nodes,
                    VerboseTracer::new(start, end),
                ),
                None => solve_helper(
                    &mut puzzle,
                    make_heuristic(heuristic, args.size),
                    args.bound,
                    args.max_nodes,
                    (),
                ),
            };

            total_runs += 1;
            if stats.solved {
                total_solved += 1;
            }
            total_path += stats.path_len;
            total_iterations += stats.iterations;
            total_time_ms += stats.elapsed_ms;
        }
    }

    if total_runs > 1 {
        println!("---");
        println!(
            "solved: {:>3}/{:<3}  iterations: {:<10}  path: {:<6}  elapsed: {} ms",
            total_solved, total_runs, total_iterations, total_path, total_time_ms
        );
    }
}
