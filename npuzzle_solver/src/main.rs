#![doc = include_str!("../README.md")]

use anyhow::{bail, Context, Result};
use cpu_time::ProcessTime;
use npuzzle::board::Board;
use npuzzle::solver::Solver;
use npuzzle::stats::SearchAllStats;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::env;
use std::fmt::Write as _;
use std::fs;

/// Options given in the command line.
#[derive(Debug, PartialEq)]
struct Args {
    /// Files with boards to solve.
    files: Vec<String>,
    /// Print search statistics to stderr.
    stats: bool,
    /// Dimension of random boards to solve instead of files.
    random: Option<usize>,
    count: usize,
    walk: usize,
    seed: u64
}

const HELP: &str = "\
Acceptable arguments:
 <file>...          files with boards: N followed by N*N tiles, 0 for the blank
 --stats            print nodes expanded and CPU time to stderr
 --random <N>       solve random N x N boards instead of files
 --count <n>        number of random boards (default 1)
 --walk <steps>     random moves made from the goal board (default 1000)
 --seed <u64>       seed of the random generator (default 123)
 --help             print this message";

impl Args {
    /// Parses `args` (without the program name). Returns `None` if help is requested.
    fn parse(args: impl IntoIterator<Item=String>) -> Result<Option<Self>> {
        let mut result = Self { files: Vec::new(), stats: false, random: None, count: 1, walk: 1000, seed: 123 };
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |name: &str| args.next().with_context(|| format!("missing value of {}", name));
            match arg.as_str() {
                "--help" | "-h" => return Ok(None),
                "--stats" => result.stats = true,
                "--random" => result.random = Some(parse_number(&value("--random")?)?),
                "--count" => result.count = parse_number(&value("--count")?)?,
                "--walk" => result.walk = parse_number(&value("--walk")?)?,
                "--seed" => result.seed = parse_number(&value("--seed")?)?,
                _ if arg.starts_with("--") => bail!("Unrecognized argument: {}", arg),
                _ => result.files.push(arg),
            }
        }
        if result.files.is_empty() && result.random.is_none() { return Ok(None); }
        Ok(Some(result))
    }
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T> where T::Err: std::error::Error + Send + Sync + 'static {
    s.parse().with_context(|| format!("'{}' is not a valid number", s))
}

/// Returns random board of given `dimension`, obtained by `steps` random moves of the blank
/// (never undoing the previous one) from the goal board.
fn rand_board(dimension: usize, steps: usize, rng: &mut ChaCha8Rng) -> Result<Board> {
    let mut board = Board::goal(dimension)?;
    let mut prev_direction = None;
    for _ in 0..steps {
        let moves = board.blank_moves();
        let candidates: Vec<_> = moves.iter().filter(|d| Some(d.opposite()) != prev_direction).collect();
        let Some(&&direction) = candidates.choose(rng) else { break };
        board = board.moved(direction).context("the blank left the board")?;
        prev_direction = Some(direction);
    }
    Ok(board)
}

/// Returns the text reporting the result of `solver`.
fn report(solver: &Solver) -> String {
    let mut result = String::new();
    match solver.solution() {
        None => result.push_str("No solution possible\n"),
        Some(solution) => {
            // writing to String cannot fail
            let _ = writeln!(result, "Minimum number of moves = {}", solver.moves());
            for board in solution {
                let _ = writeln!(result, "{}", board);
            }
        }
    }
    result
}

/// Solves `board`, prints the result to stdout and, if `print_stats`, statistics to stderr.
fn solve(name: &str, board: Board, print_stats: bool) -> Result<()> {
    let mut stats = SearchAllStats::default();
    let start_moment = ProcessTime::try_now().context("Getting process time failed")?;
    let solver = Solver::with_stats(board, &mut stats);
    let seconds = start_moment.try_elapsed().context("Getting process time failed")?.as_secs_f64();
    print!("{}", report(&solver));
    if print_stats {
        eprintln!("{}: {} nodes expanded ({} enqueued) by main search, {} ({}) by twin search, {:.3} sec.",
                  name, stats.main.expanded, stats.main.enqueued, stats.twin.expanded, stats.twin.enqueued, seconds);
    }
    Ok(())
}

fn main() -> Result<()> {
    let Some(args) = Args::parse(env::args().skip(1))? else {
        println!("{}", HELP);
        return Ok(());
    };
    if let Some(dimension) = args.random {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        for index in 0..args.count {
            let board = rand_board(dimension, args.walk, &mut rng)?;
            solve(&format!("random board {}", index), board, args.stats)?;
        }
    }
    for file_name in &args.files {
        let content = fs::read_to_string(file_name).with_context(|| format!("Cannot read {}", file_name))?;
        let board: Board = content.parse().with_context(|| format!("Invalid board in {}", file_name))?;
        solve(file_name, board, args.stats)?;
    }
    Ok(())
}
