use crate::board::Board;
use crate::error::SolverError;
use crate::stats::{Lane, SearchStatsCollector};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::iter::FusedIterator;
use std::rc::Rc;

/// Visited state of a single search, stored in the arena of its [`Search`].
struct SearchNode {
    /// Number of moves from the initial board.
    moves: u32,
    board: Rc<Board>,
    /// Arena index of the parent, `None` for the root.
    previous: Option<usize>
}

impl SearchNode {
    /// Estimated total number of moves of the solution that passes through this node.
    #[inline] fn priority(&self) -> u32 { self.board.manhattan() + self.moves }
}

/// A* search with Manhattan priority that can be advanced one expansion at a time.
struct Search {
    lane: Lane,
    /// Every node ever created; parents always precede their children.
    nodes: Vec<SearchNode>,
    /// Min-queue of (priority, arena index). Arena indices grow with insertion order,
    /// so nodes of equal priority leave the queue in the order they entered it.
    queue: BinaryHeap<Reverse<(u32, usize)>>,
    /// Arena index of the node most recently taken from the queue.
    current: usize
}

impl Search {
    fn new(lane: Lane, board: Board) -> Self {
        Self {
            lane,
            nodes: vec![SearchNode { moves: 0, board: Rc::new(board), previous: None }],
            queue: BinaryHeap::new(),
            current: 0
        }
    }

    #[inline] fn current(&self) -> &SearchNode { &self.nodes[self.current] }

    #[inline] fn is_goal(&self) -> bool { self.current().board.is_goal() }

    /// Expands the current node and makes the node of minimal priority the current one.
    fn step(&mut self, stats: &mut impl SearchStatsCollector) {
        stats.expanded(self.lane);
        let current = self.current();
        let moves = current.moves + 1;
        let neighbors = current.board.neighbors();
        // moving the blank back leads to the parent board
        let previous_board = current.previous.map(|p| Rc::clone(&self.nodes[p].board));
        for neighbor in neighbors {
            if previous_board.as_deref() == Some(&neighbor) { continue; }
            let node = SearchNode { moves, board: Rc::new(neighbor), previous: Some(self.current) };
            self.queue.push(Reverse((node.priority(), self.nodes.len())));
            self.nodes.push(node);
            stats.enqueued(self.lane);
        }
        let Some(Reverse((_, next))) = self.queue.pop() else {
            unreachable!("each board has at least two neighbors and only one of them is skipped")
        };
        self.current = next;
    }

    /// Returns boards on the path from the root to the current node.
    fn path(&self) -> Vec<Rc<Board>> {
        let mut result = Vec::with_capacity(self.current().moves as usize + 1);
        let mut node = Some(self.current);
        while let Some(index) = node {
            result.push(Rc::clone(&self.nodes[index].board));
            node = self.nodes[index].previous;
        }
        result.reverse();
        result
    }
}

/// Optimal solution of the N-puzzle (or the proof that there is none), found by A* search.
///
/// The search runs in lockstep on the initial board and on its [twin](Board::twin).
/// Exactly one of them is solvable, so one of the searches always reaches the goal.
pub struct Solver {
    /// Boards from the initial board to the goal, `None` if the initial board is unsolvable.
    solution: Option<Vec<Rc<Board>>>
}

impl Solver {
    /// Solves `initial` board.
    #[inline] pub fn new(initial: Board) -> Self {
        Self::with_stats(initial, &mut ())
    }

    /// Solves `initial` board. Collect statistics during search.
    pub fn with_stats(initial: Board, stats: &mut impl SearchStatsCollector) -> Self {
        let twin = initial.twin();
        let mut main = Search::new(Lane::Main, initial);
        let mut twin = Search::new(Lane::Twin, twin);
        while !main.is_goal() && !twin.is_goal() {
            main.step(stats);
            twin.step(stats);
        }
        Self { solution: main.is_goal().then(|| main.path()) }
    }

    /// Checks whether the initial board can be transformed into the goal board.
    #[inline] pub fn is_solvable(&self) -> bool { self.solution.is_some() }

    /// Returns the minimum number of moves to solve the initial board, or `-1` if it is unsolvable.
    pub fn moves(&self) -> i32 {
        self.solution.as_ref().map_or(-1, |boards| boards.len() as i32 - 1)
    }

    /// Returns boards of a shortest solution, from the initial board to the goal board (both included),
    /// or `None` if the initial board is unsolvable.
    pub fn solution(&self) -> Option<Solution<'_>> {
        self.solution.as_ref().map(|boards| Solution { boards: boards.iter() })
    }
}

/// Fails with [`SolverError::MissingBoard`] if there is no initial board.
impl TryFrom<Option<Board>> for Solver {
    type Error = SolverError;

    fn try_from(initial: Option<Board>) -> Result<Self, Self::Error> {
        initial.map(Self::new).ok_or(SolverError::MissingBoard)
    }
}

/// Iterator over boards of the solution found by [`Solver`].
#[derive(Clone)]
pub struct Solution<'a> {
    boards: std::slice::Iter<'a, Rc<Board>>
}

impl<'a> Iterator for Solution<'a> {
    type Item = &'a Board;

    #[inline] fn next(&mut self) -> Option<Self::Item> {
        self.boards.next().map(|b| b.as_ref())
    }

    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.boards.size_hint() }
}

impl DoubleEndedIterator for Solution<'_> {
    #[inline] fn next_back(&mut self) -> Option<Self::Item> {
        self.boards.next_back().map(|b| b.as_ref())
    }
}

impl ExactSizeIterator for Solution<'_> {}

impl FusedIterator for Solution<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{LaneStats, SearchAllStats};
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashSet, VecDeque};

    fn board<R: AsRef<[u32]>>(rows: &[R]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    /// Solvability by inversion parity.
    fn parity_solvable(board: &Board) -> bool {
        let tiles: Vec<u32> = board.tiles().filter(|t| *t != 0).collect();
        let inversions: usize = tiles.iter().enumerate()
            .map(|(i, t)| tiles[i + 1..].iter().filter(|next| *next < t).count())
            .sum();
        if board.dimension() % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + board.blank_position().0) % 2 == 1
        }
    }

    /// Minimum number of moves found by breadth-first search.
    fn bfs_moves(initial: &Board) -> u32 {
        let mut visited = HashSet::from([initial.clone()]);
        let mut queue = VecDeque::from([(initial.clone(), 0)]);
        while let Some((board, moves)) = queue.pop_front() {
            if board.is_goal() { return moves; }
            for neighbor in board.neighbors() {
                if visited.insert(neighbor.clone()) {
                    queue.push_back((neighbor, moves + 1));
                }
            }
        }
        panic!("no solution for {:?}", initial);
    }

    fn random_walk(dimension: usize, steps: usize, rng: &mut ChaCha8Rng) -> Board {
        let mut board = Board::goal(dimension).unwrap();
        for _ in 0..steps {
            let direction = *board.blank_moves().choose(rng).unwrap();
            board = board.moved(direction).unwrap();
        }
        board
    }

    fn random_permutation(dimension: usize, rng: &mut ChaCha8Rng) -> Board {
        let mut tiles: Vec<u32> = (0..(dimension * dimension) as u32).collect();
        tiles.shuffle(rng);
        Board::new(dimension, tiles).unwrap()
    }

    /// Checks that the solution starts at `initial`, ends at the goal and consists of legal slides.
    fn assert_valid_solution(solver: &Solver, initial: &Board) {
        let boards: Vec<&Board> = solver.solution().unwrap().collect();
        assert_eq!(boards.len() as i32, solver.moves() + 1);
        assert_eq!(boards[0], initial);
        assert!(boards[boards.len() - 1].is_goal());
        for pair in boards.windows(2) {
            assert!(pair[0].neighbors().contains(pair[1]), "{:?} -> {:?} is not a slide", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_goal_is_solved() {
        let goal = board(&[[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        let solver = Solver::new(goal.clone());
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 0);
        assert_eq!(solver.solution().unwrap().collect::<Vec<_>>(), [&goal]);
    }

    #[test]
    fn test_single_cell() {
        let solver = Solver::new(Board::goal(1).unwrap());
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 0);
        assert_eq!(solver.solution().unwrap().len(), 1);
    }

    #[test]
    fn test_two_moves() {
        let initial = board(&[[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let solver = Solver::new(initial.clone());
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 2);
        assert_valid_solution(&solver, &initial);
        assert_eq!(solver.solution().unwrap().nth(1), Some(&board(&[[1, 2, 3], [4, 5, 6], [7, 0, 8]])));
    }

    #[test]
    fn test_four_moves() {
        let initial = board(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]);
        let solver = Solver::new(initial.clone());
        assert_eq!(solver.moves(), 4);
        assert_valid_solution(&solver, &initial);
    }

    #[test]
    fn test_unsolvable_33() {
        let solver = Solver::new(board(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]));
        assert!(!solver.is_solvable());
        assert_eq!(solver.moves(), -1);
        assert!(solver.solution().is_none());
    }

    #[test]
    fn test_22() {
        let solver = Solver::new(board(&[[1, 2], [0, 3]]));
        assert_eq!(solver.moves(), 1);
        let solver = Solver::new(board(&[[0, 1], [3, 2]]));
        assert_eq!(solver.moves(), 2);
        let solver = Solver::new(board(&[[2, 1], [3, 0]]));
        assert!(!solver.is_solvable());
        let solver = Solver::new(board(&[[1, 3], [2, 0]]));
        assert!(!solver.is_solvable());
    }

    #[test]
    fn test_44() {
        let initial = board(&[[1, 2, 3, 4], [5, 6, 0, 8], [9, 10, 7, 11], [13, 14, 15, 12]]);
        let solver = Solver::new(initial.clone());
        assert_eq!(solver.moves(), 3);
        assert_valid_solution(&solver, &initial);
        // the twin of `initial.twin()` is `initial`
        let solver = Solver::new(initial.twin());
        assert!(!solver.is_solvable());
        assert!(solver.solution().is_none());
    }

    #[test]
    fn test_missing_board() {
        assert!(matches!(Solver::try_from(None::<Board>), Err(SolverError::MissingBoard)));
        let solver = Solver::try_from(Some(board(&[[1, 2], [0, 3]]))).unwrap();
        assert_eq!(solver.moves(), 1);
    }

    #[test]
    fn test_solution_restartable() {
        let solver = Solver::new(board(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]));
        let first: Vec<_> = solver.solution().unwrap().collect();
        let second: Vec<_> = solver.solution().unwrap().collect();
        assert_eq!(first, second);
        let backwards: Vec<_> = solver.solution().unwrap().rev().collect();
        assert!(backwards[0].is_goal());
        assert_eq!(backwards.len(), first.len());
    }

    #[test]
    fn test_stats() {
        let mut stats = SearchAllStats::default();
        let solver = Solver::with_stats(board(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]), &mut stats);
        assert_eq!(solver.moves(), 4);
        // lanes advance in lockstep
        assert_eq!(stats.main.expanded, stats.twin.expanded);
        assert!(stats.main.expanded >= 4);
        assert!(stats.main.enqueued >= stats.main.expanded);
        let mut stats = SearchAllStats::default();
        Solver::with_stats(Board::goal(3).unwrap(), &mut stats);
        assert_eq!(stats.main, LaneStats::default());
        assert_eq!(stats.twin, LaneStats::default());
    }

    #[test]
    fn test_twin_parity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        for dimension in 2..=5 {
            for _ in 0..50 {
                let b = random_permutation(dimension, &mut rng);
                assert_ne!(parity_solvable(&b), parity_solvable(&b.twin()), "{:?}", b);
                assert!(!(b.is_goal() && b.twin().is_goal()));
            }
        }
    }

    #[test]
    fn test_optimal_random_walks_33() {
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        for _ in 0..10 {
            let initial = random_walk(3, 40, &mut rng);
            let solver = Solver::new(initial.clone());
            assert!(solver.is_solvable());
            assert_eq!(solver.moves(), bfs_moves(&initial) as i32, "{:?}", initial);
            assert_valid_solution(&solver, &initial);
        }
    }

    #[test]
    fn test_optimal_random_walks_44() {
        let mut rng = ChaCha8Rng::seed_from_u64(321);
        for _ in 0..5 {
            let initial = random_walk(4, 14, &mut rng);
            let solver = Solver::new(initial.clone());
            assert_eq!(solver.moves(), bfs_moves(&initial) as i32, "{:?}", initial);
            assert_valid_solution(&solver, &initial);
        }
    }

    #[test]
    fn test_solvability_random_33() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..5 {
            let initial = random_permutation(3, &mut rng);
            let solver = Solver::new(initial.clone());
            assert_eq!(solver.is_solvable(), parity_solvable(&initial), "{:?}", initial);
            if solver.is_solvable() {
                assert_valid_solution(&solver, &initial);
            } else {
                assert_eq!(solver.moves(), -1);
            }
        }
    }
}
