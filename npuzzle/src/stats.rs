use std::ops::AddAssign;

/// One of the two searches run by the [`Solver`](crate::solver::Solver).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lane {
    /// Search for the solution of the initial board.
    Main,
    /// Search for the solution of the twin of the initial board.
    Twin
}

/// Search statistic collector.
/// It collects data during A* search.
pub trait SearchStatsCollector {
    /// Called for each search node taken from the queue of `lane` and expanded.
    #[inline(always)] fn expanded(&mut self, _lane: Lane) { }
    /// Called for each search node inserted into the queue of `lane`.
    #[inline(always)] fn enqueued(&mut self, _lane: Lane) { }
}

/// Search statistic collector that ignore all events.
impl SearchStatsCollector for () {}

impl SearchStatsCollector for u64 {
    #[inline(always)] fn expanded(&mut self, _lane: Lane) { *self += 1; }
    #[inline(always)] fn enqueued(&mut self, _lane: Lane) { *self += 1; }
}

/// Statistics of a single lane.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct LaneStats {
    pub expanded: u64,
    pub enqueued: u64
}

impl AddAssign for LaneStats {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.enqueued += rhs.enqueued;
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchAllStats {
    pub main: LaneStats,
    pub twin: LaneStats
}

impl SearchAllStats {
    #[inline] pub fn lane(&mut self, lane: Lane) -> &mut LaneStats {
        match lane {
            Lane::Main => &mut self.main,
            Lane::Twin => &mut self.twin,
        }
    }

    /// Returns the number of nodes expanded by both lanes.
    pub fn visits(&self) -> u64 { self.main.expanded + self.twin.expanded }
}

impl AddAssign for SearchAllStats {
    fn add_assign(&mut self, rhs: Self) {
        self.main += rhs.main;
        self.twin += rhs.twin;
    }
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn expanded(&mut self, lane: Lane) { self.lane(lane).expanded += 1; }
    #[inline(always)] fn enqueued(&mut self, lane: Lane) { self.lane(lane).enqueued += 1; }
}
