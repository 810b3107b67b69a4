//! Best-first search from the grid's source to its destination.
//!
//! Every run starts by resetting all cells, then repeatedly expands the frontier entry with
//! the smallest global cost. A cell may sit in the frontier several times; entries whose cell
//! has already been visited are stale and get skipped. The result of a run is stored in the
//! cells themselves as parent links, which [build_path](crate::path::build_path) follows back.
use crate::euclidean_distance;
use crate::grid::Grid;
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// How the frontier is stored and ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FrontierKind {
    /// A list that is stably sorted by descending global cost before every pop. Entries refer
    /// to cells, so a cost update is seen by every entry of that cell. Among equal costs the
    /// most recently inserted entry is expanded first.
    #[default]
    SortedVec,
    /// A binary heap keyed by the global cost at push time. Same tie-break as
    /// [SortedVec](FrontierKind::SortedVec) on the pushed keys.
    BinaryHeap,
}

/// When an unvisited open neighbour is appended to the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PushPolicy {
    /// Every time it is examined, whether or not its cost improved.
    #[default]
    Always,
    /// Only when its local cost improved.
    OnImprovement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub frontier: FrontierKind,
    pub push_policy: PushPolicy,
    /// Stop as soon as the destination is expanded instead of draining the frontier. Costs
    /// are Euclidean and the heuristic is consistent, so this does not change the path.
    pub early_exit: bool,
}

/// Counters describing a finished search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Number of cells marked visited.
    pub expanded: usize,
    /// Number of frontier insertions, including the source.
    pub pushed: usize,
    pub peak_frontier: usize,
    /// Whether the destination was visited.
    pub reached: bool,
}

struct SmallestCostHolder {
    estimated_cost: f64,
    sequence: usize,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: smallest estimate first, then the latest insertion
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => self.sequence.cmp(&other.sequence),
            s => s,
        }
    }
}

/// The frontier of discovered but not yet finalised cells.
enum Frontier {
    Sorted(Vec<usize>),
    Heap {
        heap: BinaryHeap<SmallestCostHolder>,
        sequence: usize,
    },
}

impl Frontier {
    fn new(kind: FrontierKind) -> Frontier {
        match kind {
            FrontierKind::SortedVec => Frontier::Sorted(Vec::new()),
            FrontierKind::BinaryHeap => Frontier::Heap {
                heap: BinaryHeap::new(),
                sequence: 0,
            },
        }
    }

    fn len(&self) -> usize {
        match self {
            Frontier::Sorted(entries) => entries.len(),
            Frontier::Heap { heap, .. } => heap.len(),
        }
    }

    fn push(&mut self, grid: &Grid, index: usize) {
        match self {
            Frontier::Sorted(entries) => entries.push(index),
            Frontier::Heap { heap, sequence } => {
                heap.push(SmallestCostHolder {
                    estimated_cost: grid.cell(index).global_cost,
                    sequence: *sequence,
                    index,
                });
                *sequence += 1;
            }
        }
    }

    /// Removes and returns the unvisited entry with the smallest global cost, discarding
    /// stale entries on the way. [None] once no unvisited entry is left.
    fn pop(&mut self, grid: &Grid) -> Option<usize> {
        match self {
            Frontier::Sorted(entries) => {
                // Stable, so equal costs keep their insertion order and the last one wins
                entries.sort_by(|a, b| {
                    grid.cell(*b)
                        .global_cost
                        .total_cmp(&grid.cell(*a).global_cost)
                });
                while entries.last().map_or(false, |&ix| grid.cell(ix).visited) {
                    entries.pop();
                }
                entries.pop()
            }
            Frontier::Heap { heap, .. } => {
                while let Some(SmallestCostHolder { index, .. }) = heap.pop() {
                    if !grid.cell(index).visited {
                        return Some(index);
                    }
                }
                None
            }
        }
    }
}

/// Heuristic estimate from the cell at `from` to the cell at `to`.
pub(crate) fn heuristic(grid: &Grid, from: usize, to: usize) -> f64 {
    euclidean_distance(grid.cell(from).center, grid.cell(to).center)
}

/// Runs a full search over `grid`, leaving parent links, costs and visited flags in its
/// cells. Both endpoints are guaranteed to be in bounds by [Grid].
pub fn search(grid: &mut Grid, config: &SearchConfig) -> SearchStats {
    grid.reset();
    let mut stats = SearchStats::default();
    let (Some(start), Some(end)) = (
        grid.index_of(grid.source()),
        grid.index_of(grid.destination()),
    ) else {
        return stats;
    };

    let h = heuristic(grid, start, end);
    let source = &mut grid.cells_mut()[start];
    source.local_cost = 0.0;
    source.global_cost = h;

    let mut frontier = Frontier::new(config.frontier);
    frontier.push(grid, start);
    stats.pushed = 1;
    stats.peak_frontier = 1;

    while let Some(current) = frontier.pop(grid) {
        grid.cells_mut()[current].visited = true;
        stats.expanded += 1;
        if current == end {
            stats.reached = true;
            if config.early_exit {
                break;
            }
        }

        let current_cost = grid.cell(current).local_cost;
        for n in grid.neighbour_indices(current) {
            let neighbour = grid.cell(n);
            if neighbour.obstacle || neighbour.visited {
                continue;
            }
            let candidate = current_cost + heuristic(grid, current, n);
            let improved = candidate < neighbour.local_cost;
            if improved {
                let global_cost = candidate + heuristic(grid, n, end);
                let neighbour = &mut grid.cells_mut()[n];
                neighbour.parent = Some(current);
                neighbour.local_cost = candidate;
                neighbour.global_cost = global_cost;
            }
            if improved || config.push_policy == PushPolicy::Always {
                frontier.push(grid, n);
                stats.pushed += 1;
            }
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }
    debug!(
        "Search from {} to {}: {} expanded, {} pushed, peak frontier {}, reached: {}",
        grid.source(),
        grid.destination(),
        stats.expanded,
        stats.pushed,
        stats.peak_frontier,
        stats.reached
    );
    stats
}
