use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};
use log::{debug, trace};
use rustc_hash::FxHashSet;
use crate::puzzle::Puzzle;
use crate::solvability::is_solvable;
use crate::traits::puzzle::Heuristic;

#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// Upper bound on generated states, the start state included. `None`
    /// searches until the goal is found or the frontier runs dry.
    pub max_states: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// States from the first move through the goal, start excluded.
    Solved(Vec<Puzzle>),
    Unsolvable,
    Exhausted,
    LimitReached,
}

impl Outcome {
    pub fn path(&self) -> Option<&[Puzzle]> {
        match self {
            Outcome::Solved(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<Puzzle>> {
        match self {
            Outcome::Solved(path) => Some(path),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Solved(_) => "solved",
            Outcome::Unsolvable => "unsolvable",
            Outcome::Exhausted => "exhausted",
            Outcome::LimitReached => "limit_reached",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub outcome: Outcome,
    pub states: usize,
    pub elapsed: Duration,
}

struct SearchNode {
    puzzle: Puzzle,
    parent: Option<usize>,
    g: u32,
}

/// Shortest sequence of states leading from `start` to the solved
/// arrangement, or `None` when there is none.
pub fn solve(start: &Puzzle) -> Option<Vec<Puzzle>> {
    solve_with(start, &SolveOptions::default()).outcome.into_path()
}

/// A* over blank slides with the Manhattan heuristic.
///
/// The frontier pops the lowest `f = g + h`. Equal `f` goes to the node
/// with fewer moves taken, then to the one generated first. A state is
/// marked visited when it is generated and is never queued again; with
/// Manhattan distance the `g` tie-break keeps the first route to every
/// state a shortest one. Breaking on `g` before generation order is a
/// deliberate refinement of plain first-in-first-out ties.
pub fn solve_with(start: &Puzzle, options: &SolveOptions) -> SolveResult {
    const STEP: u32 = 1;
    let started = Instant::now();

    if !is_solvable(start) {
        debug!("{} fails the parity check, not searching", start.serialized());
        return SolveResult {
            outcome: Outcome::Unsolvable,
            states: 0,
            elapsed: started.elapsed(),
        };
    }

    let solved_puzzle = Puzzle::solved(start.size());

    // Indexes into `nodes` double as generation order in the heap.
    let mut nodes: Vec<SearchNode> = vec![SearchNode {
        puzzle: start.clone(),
        parent: None,
        g: 0,
    }];
    let mut open_list = BinaryHeap::<(Reverse<u32>, Reverse<u32>, Reverse<usize>)>::new();
    let mut closed_list = FxHashSet::default();

    closed_list.insert(start.clone());
    open_list.push((Reverse(start.get_heuristic()), Reverse(0), Reverse(0)));

    while let Some((Reverse(f), Reverse(g), Reverse(idx))) = open_list.pop() {
        trace!("expanding node {} with f={} g={}", idx, f, g);

        if nodes[idx].puzzle.is_solved(&solved_puzzle) {
            let path = reconstruct_path(&nodes, idx);
            debug!(
                "solved in {} moves, states generated: {}, frontier left: {}",
                path.len(),
                nodes.len(),
                open_list.len()
            );
            return SolveResult {
                outcome: Outcome::Solved(path),
                states: nodes.len(),
                elapsed: started.elapsed(),
            };
        }

        let new_cost = g + STEP;
        for neighbour in nodes[idx].puzzle.generate_successors() {
            if closed_list.contains(&neighbour) {
                continue;
            }

            if options.max_states.is_some_and(|limit| nodes.len() >= limit) {
                debug!("gave up after generating {} states", nodes.len());
                return SolveResult {
                    outcome: Outcome::LimitReached,
                    states: nodes.len(),
                    elapsed: started.elapsed(),
                };
            }

            closed_list.insert(neighbour.clone());
            let heuristic = new_cost + neighbour.get_heuristic();
            open_list.push((Reverse(heuristic), Reverse(new_cost), Reverse(nodes.len())));
            nodes.push(SearchNode {
                puzzle: neighbour,
                parent: Some(idx),
                g: new_cost,
            });
        }
    }

    debug!("frontier exhausted after generating {} states", nodes.len());
    SolveResult {
        outcome: Outcome::Exhausted,
        states: nodes.len(),
        elapsed: started.elapsed(),
    }
}

fn reconstruct_path(nodes: &[SearchNode], goal_idx: usize) -> Vec<Puzzle> {
    let mut path = Vec::with_capacity(nodes[goal_idx].g as usize);
    let mut current = goal_idx;

    while let Some(parent) = nodes[current].parent {
        path.push(nodes[current].puzzle.clone());
        current = parent;
    }

    path.reverse();
    path
}
