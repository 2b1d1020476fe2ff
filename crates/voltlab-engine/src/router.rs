//! A* Router
//!
//! This module implements an A* search for routing a single wire across the
//! lab grid. Moves are orthogonal with unit cost and the Manhattan distance is
//! the heuristic. Occupied cells are obstacles except for the start and end
//! cells, which are usually the cells of the components being connected.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::geometry::GridPoint;
use crate::grid::Grid;

/// A node in the A* search
#[derive(Debug, Clone, PartialEq, Eq)]
struct AStarNode {
    cell: GridPoint,
    g_cost: u32, // Cost from start
    h_cost: u32, // Heuristic cost to goal
    seq: u64,    // Push order, breaks remaining ties
}

impl AStarNode {
    fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap: lowest f, then lowest h, then oldest
        other
            .f_cost()
            .cmp(&self.f_cost())
            .then_with(|| other.h_cost.cmp(&self.h_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Router configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Upper bound on expanded nodes per search. `None` allows the whole grid.
    pub max_expansions: Option<usize>,
}

/// A* Router
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Routes from `start` to `end`, always returning something drawable.
    ///
    /// When the search is exhausted (or either endpoint is off the grid) the
    /// L-shaped [`fallback_path`] is returned instead.
    pub fn find_path(&self, grid: &Grid, start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
        if !grid.contains(start) || !grid.contains(end) {
            debug!("Routing endpoint off grid ({start} -> {end}), using fallback");
            return fallback_path(start, end);
        }

        match self.search(grid, start, end) {
            Some(path) => {
                trace!("Routed {start} -> {end} in {} steps", path.len() - 1);
                path
            }
            None => {
                debug!("No route found {start} -> {end}, using fallback");
                fallback_path(start, end)
            }
        }
    }

    /// Find a path between two cells using A*
    ///
    /// Returns `None` when the goal is unreachable or the expansion budget runs out.
    pub fn search(&self, grid: &Grid, start: GridPoint, goal: GridPoint) -> Option<Vec<GridPoint>> {
        let budget = self
            .config
            .max_expansions
            .unwrap_or(grid.width() as usize * grid.height() as usize);

        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<GridPoint, GridPoint> = HashMap::new();
        let mut g_scores: HashMap<GridPoint, u32> = HashMap::new();
        let mut seq = 0u64;

        g_scores.insert(start, 0);
        open_set.push(AStarNode {
            cell: start,
            g_cost: 0,
            h_cost: heuristic(start, goal),
            seq,
        });

        while let Some(current) = open_set.pop() {
            if current.cell == goal {
                return Some(reconstruct_path(&came_from, current.cell));
            }

            if !closed_set.insert(current.cell) {
                continue;
            }

            if closed_set.len() > budget {
                debug!("Router gave up after {budget} expansions");
                return None;
            }

            for neighbor in self.passable_neighbors(grid, current.cell, start, goal) {
                if closed_set.contains(&neighbor) {
                    continue;
                }

                let tentative_g_score = current.g_cost + 1;

                if tentative_g_score < *g_scores.get(&neighbor).unwrap_or(&u32::MAX) {
                    came_from.insert(neighbor, current.cell);
                    g_scores.insert(neighbor, tentative_g_score);

                    seq += 1;
                    open_set.push(AStarNode {
                        cell: neighbor,
                        g_cost: tentative_g_score,
                        h_cost: heuristic(neighbor, goal),
                        seq,
                    });
                }
            }
        }

        None // No path found
    }

    /// In-bounds orthogonal neighbours that are not blocked. The start and
    /// goal cells are always passable.
    fn passable_neighbors<'g>(
        &self,
        grid: &'g Grid,
        cell: GridPoint,
        start: GridPoint,
        goal: GridPoint,
    ) -> impl Iterator<Item = GridPoint> + 'g {
        cell.neighbors().into_iter().filter(move |&n| {
            grid.contains(n) && (n == start || n == goal || !grid.is_obstacle(n))
        })
    }
}

/// Heuristic function (Manhattan distance)
fn heuristic(a: GridPoint, b: GridPoint) -> u32 {
    a.manhattan(b)
}

/// Reconstruct path from came_from map, start to goal inclusive
fn reconstruct_path(came_from: &HashMap<GridPoint, GridPoint>, mut current: GridPoint) -> Vec<GridPoint> {
    let mut path = vec![current];

    while let Some(&parent) = came_from.get(&current) {
        current = parent;
        path.push(current);
    }

    path.reverse();
    path
}

/// Trivial L-shaped route used when the search cannot produce one.
pub fn fallback_path(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    vec![start, GridPoint::new(end.x, start.y), end]
}
