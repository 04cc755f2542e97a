use std::{cmp::Reverse, collections::BinaryHeap};

use super::{open_neighbors, reconstruct_path};
use crate::maze::{Coord, Grid, Maze};
use crate::trace::{Step, Trace};

/// Entry of the priority queue. Ordered by distance, then by insertion sequence, so that
/// cells at equal distance come out in the order they were queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueuedCell {
    distance: usize,
    sequence: usize,
    coord: Coord,
}

/// Dijkstra's algorithm with a uniform edge weight of 1.
pub(super) fn solve_dijkstra(maze: &Maze, start: Coord, goal: Coord) -> Trace {
    let (rows, cols) = (maze.rows(), maze.cols());
    let mut parents: Grid<Option<Coord>> = Grid::new(rows, cols, None);
    let mut distances = Grid::new(rows, cols, usize::MAX);
    let mut settled = Grid::new(rows, cols, false);
    let mut visited = Vec::new();
    let mut reached = false;

    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<QueuedCell>> = BinaryHeap::new();
    let mut sequence = 0;
    distances[start] = 0;
    pq.push(Reverse(QueuedCell {
        distance: 0,
        sequence,
        coord: start,
    }));

    while let Some(Reverse(QueuedCell { coord: current, .. })) = pq.pop() {
        // Stale entry for a cell that was already popped with a shorter distance
        if settled[current] {
            continue;
        }
        settled[current] = true;
        visited.push(Step::visited(current));
        if current == goal {
            reached = true;
            break;
        }

        let new_distance = distances[current] + 1;
        for neighbor in open_neighbors(maze, current) {
            if new_distance < distances[neighbor] {
                distances[neighbor] = new_distance;
                parents[neighbor] = Some(current);
                sequence += 1;
                pq.push(Reverse(QueuedCell {
                    distance: new_distance,
                    sequence,
                    coord: neighbor,
                }));
            }
        }
    }

    let path = reconstruct_path(&parents, start, goal, reached);
    Trace::new(visited, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::fixtures::{coords, sample_maze};

    #[test]
    fn test_dijkstra_trace_on_sample() {
        let maze = sample_maze();
        let trace = solve_dijkstra(&maze, Coord::new(0, 0), Coord::new(2, 2));
        // (1,1) and (2,2) are both at distance 4, (1,1) was queued first
        assert_eq!(
            coords(trace.visited()),
            vec![(0, 0), (1, 0), (0, 1), (2, 0), (2, 1), (1, 1), (2, 2)]
        );
        assert_eq!(
            coords(trace.path()),
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_queue_order_breaks_ties_by_sequence() {
        let mut pq = BinaryHeap::new();
        for (sequence, col) in [(0, 2), (1, 0), (2, 1)] {
            pq.push(Reverse(QueuedCell {
                distance: 3,
                sequence,
                coord: Coord::new(0, col),
            }));
        }
        pq.push(Reverse(QueuedCell {
            distance: 1,
            sequence: 3,
            coord: Coord::new(5, 5),
        }));
        let order = std::iter::from_fn(|| pq.pop())
            .map(|Reverse(q)| q.coord)
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                Coord::new(5, 5),
                Coord::new(0, 2),
                Coord::new(0, 0),
                Coord::new(0, 1)
            ]
        );
    }
}
