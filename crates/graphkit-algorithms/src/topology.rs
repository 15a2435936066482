//! Topological ordering
//!
//! Depth-first search with three-colour marking. The recursion is unrolled onto an
//! explicit stack of (node, next-successor) frames so long chains cannot exhaust
//! the call stack.

use super::common::{AlgoError, AlgoResult, GraphView, NodeId};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Topological sort
///
/// Returns every node of the view such that each edge points from an earlier to a
/// later node. With `deterministic` set, start nodes are tried in ascending
/// `NodeId` order, so the same view always yields the same sequence; otherwise
/// they are tried in view index order. Successors are always visited in stored
/// order.
///
/// Fails with [`AlgoError::NotADag`] on the first back edge found. No partial
/// ordering is returned.
pub fn topological_sort(view: &GraphView, deterministic: bool) -> AlgoResult<Vec<NodeId>> {
    let n = view.node_count;
    let mut starts: Vec<usize> = (0..n).collect();
    if deterministic {
        starts.sort_unstable_by_key(|&idx| view.index_to_node[idx]);
    }

    let mut marks = vec![Mark::Unvisited; n];
    // Post-order finish sequence; reversed at the end.
    let mut finished = Vec::with_capacity(n);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in starts {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::InProgress;
        stack.push((start, 0));

        while let Some(&(node, cursor)) = stack.last() {
            match view.successors(node).get(cursor) {
                Some(&next) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 += 1;
                    }
                    match marks[next] {
                        Mark::Unvisited => {
                            marks[next] = Mark::InProgress;
                            stack.push((next, 0));
                        }
                        Mark::InProgress => {
                            let culprit = view.index_to_node[next];
                            warn!(node = culprit, "cycle detected during topological sort");
                            return Err(AlgoError::NotADag { node: culprit });
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[node] = Mark::Done;
                    finished.push(view.index_to_node[node]);
                    stack.pop();
                }
            }
        }
    }

    finished.reverse();
    debug!(nodes = n, deterministic, "topological sort complete");
    Ok(finished)
}
