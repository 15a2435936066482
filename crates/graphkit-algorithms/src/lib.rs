pub mod common;
pub mod priority;
pub mod pathfinding;
pub mod topology;

pub use common::{AlgoError, AlgoResult, GraphView, NodeId};
pub use priority::{PriorityQueue, QueueItem};
pub use pathfinding::{shortest_path, PathResult};
pub use topology::topological_sort;
