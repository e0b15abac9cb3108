use std::collections::HashMap;

use super::graph::DependencyGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done(u32),
}

struct Frame<'a> {
    id: &'a str,
    next_pred: usize,
    best: u32,
}

/// Depth of every activity: 1 for sources, else 1 + the deepest predecessor.
///
/// Computed with an explicit stack, so deep chains cannot overflow the call
/// stack. A predecessor that is still on the stack when revisited closes a
/// cycle; it contributes nothing and the back edge is recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Levels {
    levels: HashMap<String, u32>,
    max_level: u32,
    cycles: Vec<(String, String)>,
}

impl Levels {
    pub fn compute(graph: &DependencyGraph) -> Self {
        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(graph.len());
        let mut cycles = Vec::new();

        for root in graph.activities() {
            if marks.contains_key(root.id.as_str()) {
                continue;
            }
            marks.insert(root.id.as_str(), Mark::InProgress);
            let mut stack = vec![Frame {
                id: root.id.as_str(),
                next_pred: 0,
                best: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                let preds = graph.predecessors_of(frame.id);
                let Some(pred) = preds.get(frame.next_pred) else {
                    let level = frame.best + 1;
                    let id = frame.id;
                    stack.pop();
                    marks.insert(id, Mark::Done(level));
                    if let Some(parent) = stack.last_mut() {
                        parent.best = parent.best.max(level);
                    }
                    continue;
                };
                frame.next_pred += 1;

                match marks.get(pred.as_str()) {
                    Some(Mark::Done(level)) => frame.best = frame.best.max(*level),
                    Some(Mark::InProgress) => {
                        tracing::warn!(activity = %frame.id, predecessor = %pred, "cycle in predecessor references");
                        cycles.push((frame.id.to_string(), pred.clone()));
                    }
                    None if graph.contains(pred) => {
                        marks.insert(pred.as_str(), Mark::InProgress);
                        stack.push(Frame {
                            id: pred.as_str(),
                            next_pred: 0,
                            best: 0,
                        });
                    }
                    // Dangling reference: no constraint.
                    None => {}
                }
            }
        }

        let levels: HashMap<String, u32> = marks
            .into_iter()
            .filter_map(|(id, mark)| match mark {
                Mark::Done(level) => Some((id.to_string(), level)),
                Mark::InProgress => None,
            })
            .collect();
        let max_level = levels.values().copied().max().unwrap_or(0);

        Self {
            levels,
            max_level,
            cycles,
        }
    }

    pub fn level(&self, id: &str) -> Option<u32> {
        self.levels.get(id).copied()
    }

    /// Deepest activity level, 0 for an empty project.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn start_level(&self) -> u32 {
        0
    }

    pub fn finish_level(&self) -> u32 {
        self.max_level + 1
    }

    /// `(activity, predecessor)` back edges found while leveling.
    pub fn cycles(&self) -> &[(String, String)] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}
