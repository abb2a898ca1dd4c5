//! Visitation events emitted while the graph is being built.

/// Receives node and edge discoveries as the builder walks the dependency relation.
///
/// Node events may repeat for the same package (once per call site that reaches it);
/// implementations are expected to deduplicate.
pub trait GraphObserver {
    fn on_node(&mut self, name: &str);
    fn on_edge(&mut self, from: &str, to: &str);
}

/// Observer that ignores every event.
impl GraphObserver for () {
    fn on_node(&mut self, _name: &str) {}
    fn on_edge(&mut self, _from: &str, _to: &str) {}
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent {
    Node(String),
    Edge(String, String),
}

/// Observer that keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<GraphEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct node names in first-seen order.
    pub fn nodes(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for e in &self.events {
            if let GraphEvent::Node(n) = e {
                if !seen.contains(&n.as_str()) {
                    seen.push(n.as_str());
                }
            }
        }
        seen
    }

    /// Every edge event, including repeats.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GraphEvent::Edge(a, b) => Some((a.as_str(), b.as_str())),
                GraphEvent::Node(_) => None,
            })
            .collect()
    }
}

impl GraphObserver for EventLog {
    fn on_node(&mut self, name: &str) {
        self.events.push(GraphEvent::Node(name.to_string()));
    }

    fn on_edge(&mut self, from: &str, to: &str) {
        self.events
            .push(GraphEvent::Edge(from.to_string(), to.to_string()));
    }
}
