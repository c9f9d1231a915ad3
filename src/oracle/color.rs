//! Per-call node state for the two-coloring traversal.

use serde::{Deserialize, Serialize};

/// Color assigned to a node during one oracle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Uncolored,
    A,
    B,
}

impl Color {
    /// The color a freshly discovered neighbor must receive.
    ///
    /// `Uncolored` has no opposite and maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Color::Uncolored => Color::Uncolored,
            Color::A => Color::B,
            Color::B => Color::A,
        }
    }

    pub fn is_colored(self) -> bool {
        self != Color::Uncolored
    }
}

/// The edge through which the search first reached a node, together with
/// the node it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival<N, E> {
    pub edge: E,
    pub from: N,
}

/// Dense color and arrival-edge maps indexed by `NodeIndexable::to_index`.
#[derive(Debug, Clone)]
pub struct TraversalState<N, E> {
    colors: Vec<Color>,
    arrivals: Vec<Option<Arrival<N, E>>>,
}

impl<N, E> Default for TraversalState<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> TraversalState<N, E> {
    pub fn new() -> Self {
        Self {
            colors: Vec::new(),
            arrivals: Vec::new(),
        }
    }

    /// Forget everything from a previous call and size the maps for a graph
    /// whose node indices are below `node_bound`.
    pub fn reset(&mut self, node_bound: usize) {
        self.colors.clear();
        self.colors.resize(node_bound, Color::Uncolored);
        self.arrivals.clear();
        self.arrivals.resize_with(node_bound, || None);
    }

    pub fn color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or_default()
    }

    pub fn set_color(&mut self, index: usize, color: Color) {
        if index >= self.colors.len() {
            self.colors.resize(index + 1, Color::Uncolored);
        }
        self.colors[index] = color;
    }

    pub fn arrival(&self, index: usize) -> Option<&Arrival<N, E>> {
        self.arrivals.get(index).and_then(Option::as_ref)
    }

    pub fn set_arrival(&mut self, index: usize, arrival: Arrival<N, E>) {
        if index >= self.arrivals.len() {
            self.arrivals.resize_with(index + 1, || None);
        }
        self.arrivals[index] = Some(arrival);
    }

    pub fn colored_count(&self) -> usize {
        self.colors.iter().filter(|c| c.is_colored()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_colors() {
        assert_eq!(Color::A.opposite(), Color::B);
        assert_eq!(Color::B.opposite(), Color::A);
        assert_eq!(Color::Uncolored.opposite(), Color::Uncolored);
    }

    #[test]
    fn test_reset_clears_previous_call() {
        let mut state: TraversalState<u32, u32> = TraversalState::new();
        state.reset(3);
        state.set_color(1, Color::B);
        state.set_arrival(1, Arrival { edge: 7, from: 0 });
        assert_eq!(state.colored_count(), 1);

        state.reset(5);
        assert_eq!(state.colored_count(), 0);
        assert_eq!(state.color(1), Color::Uncolored);
        assert!(state.arrival(1).is_none());
        assert_eq!(state.color(4), Color::Uncolored);
    }

    #[test]
    fn test_out_of_range_reads_are_uncolored() {
        let state: TraversalState<u32, u32> = TraversalState::new();
        assert_eq!(state.color(10), Color::Uncolored);
        assert!(state.arrival(10).is_none());
    }
}
