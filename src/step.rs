//! Snapshot model shared by all step generators
//!
//! Every snapshot ([`Step`]) records the full working array at one instant.
//! Each position carries a [`Role`] describing why it is highlighted, with
//! [`Role::None`] as the default, so the renderer never has to branch on
//! value shape. Steps are immutable once pushed into a [`History`].

/// Why a position is highlighted in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Not highlighted
    #[default]
    None,
    /// One of the two adjacent elements being compared (bubble sort)
    Comparing,
    /// An element being shifted, or compared against the key as a shift
    /// candidate (insertion sort)
    Shifting,
    /// The element currently held out of the array as the insertion key
    Key,
}

/// One annotated position in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: i64,
    pub role: Role,
}

impl Cell {
    pub fn plain(value: i64) -> Self {
        Cell {
            value,
            role: Role::None,
        }
    }
}

/// Snapshot of the working array at one instant
///
/// `key` is used by insertion sort only: while an element is being inserted
/// it is logically held outside the array, and its value is shown separately
/// from whatever currently occupies its slot. `None` means no key is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub cells: Vec<Cell>,
    pub key: Option<i64>,
}

impl Step {
    /// Snapshot with every role [`Role::None`] and no active key
    pub fn plain(values: &[i64]) -> Self {
        Step {
            cells: values.iter().map(|&v| Cell::plain(v)).collect(),
            key: None,
        }
    }

    /// Values of this snapshot stripped of their roles
    pub fn values(&self) -> Vec<i64> {
        self.cells.iter().map(|c| c.value).collect()
    }
}

/// The complete, ordered list of snapshots for one algorithm run
///
/// Append-only during generation, read-only afterwards. The first step is
/// always the unsorted input with no roles set; the last is the ascending
/// sorted sequence with no roles set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    steps: Vec<Step>,
}

impl History {
    pub fn new() -> Self {
        History { steps: Vec::new() }
    }

    /// Append a snapshot
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}
