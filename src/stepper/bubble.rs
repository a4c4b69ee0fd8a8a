//! Bubble sort step generator

use crate::step::{History, Role, Step};
use crate::stepper::StepGenerator;

/// Classic adjacent-swap bubble sort.
///
/// Runs the full `n-1` outer passes with no early-exit optimization, so the
/// history shows every comparison even after the array is already sorted.
/// Each inner step pushes a snapshot with the two compared positions marked
/// [`Role::Comparing`]; when they swap, the post-swap array is pushed as a
/// second, unannotated snapshot.
pub struct BubbleSort;

impl StepGenerator for BubbleSort {
    fn generate(&self, values: &[i64]) -> History {
        let mut arr = values.to_vec();
        let mut history = History::new();
        history.push(Step::plain(&arr));

        let n = arr.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - 1 - i {
                let mut snapshot = Step::plain(&arr);
                snapshot.cells[j].role = Role::Comparing;
                snapshot.cells[j + 1].role = Role::Comparing;
                history.push(snapshot);

                if arr[j] > arr[j + 1] {
                    arr.swap(j, j + 1);
                    history.push(Step::plain(&arr));
                }
            }
        }

        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Cell;

    #[test]
    fn test_two_elements_out_of_order() {
        // [3,1]: initial, one comparison, one post-swap snapshot
        let history = BubbleSort.generate(&[3, 1]);
        assert_eq!(history.len(), 3);

        assert_eq!(history.get(0).unwrap(), &Step::plain(&[3, 1]));

        let compare = history.get(1).unwrap();
        assert_eq!(
            compare.cells,
            vec![
                Cell {
                    value: 3,
                    role: Role::Comparing
                },
                Cell {
                    value: 1,
                    role: Role::Comparing
                },
            ]
        );
        assert_eq!(compare.key, None);

        assert_eq!(history.get(2).unwrap(), &Step::plain(&[1, 3]));
    }

    #[test]
    fn test_sorted_input_still_runs_all_passes() {
        // No early exit: n=3 sorted input still records 3 comparisons
        let history = BubbleSort.generate(&[1, 2, 3]);
        assert_eq!(history.len(), 1 + 3);
        assert_eq!(history.last().unwrap(), &Step::plain(&[1, 2, 3]));
    }

    #[test]
    fn test_single_element() {
        let history = BubbleSort.generate(&[7]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap(), &Step::plain(&[7]));
    }

    #[test]
    fn test_endpoints_are_unannotated() {
        let history = BubbleSort.generate(&[5, 2, 9, 1]);
        assert_eq!(history.get(0).unwrap(), &Step::plain(&[5, 2, 9, 1]));
        assert_eq!(history.last().unwrap(), &Step::plain(&[1, 2, 5, 9]));
    }

    #[test]
    fn test_reverse_sorted_step_count() {
        // Worst case: every comparison swaps, so 2 snapshots per inner step
        let history = BubbleSort.generate(&[3, 2, 1]);
        assert_eq!(history.len(), 1 + 2 * 3);
        assert_eq!(history.last().unwrap(), &Step::plain(&[1, 2, 3]));
    }
}
