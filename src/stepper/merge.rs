//! Merge sort step generator

use crate::step::{History, Step};
use crate::stepper::StepGenerator;

/// Iterative bottom-up merge sort.
///
/// Runs of width 1, 2, 4, … are merged pairwise in place, and one
/// unannotated snapshot of the whole array is recorded after each completed
/// merge. Unlike the other two generators there is no per-comparison
/// annotation; the history shows only the coarse post-merge states. The
/// merge is stable: on ties the left run's element is taken first.
pub struct MergeSort;

/// Merge the sorted runs `[left, mid)` and `[mid, right)` of `arr` in place.
fn merge(arr: &mut [i64], left: usize, mid: usize, right: usize) {
    let left_run = arr[left..mid].to_vec();
    let right_run = arr[mid..right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;
    while i < left_run.len() && j < right_run.len() {
        if left_run[i] <= right_run[j] {
            arr[k] = left_run[i];
            i += 1;
        } else {
            arr[k] = right_run[j];
            j += 1;
        }
        k += 1;
    }
    while i < left_run.len() {
        arr[k] = left_run[i];
        i += 1;
        k += 1;
    }
    while j < right_run.len() {
        arr[k] = right_run[j];
        j += 1;
        k += 1;
    }
}

impl StepGenerator for MergeSort {
    fn generate(&self, values: &[i64]) -> History {
        let mut arr = values.to_vec();
        let mut history = History::new();
        history.push(Step::plain(&arr));

        let n = arr.len();
        let mut width = 1;
        while width < n {
            let mut left = 0;
            while left < n {
                let mid = (left + width).min(n);
                let right = (left + 2 * width).min(n);
                merge(&mut arr, left, mid, right);
                history.push(Step::plain(&arr));
                left += 2 * width;
            }
            width *= 2;
        }

        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_sorted_four() {
        // Width 1 merges two pairs, width 2 merges the halves
        let history = MergeSort.generate(&[4, 3, 2, 1]);
        assert_eq!(history.len(), 4);
        assert_eq!(history.get(0).unwrap(), &Step::plain(&[4, 3, 2, 1]));
        assert_eq!(history.get(1).unwrap(), &Step::plain(&[3, 4, 2, 1]));
        assert_eq!(history.get(2).unwrap(), &Step::plain(&[3, 4, 1, 2]));
        assert_eq!(history.get(3).unwrap(), &Step::plain(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_single_element() {
        let history = MergeSort.generate(&[9]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap(), &Step::plain(&[9]));
    }

    #[test]
    fn test_odd_length_tail_run() {
        // n=5: the lone tail element merges only in the final round
        let history = MergeSort.generate(&[5, 4, 3, 2, 1]);
        assert_eq!(history.last().unwrap(), &Step::plain(&[1, 2, 3, 4, 5]));
        // width 1: merges at 0,2,4; width 2: merges at 0,4; width 4: merge at 0
        assert_eq!(history.len(), 1 + 3 + 2 + 1);
    }

    #[test]
    fn test_no_roles_ever_set() {
        let history = MergeSort.generate(&[2, 1, 4, 3]);
        for step in history.iter() {
            assert!(step
                .cells
                .iter()
                .all(|c| c.role == crate::step::Role::None));
            assert_eq!(step.key, None);
        }
    }
}
