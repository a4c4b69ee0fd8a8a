//! Insertion sort step generator

use crate::step::{History, Role, Step};
use crate::stepper::StepGenerator;

/// Classic insertion sort with the key displayed separately from its slot.
///
/// While the sorted prefix shifts right, the key is logically held outside
/// the array: its original position keeps showing the key's value with
/// [`Role::Key`] even after a shift has physically overwritten that slot,
/// and every snapshot of the pass carries the key in [`Step::key`] so the
/// renderer can show it beside the array. Once the key is written back the
/// pass closes with an unannotated snapshot and `key` cleared.
pub struct InsertionSort;

impl InsertionSort {
    /// Snapshot of `arr` with the key overlaid at `key_index` and the
    /// element at `shifting`, if any, marked as moving right.
    fn key_snapshot(arr: &[i64], key: i64, key_index: usize, shifting: Option<usize>) -> Step {
        let mut snapshot = Step::plain(arr);
        snapshot.cells[key_index].value = key;
        snapshot.cells[key_index].role = Role::Key;
        if let Some(j) = shifting {
            snapshot.cells[j].role = Role::Shifting;
        }
        snapshot.key = Some(key);
        snapshot
    }
}

impl StepGenerator for InsertionSort {
    fn generate(&self, values: &[i64]) -> History {
        let mut arr = values.to_vec();
        let mut history = History::new();
        history.push(Step::plain(&arr));

        for i in 1..arr.len() {
            let key = arr[i];
            let mut j = i as isize - 1;

            // Pick up the key at index i; its left neighbour is flagged as
            // the shift candidate even when no shift ends up happening
            history.push(Self::key_snapshot(&arr, key, i, Some(i - 1)));

            while j >= 0 && arr[j as usize] > key {
                let ju = j as usize;

                // Compare: key still shown at its original index, arr[j]
                // about to move right
                history.push(Self::key_snapshot(&arr, key, i, Some(ju)));

                // Physical shift, then the raw result (the key display
                // persists across the overwrite)
                arr[ju + 1] = arr[ju];
                let mut shifted = Step::plain(&arr);
                shifted.key = Some(key);
                history.push(shifted);

                j -= 1;
            }

            // Write the key into its settled slot
            let dest = (j + 1) as usize;
            arr[dest] = key;
            history.push(Self::key_snapshot(&arr, key, dest, None));

            // Pass complete, no key displayed
            history.push(Step::plain(&arr));
        }

        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Cell;

    fn cell(value: i64, role: Role) -> Cell {
        Cell { value, role }
    }

    #[test]
    fn test_two_elements_out_of_order() {
        // [2,1]: one pass, one shift
        let history = InsertionSort.generate(&[2, 1]);
        assert_eq!(history.len(), 6);

        // Initial state, no key
        assert_eq!(history.get(0).unwrap(), &Step::plain(&[2, 1]));

        // Key 1 picked up at index 1, left neighbour flagged as shifting
        let picked = history.get(1).unwrap();
        assert_eq!(
            picked.cells,
            vec![cell(2, Role::Shifting), cell(1, Role::Key)]
        );
        assert_eq!(picked.key, Some(1));

        // Compare: 2 marked shifting, key still at index 1
        let compare = history.get(2).unwrap();
        assert_eq!(
            compare.cells,
            vec![cell(2, Role::Shifting), cell(1, Role::Key)]
        );
        assert_eq!(compare.key, Some(1));

        // Post-shift raw array: the 2 now occupies both slots
        let shifted = history.get(3).unwrap();
        assert_eq!(shifted.cells, vec![cell(2, Role::None), cell(2, Role::None)]);
        assert_eq!(shifted.key, Some(1));

        // Key written into index 0
        let inserted = history.get(4).unwrap();
        assert_eq!(
            inserted.cells,
            vec![cell(1, Role::Key), cell(2, Role::None)]
        );
        assert_eq!(inserted.key, Some(1));

        // Settled
        assert_eq!(history.get(5).unwrap(), &Step::plain(&[1, 2]));
    }

    #[test]
    fn test_single_element() {
        let history = InsertionSort.generate(&[4]);
        assert_eq!(history.len(), 1);
        let only = history.get(0).unwrap();
        assert_eq!(only, &Step::plain(&[4]));
        assert_eq!(only.key, None);
    }

    #[test]
    fn test_pickup_flags_left_neighbour() {
        // The pick-up snapshot always marks index i-1 as shifting, even
        // when the key is already in place and no shift follows
        let history = InsertionSort.generate(&[1, 2]);
        assert_eq!(history.len(), 4);
        let picked = history.get(1).unwrap();
        assert_eq!(
            picked.cells,
            vec![cell(1, Role::Shifting), cell(2, Role::Key)]
        );
        assert_eq!(picked.key, Some(2));

        // When a shift does follow, the pick-up snapshot duplicates the
        // first compare snapshot of the loop
        let history = InsertionSort.generate(&[2, 1]);
        assert_eq!(history.get(1), history.get(2));
        assert_eq!(
            history.get(1).unwrap().cells,
            vec![cell(2, Role::Shifting), cell(1, Role::Key)]
        );
    }

    #[test]
    fn test_key_display_survives_overwrite() {
        // [3,1,2]: while 1 shifts past 3, index 1 keeps showing the key
        let history = InsertionSort.generate(&[3, 1, 2]);
        let compare = history.get(2).unwrap();
        assert_eq!(compare.cells[0], cell(3, Role::Shifting));
        assert_eq!(compare.cells[1], cell(1, Role::Key));

        // After the shift the physical array is [3,3,2], key still 1
        let shifted = history.get(3).unwrap();
        assert_eq!(shifted.values(), vec![3, 3, 2]);
        assert_eq!(shifted.key, Some(1));
    }

    #[test]
    fn test_endpoints_are_unannotated() {
        let history = InsertionSort.generate(&[4, 2, 5, 1]);
        assert_eq!(history.get(0).unwrap(), &Step::plain(&[4, 2, 5, 1]));
        let last = history.last().unwrap();
        assert_eq!(last, &Step::plain(&[1, 2, 4, 5]));
        assert_eq!(last.key, None);
    }

    #[test]
    fn test_already_sorted_pass_shape() {
        // Each pass over sorted input: pick-up, insert, settle; no shift steps
        let history = InsertionSort.generate(&[1, 2, 3]);
        assert_eq!(history.len(), 1 + 2 * 3);
        assert_eq!(history.last().unwrap(), &Step::plain(&[1, 2, 3]));
    }
}
