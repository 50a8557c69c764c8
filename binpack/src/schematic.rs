use crate::error::{PackError, Result};

/// Consumes one pick value per element of `items` and returns all items in the order they were picked.
///
/// A pick value `v` in `[0, 1]` selects the element at relative location `v` among the remaining elements:
/// 0 picks from the front, 1 from the back, and 0.5 from the middle.
/// The index is `v * (remaining - 1)`, rounded half to even.
///
/// Surplus pick values are not consumed.
/// Fails with [`PackError::InsufficientPickValues`] if `schema` runs out before all items are picked,
/// and with [`PackError::PickValueOutOfRange`] for a value outside `[0, 1]`.
pub fn schematic_pick<T>(
    items: impl IntoIterator<Item = T>,
    schema: impl IntoIterator<Item = f64>,
) -> Result<Vec<T>> {
    let mut remaining: Vec<T> = items.into_iter().collect();
    let mut schema = schema.into_iter();
    let mut picked = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let value = schema.next().ok_or(PackError::InsufficientPickValues)?;
        picked.push(remaining.remove(pick_index(value, remaining.len())?));
    }
    Ok(picked)
}

fn pick_index(value: f64, n_remaining: usize) -> Result<usize> {
    if !(0.0..=1.0).contains(&value) {
        return Err(PackError::PickValueOutOfRange(value));
    }
    let index = (value * (n_remaining - 1) as f64).round_ties_even() as usize;
    debug_assert!(index < n_remaining);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 5 => 0; "front")]
    #[test_case(1.0, 5 => 4; "back")]
    #[test_case(0.5, 5 => 2; "middle")]
    #[test_case(0.5, 4 => 2; "tie rounds to even upwards")]
    #[test_case(0.125, 5 => 0; "tie rounds to even downwards")]
    #[test_case(0.9, 1 => 0; "single element")]
    fn index_of_pick_value(value: f64, n_remaining: usize) -> usize {
        pick_index(value, n_remaining).unwrap()
    }

    #[test_case(-0.1)]
    #[test_case(1.0001)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn pick_value_out_of_range(value: f64) {
        assert!(matches!(
            pick_index(value, 3),
            Err(PackError::PickValueOutOfRange(_))
        ));
    }

    #[test]
    fn picks_in_schema_order() {
        let picked = schematic_pick(['a', 'b', 'c', 'd'], [1.0, 0.0, 0.6, 0.3]).unwrap();
        assert_eq!(picked, vec!['d', 'a', 'c', 'b']);
    }

    #[test]
    fn surplus_values_are_ignored() {
        let picked = schematic_pick([1, 2], [0.0, 0.0, 7.0]).unwrap();
        assert_eq!(picked, vec![1, 2]);
    }

    #[test]
    fn too_few_values() {
        assert_eq!(
            schematic_pick([1, 2, 3], [0.0, 0.0]),
            Err(PackError::InsufficientPickValues)
        );
    }

    #[test]
    fn nothing_to_pick() {
        let picked = schematic_pick(Vec::<u8>::new(), std::iter::empty()).unwrap();
        assert!(picked.is_empty());
    }
}
