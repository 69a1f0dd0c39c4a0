use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};
use serde_json::Value;

use crate::{
    cmp::{self, ScalarKey},
    comparator::{values, Comparator},
    paths::Location,
    result::{FailureKind, Recorder},
};

pub(crate) fn compare_arrays<C: Comparator + ?Sized>(
    comparator: &C,
    path: &Location,
    expected: &[Value],
    actual: &[Value],
    recorder: &mut Recorder,
) {
    if comparator.mode().has_strict_order() {
        compare_ordered(comparator, path, expected, actual, recorder);
    } else {
        compare_unordered(comparator, path, expected, actual, recorder);
    }
}

/// Position-by-position comparison. Mismatched lengths are fatal for the
/// array (no index-wise diff would be meaningful), but element mismatches
/// keep accumulating across indexes.
fn compare_ordered<C: Comparator + ?Sized>(
    comparator: &C,
    path: &Location,
    expected: &[Value],
    actual: &[Value],
    recorder: &mut Recorder,
) {
    if expected.len() != actual.len() {
        recorder.record_length_mismatch(path, expected.len(), actual.len());
        return;
    }
    for (index, (expected_item, actual_item)) in expected.iter().zip(actual).enumerate() {
        let element = path.join(index);
        // A positional scalar inequality whose value does occur elsewhere in
        // the actual array is an ordering problem, not a value problem.
        if comparator.override_for(&element).is_none()
            && cmp::is_scalar(expected_item)
            && cmp::is_scalar(actual_item)
            && !cmp::equal_values(expected_item, actual_item)
        {
            let kind = if actual
                .iter()
                .any(|candidate| cmp::equal_values(expected_item, candidate))
            {
                FailureKind::ArrayOrderMismatch
            } else {
                FailureKind::ValueMismatch
            };
            recorder.record_mismatch(kind, &element, expected_item, actual_item);
        } else {
            values::compare_values(comparator, &element, expected_item, actual_item, recorder);
        }
    }
}

/// Content-based matching. Scalars pair as multisets; composites pair by a
/// de-facto identifier field when one exists, and by cheapest recursive
/// comparison otherwise.
fn compare_unordered<C: Comparator + ?Sized>(
    comparator: &C,
    path: &Location,
    expected: &[Value],
    actual: &[Value],
    recorder: &mut Recorder,
) {
    if !comparator.mode().is_extensible() && expected.len() != actual.len() {
        recorder.record_length_mismatch(path, expected.len(), actual.len());
        return;
    }
    let mut matched = vec![false; actual.len()];
    let mut missing: Vec<usize> = Vec::new();

    // Scalars: every expected occurrence claims one unmatched actual
    // occurrence of the same (numerically normalized) value.
    let mut pool: AHashMap<ScalarKey, VecDeque<usize>> = AHashMap::new();
    for (index, item) in actual.iter().enumerate() {
        if let Some(key) = cmp::scalar_key(item) {
            pool.entry(key).or_default().push_back(index);
        }
    }
    for (index, item) in expected.iter().enumerate() {
        let Some(key) = cmp::scalar_key(item) else {
            continue;
        };
        match pool.get_mut(&key).and_then(VecDeque::pop_front) {
            Some(claimed) => matched[claimed] = true,
            None => missing.push(index),
        }
    }

    // Composites: unique-key pairing when a usable identifier exists,
    // cheapest-pair matching otherwise.
    let expected_composites: Vec<usize> = (0..expected.len())
        .filter(|&index| !cmp::is_scalar(&expected[index]))
        .collect();
    let actual_composites: Vec<usize> = (0..actual.len())
        .filter(|&index| !cmp::is_scalar(&actual[index]))
        .collect();
    if !expected_composites.is_empty() {
        if let Some(key) =
            usable_unique_key(expected, &expected_composites, actual, &actual_composites)
        {
            pair_by_unique_key(
                comparator,
                path,
                expected,
                &expected_composites,
                actual,
                &actual_composites,
                &key,
                recorder,
                &mut matched,
                &mut missing,
            );
        } else {
            pair_best_effort(
                comparator,
                path,
                expected,
                expected_composites,
                actual,
                actual_composites,
                recorder,
                &mut matched,
                &mut missing,
            );
        }
    }

    missing.sort_unstable();
    for index in missing {
        recorder.record_missing(
            FailureKind::MissingElement,
            &path.join(index),
            &expected[index],
        );
    }
    if !comparator.mode().is_extensible() {
        for (index, item) in actual.iter().enumerate() {
            if !matched[index] {
                recorder.record_unexpected(FailureKind::UnexpectedElement, &path.join(index), item);
            }
        }
    }
}

/// Find a de-facto identifier: the first common field of the expected
/// objects whose values are scalar and pairwise distinct. Usable only when
/// every actual composite is an object carrying the same field with
/// pairwise-distinct scalar values; ambiguity falls back to best-effort
/// pairing.
fn usable_unique_key(
    expected: &[Value],
    expected_composites: &[usize],
    actual: &[Value],
    actual_composites: &[usize],
) -> Option<String> {
    let mut objects = Vec::with_capacity(expected_composites.len());
    for &index in expected_composites {
        objects.push(expected[index].as_object()?);
    }
    let first = objects.first()?;
    let key = 'search: {
        'candidates: for candidate in first.keys() {
            let mut seen = AHashSet::with_capacity(objects.len());
            for object in &objects {
                let Some(value) = object.get(candidate) else {
                    continue 'candidates;
                };
                let Some(id) = cmp::scalar_key(value) else {
                    continue 'candidates;
                };
                if !seen.insert(id) {
                    continue 'candidates;
                }
            }
            break 'search Some(candidate.clone());
        }
        None
    }?;
    let mut seen = AHashSet::with_capacity(actual_composites.len());
    for &index in actual_composites {
        let id = cmp::scalar_key(actual[index].as_object()?.get(&key)?)?;
        if !seen.insert(id) {
            return None;
        }
    }
    Some(key)
}

fn pair_by_unique_key<C: Comparator + ?Sized>(
    comparator: &C,
    path: &Location,
    expected: &[Value],
    expected_composites: &[usize],
    actual: &[Value],
    actual_composites: &[usize],
    key: &str,
    recorder: &mut Recorder,
    matched: &mut [bool],
    missing: &mut Vec<usize>,
) {
    let mut by_id: AHashMap<ScalarKey, usize> =
        AHashMap::with_capacity(actual_composites.len());
    for &index in actual_composites {
        if let Some(id) = actual[index]
            .as_object()
            .and_then(|object| object.get(key))
            .and_then(cmp::scalar_key)
        {
            by_id.insert(id, index);
        }
    }
    for &index in expected_composites {
        let Some(id) = expected[index]
            .as_object()
            .and_then(|object| object.get(key))
            .and_then(cmp::scalar_key)
        else {
            missing.push(index);
            continue;
        };
        match by_id.remove(&id) {
            Some(claimed) => {
                matched[claimed] = true;
                values::compare_values(
                    comparator,
                    &path.join(index),
                    &expected[index],
                    &actual[claimed],
                    recorder,
                );
            }
            None => missing.push(index),
        }
    }
}

/// Repeatedly commit the unmatched (expected, actual) pair whose recursive
/// comparison records the fewest differences, ties broken by expected order
/// and then actual order. Pair costs are independent of commit order, so the
/// cost table is computed once up front.
fn pair_best_effort<C: Comparator + ?Sized>(
    comparator: &C,
    path: &Location,
    expected: &[Value],
    mut expected_composites: Vec<usize>,
    actual: &[Value],
    mut actual_composites: Vec<usize>,
    recorder: &mut Recorder,
    matched: &mut [bool],
    missing: &mut Vec<usize>,
) {
    let mut costs: AHashMap<(usize, usize), usize> =
        AHashMap::with_capacity(expected_composites.len() * actual_composites.len());
    for &expected_index in &expected_composites {
        for &actual_index in &actual_composites {
            let mut trial = Recorder::new();
            values::compare_values(
                comparator,
                &path.join(expected_index),
                &expected[expected_index],
                &actual[actual_index],
                &mut trial,
            );
            costs.insert((expected_index, actual_index), trial.len());
        }
    }
    while !expected_composites.is_empty() && !actual_composites.is_empty() {
        let mut best: Option<(usize, usize, usize)> = None;
        for (expected_slot, &expected_index) in expected_composites.iter().enumerate() {
            for (actual_slot, &actual_index) in actual_composites.iter().enumerate() {
                let Some(&cost) = costs.get(&(expected_index, actual_index)) else {
                    continue;
                };
                if best.is_none_or(|(_, _, lowest)| cost < lowest) {
                    best = Some((expected_slot, actual_slot, cost));
                }
            }
        }
        let Some((expected_slot, actual_slot, _)) = best else {
            break;
        };
        let expected_index = expected_composites.remove(expected_slot);
        let actual_index = actual_composites.remove(actual_slot);
        matched[actual_index] = true;
        values::compare_values(
            comparator,
            &path.join(expected_index),
            &expected[expected_index],
            &actual[actual_index],
            recorder,
        );
    }
    missing.extend(expected_composites);
}
