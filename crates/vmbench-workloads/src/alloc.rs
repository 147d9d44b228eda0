//! Allocation-pressure workloads.
//!
//! Each builder returns a fresh container meant to be dropped right after
//! construction; the benchmarks measure the build-and-discard churn, not
//! the contents. Values are uniform random floats in [0,1) from an
//! unseeded generator, so only cardinality and range are meaningful.

use std::collections::HashMap;

/// Build an ordered sequence of `len` uniform random floats in [0,1).
///
/// Starts from an empty vector and appends one value at a time; growth is
/// part of the workload, so no capacity is reserved up front.
pub fn float_sequence(len: usize) -> Vec<f64> {
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(fastrand::f64());
    }
    values
}

/// Build a mapping of `"key0".."key<len-1>"` to uniform random floats in
/// [0,1).
pub fn float_mapping(len: usize) -> HashMap<String, f64> {
    let mut entries = HashMap::new();
    for i in 0..len {
        entries.insert(format!("key{i}"), fastrand::f64());
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_has_exact_cardinality() {
        assert_eq!(float_sequence(0).len(), 0);
        assert_eq!(float_sequence(1000).len(), 1000);
    }

    #[test]
    fn sequence_values_are_unit_interval() {
        for value in float_sequence(1000) {
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn mapping_has_exact_key_set() {
        let entries = float_mapping(1000);
        assert_eq!(entries.len(), 1000);
        for i in 0..1000 {
            assert!(entries.contains_key(&format!("key{i}")));
        }
    }

    #[test]
    fn mapping_values_are_unit_interval() {
        for value in float_mapping(1000).values() {
            assert!((0.0..1.0).contains(value));
        }
    }
}
