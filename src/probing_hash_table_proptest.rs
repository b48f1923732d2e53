#![cfg(test)]

// Property tests for ProbingHashTable kept inside the crate so they can
// exercise the configuration and hasher parameters directly.

use crate::config::TableConfig;
use crate::error::TableError;
use crate::prime::is_prime;
use crate::probing_hash_table::ProbingHashTable;
use core::hash::{BuildHasher, BuildHasherDefault, Hasher};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};

// Folds every hash into a handful of buckets so probe chains, tombstone
// reuse and growth all get exercised by short op sequences.
#[derive(Default)]
struct FewBucketsHasher(DefaultHasher);

impl Hasher for FewBucketsHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.0.write(bytes);
    }
    fn finish(&self) -> u64 {
        self.0.finish() % 4
    }
}

type FewBuckets = BuildHasherDefault<FewBucketsHasher>;

// Pool-indexed operations: indices shrink to earlier keys, op lists shrink
// in length.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{1,6}", 1..=40).prop_flat_map(|pool| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            3 => idx.clone().prop_map(Op::Remove),
            2 => idx.clone().prop_map(Op::Get),
            1 => "[a-z]{0,6}".prop_map(Op::Contains),
            1 => Just(Op::Clear),
            1 => Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_against_model<S>(
    mut sut: ProbingHashTable<String, i32, S>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError>
where
    S: BuildHasher + Clone + Default,
{
    let mut model: HashMap<String, i32> = HashMap::new();
    for op in ops {
        let before_capacity = sut.capacity();
        match op {
            Op::Insert(i, v) => {
                let k = pool[i].clone();
                let prev = sut.insert(k.clone(), v).expect("within size limits");
                prop_assert_eq!(prev, model.insert(k, v));
            }
            Op::Remove(i) => {
                prop_assert_eq!(sut.remove(pool[i].as_str()), model.remove(&pool[i]));
                prop_assert_eq!(sut.capacity(), before_capacity, "remove never resizes");
            }
            Op::Get(i) => {
                prop_assert_eq!(sut.get(pool[i].as_str()), model.get(&pool[i]));
            }
            Op::Contains(k) => {
                prop_assert_eq!(sut.contains_key(k.as_str()), model.contains_key(&k));
            }
            Op::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), before_capacity, "clear keeps length");
            }
            Op::Iterate => {
                let seen: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(seen.len(), sut.len(), "each entry yielded once");
                let expected: BTreeMap<String, i32> = model.clone().into_iter().collect();
                prop_assert_eq!(seen, expected);
            }
        }
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(is_prime(sut.capacity()));
        prop_assert!(sut.capacity() >= before_capacity, "never shrinks");
        prop_assert!(sut.len() as f64 <= 0.5 * sut.capacity() as f64);
        prop_assert_eq!(sut.verify(), Ok(()));
    }
    for (k, v) in &model {
        prop_assert_eq!(sut.get(k.as_str()), Some(v));
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - insert returns the previous value exactly when the key was present.
// - remove/get/contains_key agree with the model; remove never resizes.
// - iteration yields each live entry exactly once.
// - the length stays prime, never shrinks, and the load factor holds.
// - `verify` accepts the table after every operation.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_default_hasher((pool, ops) in arb_scenario(), capacity in 0usize..30) {
        let sut: ProbingHashTable<String, i32> = ProbingHashTable::with_capacity(capacity).unwrap();
        run_against_model(sut, &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_colliding_hasher((pool, ops) in arb_scenario(), capacity in 0usize..30) {
        let sut: ProbingHashTable<String, i32, FewBuckets> =
            ProbingHashTable::with_capacity_and_hasher(capacity, FewBuckets::default()).unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}

// Property: construction clamps small capacities up, rejects large ones, and
// always allocates the smallest prime at or above the coerced request.
proptest! {
    #[test]
    fn prop_construction_bounds(requested in 0usize..=12_000) {
        let res: Result<ProbingHashTable<u32, u32>, _> = ProbingHashTable::with_capacity(requested);
        if requested > TableConfig::DEFAULT_MAX_CAPACITY {
            prop_assert_eq!(
                res.err(),
                Some(TableError::Capacity { requested, max: TableConfig::DEFAULT_MAX_CAPACITY })
            );
        } else {
            let t = res.unwrap();
            let coerced = requested.max(TableConfig::DEFAULT_MIN_CAPACITY);
            prop_assert!(is_prime(t.capacity()));
            prop_assert!(t.capacity() >= coerced);
            prop_assert!((coerced..t.capacity()).all(|n| !is_prime(n)));
        }
    }
}
