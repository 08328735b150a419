use std::cmp::Ordering;

use super::alternatives::naive_array::NaiveArray;
use super::helpers::{gen_rand_values_i32, shuffle_clone};

use managed_array::{ManagedArray, ManagedArrayOptions};
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;


pub fn enrich_with_neighbors(data: &[i32]) -> Vec<i32> {
    let mut test_values = Vec::with_capacity(data.len() * 3);
    for x in data {
        test_values.push(*x - 1);
        test_values.push(*x);
        test_values.push(*x + 1);
    }
    test_values
}


fn cmp(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

// Identity is the key only, the payload distinguishes deep from shallow equality.
fn cmp_key(a: &(i32, u8), b: &(i32, u8)) -> Ordering {
    a.0.cmp(&b.0)
}

fn gen_entries(rng: &mut StdRng, len: usize, key_range: i32) -> Vec<(i32, u8)> {
    (0 .. len)
        .map(|_| (rng.gen_range(0, key_range), rng.gen_range(0, 3)))
        .collect()
}


#[test]
fn insert_and_remove() {
    let repeats = 8;
    for _ in 0 .. repeats {
        for array_len in 0 .. 64 {
            for keep_sorted in [true, false].iter() {
                let options = ManagedArrayOptions::new().keep_sorted(*keep_sorted);
                let values = gen_rand_values_i32(array_len);

                let mut set_a = ManagedArray::with_options(cmp, Vec::new(), options);
                let mut set_b = NaiveArray::new(cmp, Vec::new(), *keep_sorted);

                for x in &values {
                    set_a.add_item(*x);
                    set_b.add_items(vec![*x]);
                    assert_eq!(set_a.len(), set_b.len());
                    assert_eq!(set_a.collect(), set_b.collect());
                    assert_eq!(set_a.validate_unique(), Ok(()));

                    // Test for index correctness
                    let expected = set_b.collect();
                    for i in 0 .. set_a.len() {
                        assert_eq!(set_a[i], expected[i]);
                    }
                }

                let values = shuffle_clone(&values);
                for x in &values {
                    set_a.remove_item(x);
                    set_b.remove_items(&[*x]);
                    assert_eq!(set_a.len(), set_b.len());
                    assert_eq!(set_a.collect(), set_b.collect());
                }
                assert!(set_a.is_empty());
            }
        }
    }
}

#[test]
fn find() {
    let repeats = 8;
    for _ in 0 .. repeats {
        for array_len in 0 .. 16 {
            for keep_sorted in [true, false].iter() {
                let values = gen_rand_values_i32(array_len);

                let mut set_a = ManagedArray::with_options(cmp, Vec::new(), ManagedArrayOptions::new().keep_sorted(*keep_sorted));
                let mut set_b = NaiveArray::new(cmp, Vec::new(), *keep_sorted);

                for x in &values {
                    set_a.add_item(*x);
                    set_b.add_items(vec![*x]);

                    let existing_values = set_a.collect();
                    let existing_values_enriched = enrich_with_neighbors(&existing_values);

                    for y in existing_values_enriched {
                        assert_eq!(set_a.find_in_array(&y), set_b.find(&y));
                    }
                }
            }
        }
    }
}

#[test]
fn batch_operations_with_payloads() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(0);
    for keep_sorted in [true, false].iter() {
        for _ in 0 .. 200 {
            let len = rng.gen_range(0, 8);
            let initial = gen_entries(&mut rng, len, 10);
            let options = ManagedArrayOptions::new().keep_sorted(*keep_sorted);
            let mut set_a = ManagedArray::with_options(cmp_key, initial.clone(), options);
            let mut set_b = NaiveArray::new(cmp_key, initial, *keep_sorted);

            for _ in 0 .. 20 {
                let len = rng.gen_range(0, 4);
                let items = gen_entries(&mut rng, len, 10);
                match rng.gen_range(0, 4) {
                    0 => {
                        set_a.add_items(items.clone());
                        set_b.add_items(items.clone());
                    }
                    1 => {
                        set_a.remove_items(&items);
                        set_b.remove_items(&items);
                    }
                    2 => {
                        set_a.set_array(items.clone());
                        set_b.set_array(items.clone());
                    }
                    _ => {
                        set_a.reset_array();
                        set_b.reset();
                    }
                }
                assert_eq!(set_a.collect(), set_b.collect());
                assert_eq!(set_a.to_single_occurrence(), set_b.to_single_occurrence());
                assert_eq!(set_a.validate(), Ok(()));

                let len = rng.gen_range(0, 8);
                let candidates = gen_entries(&mut rng, len, 10);
                assert_eq!(set_a.are_equals(&candidates), set_b.are_equals(&candidates));
                assert_eq!(set_a.are_equals_deep(&candidates), set_b.are_equals_deep(&candidates));

                let current = shuffle_clone(&set_a.collect());
                assert!(set_a.are_equals(&current));
                assert!(set_a.are_equals_deep(&current));

                for key in 0 .. 10 {
                    let probe = (key, 0);
                    assert_eq!(set_a.find_in_array(&probe), set_b.find(&probe));
                }
            }
        }
    }
}

#[test]
fn upsert_is_idempotent() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(1);
    for keep_sorted in [true, false].iter() {
        for _ in 0 .. 100 {
            let len = rng.gen_range(0, 10);
            let initial = gen_entries(&mut rng, len, 10);
            let mut set_a = ManagedArray::with_options(cmp_key, initial, ManagedArrayOptions::new().keep_sorted(*keep_sorted));
            let x = (rng.gen_range(0, 10), rng.gen_range(0, 3));
            let once = set_a.add_item(x).to_vec();
            let twice = set_a.add_item(x).to_vec();
            assert_eq!(once, twice);
            assert_eq!(set_a.find_in_array(&x), Some(&x));
        }
    }
}
