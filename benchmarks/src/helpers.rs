use std::collections::HashSet;
use std::fs::{create_dir_all, File};
use std::path::Path;
use serde_json::json;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use super::error::BenchmarkResult;

/// Defines a counting `f64` comparator `$func`, with `$get` returning the number of calls so far.
#[macro_export]
macro_rules! create_cmp {
    ($func:ident, $get:ident, $count:ident) => {
        static $count: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

        #[inline]
        fn $func(a: &f64, b: &f64) -> std::cmp::Ordering {
            $count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            a.exp().total_cmp(&b.exp())
        }

        #[allow(dead_code)]
        pub fn $get() -> u64 {
            $count.load(std::sync::atomic::Ordering::Relaxed)
        }
    };
}


/// Random values which are pairwise distinct under the `create_cmp!` comparators, so that
/// upserting all of them yields exactly `n` elements.
pub fn gen_unique_rand_values(n: usize) -> Vec<f64> {
    let mut rng = thread_rng();
    let mut seen = HashSet::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    while values.len() < n {
        let x: f64 = rng.gen();
        if seen.insert(x.exp().to_bits()) {
            values.push(x);
        }
    }
    values
}

pub fn gen_rand_values_i32(n: usize) -> Vec<i32> {
    let mut rng = thread_rng();
    (0 .. n).map(|_| rng.gen_range(-(n as i32), n as i32 + 1)).collect()
}

pub fn shuffle<T>(v: &mut [T]) {
    let mut rng = thread_rng();
    v.shuffle(&mut rng);
}

pub fn shuffle_clone<T>(v: &[T]) -> Vec<T>
where
    T: Clone
{
    let mut v_cloned = v.to_vec();
    shuffle(&mut v_cloned);
    v_cloned
}


pub struct RunRecord<'a> {
    pub name: &'a str,
    pub run: i32,
    pub mode: String,
    pub keep_sorted: bool,
    pub iters: &'a [usize],
    pub times: &'a [f64],
    pub comparisons: u64,
}

pub fn export_elapsed_times(record: &RunRecord, path: &Path) -> BenchmarkResult<()> {

    let json_data = json!({
        "name": record.name,
        "run": record.run,
        "mode": record.mode,
        "keep_sorted": record.keep_sorted,
        "iters": record.iters,
        "times": record.times,
        "comparisons": record.comparisons,
    });

    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let f = File::create(path)?;
    serde_json::to_writer_pretty(f, &json_data)?;
    Ok(())
}
