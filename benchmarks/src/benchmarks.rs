use super::create_cmp;
use super::helpers;
use super::helpers::RunRecord;
use super::error::{BenchmarkError, BenchmarkResult};

use super::alternatives::naive_array::NaiveArray;
use managed_array::{ManagedArray, ManagedArrayOptions};

use rand::Rng;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info};


create_cmp!(
    cmp_managed_array,
    get_num_calls_managed_array,
    NUM_CALLS_MANAGED_ARRAY
);
create_cmp!(
    cmp_naive_array,
    get_num_calls_naive_array,
    NUM_CALLS_NAIVE_ARRAY
);


#[derive(Clone, Debug)]
pub struct BenchmarkParams {
    pub n: usize,
    pub measure_every: usize,
    pub num_runs: i32,
    pub keep_sorted: bool,
    pub output_dir: PathBuf,
}

impl Default for BenchmarkParams {
    fn default() -> Self {
        BenchmarkParams {
            n: 10000,
            measure_every: 100,
            num_runs: 1,
            keep_sorted: true,
            output_dir: PathBuf::from("results"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BenchmarkMode {
    Upsert,
    Remove,
    Find,
}

impl std::fmt::Display for BenchmarkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            BenchmarkMode::Upsert => "upsert",
            BenchmarkMode::Remove => "remove",
            BenchmarkMode::Find => "find",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for BenchmarkMode {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upsert" => Ok(BenchmarkMode::Upsert),
            "remove" => Ok(BenchmarkMode::Remove),
            "find" => Ok(BenchmarkMode::Find),
            _ => Err(BenchmarkError::InvalidArgument(format!("unknown benchmark mode '{}'", s))),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_generic_benchmark<T, Init, Insert, Remove, GetLen, Find>(
    combatant: &'static str,
    mode: BenchmarkMode,
    params: &BenchmarkParams,
    values: &[f64],
    init: Init,
    insert: Insert,
    remove: Remove,
    get_len: GetLen,
    find: Find,
) -> BenchmarkResult<Vec<(usize, f64)>>
where
    Init: Fn() -> T,
    Insert: Fn(&mut T, f64),
    Remove: Fn(&mut T, f64),
    GetLen: Fn(&T) -> usize,
    Find: Fn(&T, f64) -> bool,
{
    let check_len = |set: &T, expected: usize| {
        let actual = get_len(set);
        if actual == expected {
            Ok(())
        } else {
            Err(BenchmarkError::Inconsistent { combatant, expected, actual })
        }
    };

    let mut set = init();
    let mut elapsed_times = Vec::with_capacity(values.len() / params.measure_every);

    match mode {
        BenchmarkMode::Upsert => {
            let start = Instant::now();
            for (i, x) in values.iter().enumerate() {
                insert(&mut set, *x);

                let len = i + 1;
                if len % params.measure_every == 0 {
                    elapsed_times.push((len, start.elapsed().as_secs_f64()));
                }
            }
            check_len(&set, values.len())?;
        }
        BenchmarkMode::Remove => {
            for x in values {
                insert(&mut set, *x);
            }
            check_len(&set, values.len())?;

            let values_to_remove = helpers::shuffle_clone(values);

            let start = Instant::now();
            for (i, x) in values_to_remove.iter().enumerate() {
                remove(&mut set, *x);

                let len = i + 1;
                if len % params.measure_every == 0 {
                    elapsed_times.push((len, start.elapsed().as_secs_f64()));
                }
            }
            check_len(&set, 0)?;

            // Note: we reverse the elapsed times so that the reported N corresponds to the collection size.
            let mut elapsed_times_reversed = Vec::with_capacity(elapsed_times.len());
            let mut t = 0.0;
            for i in (0 .. elapsed_times.len()).rev() {
                let (len, elapsed) = elapsed_times[i];
                let previous = if i > 0 { elapsed_times[i - 1].1 } else { 0.0 };
                t += elapsed - previous;
                elapsed_times_reversed.push((values.len() - len + params.measure_every, t));
            }
            elapsed_times = elapsed_times_reversed;
        }
        BenchmarkMode::Find => {
            for x in values {
                insert(&mut set, *x);
            }
            check_len(&set, values.len())?;

            let mut rng = rand::thread_rng();
            let mut num_found = 0;
            let start = Instant::now();
            for i in 0 .. values.len() {
                if find(&set, values[rng.gen_range(0, values.len())]) {
                    num_found += 1;
                }

                let len = i + 1;
                if len % params.measure_every == 0 {
                    elapsed_times.push((len, start.elapsed().as_secs_f64()));
                }
            }
            debug!(combatant, num_found, "find finished");
        }
    }

    Ok(elapsed_times)
}

fn export_run(
    name: &str,
    run: i32,
    mode: BenchmarkMode,
    params: &BenchmarkParams,
    elapsed_times: &[(usize, f64)],
    comparisons: u64,
) -> BenchmarkResult<()> {
    let iters: Vec<usize> = elapsed_times.iter().map(|(len, _)| *len).collect();
    let times: Vec<f64> = elapsed_times.iter().map(|(_, t)| *t).collect();

    info!(
        combatant = name,
        run,
        total_time = times.last().copied().unwrap_or(0.0),
        comparisons,
        "run finished"
    );

    let sort_policy = if params.keep_sorted { "sorted" } else { "unsorted" };
    let path = params
        .output_dir
        .join(format!("{}_{}_{}_{}.json", mode, sort_policy, name, run + 1));

    helpers::export_elapsed_times(
        &RunRecord {
            name,
            run,
            mode: mode.to_string(),
            keep_sorted: params.keep_sorted,
            iters: &iters,
            times: &times,
            comparisons,
        },
        &path,
    )
}

pub fn run_benchmarks(mode: BenchmarkMode, params: &BenchmarkParams) -> BenchmarkResult<()> {
    if params.measure_every == 0 {
        return Err(BenchmarkError::InvalidArgument("measure-every must be positive".to_string()));
    }
    info!(%mode, n = params.n, runs = params.num_runs, keep_sorted = params.keep_sorted, "running benchmarks");

    let options = ManagedArrayOptions::new().keep_sorted(params.keep_sorted);

    for run in 0 .. params.num_runs {
        let values = helpers::gen_unique_rand_values(params.n);

        let calls_before = get_num_calls_managed_array();
        let elapsed_times = run_generic_benchmark(
            "managed_array",
            mode,
            params,
            &values,
            || ManagedArray::with_options(cmp_managed_array, Vec::new(), options),
            |set, x| { set.add_item(x); },
            |set, x| { set.remove_item(&x); },
            |set| set.len(),
            |set, x| set.find_in_array(&x).is_some(),
        )?;
        let comparisons = get_num_calls_managed_array() - calls_before;
        export_run("managed_array", run, mode, params, &elapsed_times, comparisons)?;

        let calls_before = get_num_calls_naive_array();
        let elapsed_times = run_generic_benchmark(
            "naive_array",
            mode,
            params,
            &values,
            || NaiveArray::new(cmp_naive_array, Vec::new(), params.keep_sorted),
            |set, x| set.add_items(vec![x]),
            |set, x| set.remove_items(&[x]),
            |set| set.len(),
            |set, x| set.find(&x).is_some(),
        )?;
        let comparisons = get_num_calls_naive_array() - calls_before;
        export_run("naive_array", run, mode, params, &elapsed_times, comparisons)?;
    }

    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mode_from_str() {
        for mode in [BenchmarkMode::Upsert, BenchmarkMode::Remove, BenchmarkMode::Find].iter() {
            assert_eq!(mode.to_string().parse::<BenchmarkMode>().ok(), Some(*mode));
        }
        assert!("insert".parse::<BenchmarkMode>().is_err());
    }

    #[test]
    fn test_remove_reports_collection_size() {
        let params = BenchmarkParams {
            n: 20,
            measure_every: 5,
            ..BenchmarkParams::default()
        };
        let values = helpers::gen_unique_rand_values(params.n);
        let elapsed_times = run_generic_benchmark(
            "managed_array",
            BenchmarkMode::Remove,
            &params,
            &values,
            || ManagedArray::with_options(cmp_managed_array, Vec::new(), ManagedArrayOptions::new()),
            |set, x| { set.add_item(x); },
            |set, x| { set.remove_item(&x); },
            |set| set.len(),
            |set, x| set.find_in_array(&x).is_some(),
        ).unwrap();
        let iters: Vec<usize> = elapsed_times.iter().map(|(len, _)| *len).collect();
        assert_eq!(iters, vec![5, 10, 15, 20]);
    }

    #[test]
    fn test_inconsistent_length_is_reported() {
        let params = BenchmarkParams {
            n: 10,
            measure_every: 5,
            ..BenchmarkParams::default()
        };
        let values = vec![0.5; params.n];
        let result = run_generic_benchmark(
            "managed_array",
            BenchmarkMode::Upsert,
            &params,
            &values,
            || ManagedArray::with_options(cmp_managed_array, Vec::new(), ManagedArrayOptions::new()),
            |set, x| { set.add_item(x); },
            |set, x| { set.remove_item(&x); },
            |set| set.len(),
            |set, x| set.find_in_array(&x).is_some(),
        );
        match result {
            Err(BenchmarkError::Inconsistent { expected, actual, .. }) => {
                assert_eq!((expected, actual), (10, 1));
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
