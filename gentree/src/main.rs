extern crate rand;
extern crate structopt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use structopt::StructOpt;

/// Children lists for cities 1..=n, stored at index `city - 1`.
type Tree = Vec<Vec<usize>>;

fn create_tree(spec: &TreeSpec, rng: &mut StdRng) -> Tree {
    let mut children = vec![Vec::new(); spec.num_cities];
    // Cities that can still take another child. The newest city is always
    // open, so every city gets a parent.
    let mut open = vec![1];
    for city in 2..=spec.num_cities {
        let k = rng.random_range(0..open.len());
        let parent = open[k];
        children[parent - 1].push(city);
        if children[parent - 1].len() >= spec.max_children {
            open.swap_remove(k);
        }
        open.push(city);
    }

    // The first listed child decides the initial switch position.
    for c in children.iter_mut() {
        c.shuffle(&mut *rng);
    }
    children
}

fn create_queries(spec: &TreeSpec, rng: &mut StdRng) -> Vec<i64> {
    let n = spec.num_cities as i64;
    let invalid = spec.invalid.max(0.0).min(1.0);
    (0..spec.num_queries)
        .map(|_| {
            if rng.random_bool(invalid) {
                match rng.random_range(0..3) {
                    0 => 0,
                    1 => -rng.random_range(1..=n),
                    _ => n + rng.random_range(1..=n),
                }
            } else {
                rng.random_range(1..=n)
            }
        })
        .collect()
}

fn output_problem(tree: &Tree, queries: &[i64]) -> Result<String, std::fmt::Error> {
    use std::fmt::Write;
    let mut s = String::new();
    writeln!(s, "{}", tree.len())?;
    for children in tree {
        write!(s, "{}", children.len())?;
        for c in children {
            write!(s, " {}", c)?;
        }
        writeln!(s)?;
    }
    writeln!(s, "{}", queries.len())?;
    for q in queries {
        writeln!(s, "{}", q)?;
    }
    Ok(s)
}

/// Generate a random switch network with queries
#[derive(StructOpt, Clone, Debug)]
#[structopt(name="gentree")]
struct TreeSpec {
    /// Number of cities
    #[structopt(short="n", long="cities", default_value="10")]
    num_cities: usize,

    /// Number of queries
    #[structopt(short="q", long="queries", default_value="20")]
    num_queries: usize,

    /// Maximum number of children per city
    #[structopt(short="c", long="max-children", default_value="3")]
    max_children: usize,

    /// Random seed
    #[structopt(short="s", long="seed")]
    seed: Option<u64>,

    /// Fraction of queries with a target outside the network
    #[structopt(long="invalid", default_value="0.0")]
    invalid: f64,
}

fn main() {
    let spec = TreeSpec::from_args();
    if spec.num_cities == 0 {
        eprintln!("Error:\nthe network needs at least one city");
        std::process::exit(1);
    }
    if spec.max_children == 0 && spec.num_cities > 1 {
        eprintln!("Error:\ncities need at least one child each to connect {} cities", spec.num_cities);
        std::process::exit(1);
    }

    let mut rng = match spec.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let tree = create_tree(&spec, &mut rng);
    let queries = create_queries(&spec, &mut rng);

    match output_problem(&tree, &queries) {
        Ok(s) => print!("{}", s),
        Err(e) => {
            eprintln!("Error:\n{}", e);
            std::process::exit(1);
        }
    }
}

#[test]
fn test_tree_shape() {
    let spec = TreeSpec { num_cities: 500, num_queries: 0, max_children: 2, seed: None, invalid: 0.0 };
    let mut rng = StdRng::seed_from_u64(1);
    let tree = create_tree(&spec, &mut rng);
    let mut parents = vec![0; 501];
    for (idx, children) in tree.iter().enumerate() {
        assert!(children.len() <= 2);
        for &c in children {
            assert_eq!(parents[c], 0);
            parents[c] = idx + 1;
        }
    }
    assert_eq!(parents[1], 0);
    assert!(parents[2..].iter().all(|&p| p != 0));
}

#[test]
fn test_query_ranges() {
    let spec = TreeSpec { num_cities: 30, num_queries: 1000, max_children: 3, seed: None, invalid: 0.3 };
    let mut rng = StdRng::seed_from_u64(2);
    let queries = create_queries(&spec, &mut rng);
    assert_eq!(queries.len(), 1000);
    assert!(queries.iter().any(|&q| q < 1 || q > 30));
    assert!(queries.iter().any(|&q| q >= 1 && q <= 30));
}

#[test]
fn test_output_format() {
    let tree = vec![vec![2, 3], vec![], vec![]];
    assert_eq!(output_problem(&tree, &[3, -1]).unwrap(), "3\n2 2 3\n0\n0\n2\n3\n-1\n");
}
