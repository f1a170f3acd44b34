// Randomized comparison of the routing engine against a bottom-up walk
// that throws switches from the target towards the root.

use points::evaluate_queries;
use points::input::network::{CityId, StaticNetwork, Target};
use points::output::history::silent;
use points::railway::route::QueryOutcome;
use points::railway::switches::SwitchNetwork;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn random_children(rng: &mut StdRng, n: usize, max_children: usize) -> Vec<Vec<CityId>> {
    let mut children = vec![Vec::new(); n];
    let mut open = vec![1];
    for city in 2..=n {
        let k = rng.random_range(0..open.len());
        let parent = open[k];
        children[parent - 1].push(city);
        if children[parent - 1].len() >= max_children {
            open.swap_remove(k);
        }
        open.push(city);
    }
    for c in children.iter_mut() {
        c.shuffle(&mut *rng);
    }
    children
}

fn random_targets(rng: &mut StdRng, n: usize, q: usize) -> Vec<Target> {
    (0..q)
        .map(|_| rng.random_range(-1..=(n as Target + 1)))
        .collect()
}

fn reference(children: &[Vec<CityId>], targets: &[Target]) -> Vec<i64> {
    let n = children.len();
    let mut parent = vec![0; n + 1];
    let mut switch = vec![0; n + 1];
    for (idx, c) in children.iter().enumerate() {
        if let Some(&first) = c.first() {
            switch[idx + 1] = first;
        }
        for &child in c {
            parent[child] = idx + 1;
        }
    }
    targets.iter().map(|&t| {
        if t < 1 || t > n as Target {
            return -1;
        }
        let mut count = 0;
        let mut curr = t as usize;
        while curr != 1 {
            let p = parent[curr];
            if switch[p] != curr {
                count += 1;
                switch[p] = curr;
            }
            curr = p;
        }
        count
    }).collect()
}

fn as_numbers(r: &[QueryOutcome]) -> Vec<i64> {
    r.iter().map(|o| o.flips().map(|n| n as i64).unwrap_or(-1)).collect()
}

#[test]
fn stress_against_reference() {
    let sizes = [(10, 20, 3), (100, 100, 5), (1000, 1000, 7), (5000, 5000, 10)];
    for (seed, &(n, q, max_children)) in sizes.iter().enumerate() {
        for trial in 0..3 {
            let mut rng = StdRng::seed_from_u64((seed * 3 + trial) as u64);
            let children = random_children(&mut rng, n, max_children);
            let targets = random_targets(&mut rng, n, q);
            let expected = reference(&children, &targets);
            let net = StaticNetwork::from_children(children).unwrap();
            let got = evaluate_queries(&net, &targets, silent());
            assert_eq!(got.len(), q);
            assert_eq!(as_numbers(&got), expected, "n={} q={} trial={}", n, q, trial);
        }
    }
}

#[test]
fn repeated_target_is_free() {
    let mut rng = StdRng::seed_from_u64(7);
    let net = StaticNetwork::from_children(random_children(&mut rng, 200, 4)).unwrap();
    let mut sw = SwitchNetwork::new(&net, silent());
    for _ in 0..500 {
        let t = rng.random_range(1..=200);
        sw.route_to(t);
        assert_eq!(sw.route_to(t), QueryOutcome::Flips(0));
        assert_eq!(sw.route_to(1), QueryOutcome::Flips(0));
    }
}

#[test]
fn flips_bounded_by_depth() {
    let mut rng = StdRng::seed_from_u64(11);
    let net = StaticNetwork::from_children(random_children(&mut rng, 300, 2)).unwrap();
    let mut sw = SwitchNetwork::new(&net, silent());
    for _ in 0..1000 {
        let t = rng.random_range(1..=300);
        let depth = net.depth(t as CityId);
        let flips = sw.route_to(t).flips().unwrap();
        assert!(flips <= depth, "target {} depth {} flips {}", t, depth, flips);
    }
}

#[test]
fn flips_count_mismatched_edges() {
    let mut rng = StdRng::seed_from_u64(23);
    let net = StaticNetwork::from_children(random_children(&mut rng, 150, 3)).unwrap();
    let mut sw = SwitchNetwork::new(&net, silent());
    for _ in 0..400 {
        let t = rng.random_range(1..=150);
        let path = sw.path_to(t as CityId).to_vec();
        let mismatched = path.windows(2)
            .filter(|e| sw.position(e[0]) != Some(e[1]))
            .count();
        assert_eq!(sw.route_to(t), QueryOutcome::Flips(mismatched));
        for e in path.windows(2) {
            assert_eq!(sw.position(e[0]), Some(e[1]));
        }
    }
}

#[test]
fn invalid_targets_do_not_disturb() {
    let mut rng = StdRng::seed_from_u64(5);
    let children = random_children(&mut rng, 80, 3);
    let net = StaticNetwork::from_children(children).unwrap();
    let valid: Vec<Target> = (0..200).map(|_| rng.random_range(1..=80)).collect();
    let mut mixed = Vec::new();
    for &t in &valid {
        mixed.push(t);
        mixed.push(if rng.random_bool(0.5) { 0 } else { 81 });
    }
    let plain = evaluate_queries(&net, &valid, silent());
    let interleaved: Vec<_> = evaluate_queries(&net, &mixed, silent())
        .into_iter()
        .step_by(2)
        .collect();
    assert_eq!(plain, interleaved);
}
