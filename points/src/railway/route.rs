use super::switches::SwitchNetwork;
use crate::input::network::{CityId, Target, ROOT};
use crate::output::history::SwitchLogEvent;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Number of switches that were thrown to reach the target.
    Flips(usize),
    InvalidTarget,
}

impl QueryOutcome {
    pub fn flips(&self) -> Option<usize> {
        match *self {
            QueryOutcome::Flips(n) => Some(n),
            QueryOutcome::InvalidTarget => None,
        }
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QueryOutcome::Flips(n) => write!(f, "{}", n),
            QueryOutcome::InvalidTarget => write!(f, "-1"),
        }
    }
}

impl<'a> SwitchNetwork<'a> {
    /// The cities from the root down to `target`, both included.
    pub fn path_to(&mut self, target: CityId) -> &[CityId] {
        self.path.clear();
        let mut current = Some(target);
        while let Some(city) = current {
            self.path.push(city);
            current = self.statics.parent(city);
        }
        self.path.reverse();
        &self.path
    }

    /// Route a train from the root to `target`, throwing every switch on
    /// the way that points away from the path. Targets outside the
    /// network are rejected without touching any switch.
    pub fn route_to(&mut self, target: Target) -> QueryOutcome {
        (self.logger)(SwitchLogEvent::Query(target));
        let target = match self.statics.contains(target) {
            Some(city) => city,
            None => {
                (self.logger)(SwitchLogEvent::Rejected(target));
                return QueryOutcome::InvalidTarget;
            }
        };

        let mut flips = 0;
        if target != ROOT {
            self.path_to(target);
            (self.logger)(SwitchLogEvent::Path(self.path.clone()));
            for j in 1..self.path.len() {
                let (from, to) = (self.path[j - 1], self.path[j]);
                if self.set_switch(from, to) == Some(true) {
                    flips += 1;
                }
            }
        }

        (self.logger)(SwitchLogEvent::Routed { target, flips });
        QueryOutcome::Flips(flips)
    }
}

#[cfg(test)]
fn example_network() -> crate::input::network::StaticNetwork {
    // 1 -> [2, 3], 2 -> [4, 5]
    crate::input::network::StaticNetwork::from_children(
        vec![vec![2, 3], vec![4, 5], vec![], vec![], vec![]]).unwrap()
}

#[test]
fn test_path_to() {
    use crate::output::history::silent;
    let net = example_network();
    let mut sw = SwitchNetwork::new(&net, silent());
    assert_eq!(sw.path_to(5), &[1, 2, 5]);
    assert_eq!(sw.path_to(3), &[1, 3]);
    assert_eq!(sw.path_to(1), &[1]);
}

#[test]
fn test_oscillating_branch() {
    use crate::output::history::silent;
    let net = example_network();
    let mut sw = SwitchNetwork::new(&net, silent());
    assert_eq!(sw.route_to(5), QueryOutcome::Flips(1));
    assert_eq!(sw.position(2), Some(5));
    assert_eq!(sw.route_to(4), QueryOutcome::Flips(1));
    assert_eq!(sw.route_to(5), QueryOutcome::Flips(1));
    assert_eq!(sw.route_to(5), QueryOutcome::Flips(0));
}

#[test]
fn test_two_flips_on_one_path() {
    use crate::output::history::silent;
    let net = example_network();
    let mut sw = SwitchNetwork::new(&net, silent());
    assert_eq!(sw.route_to(3), QueryOutcome::Flips(1));
    assert_eq!(sw.route_to(5), QueryOutcome::Flips(2));
    assert_eq!(sw.position(1), Some(2));
    assert_eq!(sw.position(2), Some(5));
}

#[test]
fn test_rejected_targets() {
    use crate::output::history::silent;
    let net = example_network();
    let mut sw = SwitchNetwork::new(&net, silent());
    assert_eq!(sw.route_to(0), QueryOutcome::InvalidTarget);
    assert_eq!(sw.route_to(6), QueryOutcome::InvalidTarget);
    assert_eq!(sw.route_to(-3), QueryOutcome::InvalidTarget);
    assert_eq!(sw.position(1), Some(2));
    assert_eq!(sw.position(2), Some(4));
    assert_eq!(sw.route_to(1), QueryOutcome::Flips(0));
}

#[test]
fn test_display() {
    assert_eq!(QueryOutcome::Flips(4).to_string(), "4");
    assert_eq!(QueryOutcome::InvalidTarget.to_string(), "-1");
    assert_eq!(QueryOutcome::InvalidTarget.flips(), None);
}
