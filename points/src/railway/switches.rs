use crate::input::network::*;
use crate::output::history::{SwitchLogEvent, SwitchLogger};

/// Mutable switch positions on top of a loaded network, together with the
/// logger that receives routing events. The position of city `id` is
/// stored at `switches[id - 1]`, and leaves never get a position.
pub struct SwitchNetwork<'a> {
    pub statics: &'a StaticNetwork,
    switches: Vec<Option<CityId>>,
    pub(crate) path: Vec<CityId>,
    pub(crate) logger: SwitchLogger,
}

use std::fmt;
impl<'a> fmt::Debug for SwitchNetwork<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "SwitchNetwork {{ statics: {:?}, switches: {:?} }}",
               self.statics,
               self.switches)
    }
}

impl<'a> SwitchNetwork<'a> {
    /// Every switch starts out pointing to the first child listed for
    /// its city.
    pub fn new(statics: &'a StaticNetwork, logger: SwitchLogger) -> SwitchNetwork<'a> {
        let switches = statics.cities
            .iter()
            .map(|c| c.children.first().cloned())
            .collect();
        SwitchNetwork {
            statics,
            switches,
            path: Vec::new(),
            logger,
        }
    }

    pub fn position(&self, city: CityId) -> Option<CityId> {
        if city == 0 {
            return None;
        }
        self.switches.get(city - 1).cloned().and_then(|p| p)
    }

    /// All switch positions, in city order.
    pub fn positions<'b>(&'b self) -> impl Iterator<Item = (CityId, CityId)> + 'b {
        self.switches
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.map(|p| (idx + 1, p)))
    }

    /// Point the switch at `city` towards `to`. Returns whether the
    /// switch had to be thrown, or `None` if `to` is not a child of `city`.
    pub fn set_switch(&mut self, city: CityId, to: CityId) -> Option<bool> {
        if !self.statics.children(city).contains(&to) {
            return None;
        }
        let previous = self.switches[city - 1];
        if previous == Some(to) {
            (self.logger)(SwitchLogEvent::Kept { city, position: to });
            Some(false)
        } else {
            self.switches[city - 1] = Some(to);
            (self.logger)(SwitchLogEvent::Thrown { city, previous, position: to });
            Some(true)
        }
    }
}

#[test]
fn test_initial_positions() {
    use maplit::hashmap;
    use crate::output::history::silent;
    use std::collections::HashMap;

    let net = StaticNetwork::from_children(vec![vec![3, 2], vec![4, 5], vec![], vec![], vec![]])
        .unwrap();
    let sw = SwitchNetwork::new(&net, silent());
    let positions: HashMap<CityId, CityId> = sw.positions().collect();
    assert_eq!(positions, hashmap!{ 1 => 3, 2 => 4 });
    assert_eq!(sw.position(3), None);
    assert_eq!(sw.position(0), None);
    assert_eq!(sw.position(6), None);
}

#[test]
fn test_set_switch() {
    use crate::output::history::silent;

    let net = StaticNetwork::from_children(vec![vec![2, 3], vec![], vec![]]).unwrap();
    let mut sw = SwitchNetwork::new(&net, silent());
    assert_eq!(sw.set_switch(1, 2), Some(false));
    assert_eq!(sw.set_switch(1, 3), Some(true));
    assert_eq!(sw.position(1), Some(3));
    assert_eq!(sw.set_switch(1, 3), Some(false));
}

#[test]
fn test_set_switch_outside_children() {
    use crate::output::history::silent;

    // 1 -> [2, 3], 2 -> [4]
    let net = StaticNetwork::from_children(vec![vec![2, 3], vec![4], vec![], vec![]]).unwrap();
    let mut sw = SwitchNetwork::new(&net, silent());
    // leaf
    assert_eq!(sw.set_switch(3, 1), None);
    assert_eq!(sw.position(3), None);
    // not a child of 1
    assert_eq!(sw.set_switch(1, 4), None);
    assert_eq!(sw.position(1), Some(2));
    // unknown cities
    assert_eq!(sw.set_switch(0, 2), None);
    assert_eq!(sw.set_switch(5, 2), None);
    assert_eq!(sw.positions().count(), 2);
}
