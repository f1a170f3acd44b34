use smallvec::SmallVec;

pub type CityId = usize;

/// Raw query target as read from input. May be out of range or negative.
pub type Target = i64;

pub const ROOT: CityId = 1;

#[derive(Debug, Clone)]
pub struct City {
    pub parent: Option<CityId>,
    pub children: SmallVec<[CityId; 4]>,
}

/// The tree of cities, fixed at load time. Cities are numbered `1..=len()`,
/// and city `id` is stored at `cities[id - 1]`.
#[derive(Debug, Clone)]
pub struct StaticNetwork {
    pub cities: Vec<City>,
}

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum StructureError {
    #[fail(display = "network has no cities")]
    EmptyNetwork,
    #[fail(display = "city {} is outside the network of {} cities", _0, _1)]
    UnknownCity(CityId, usize),
    #[fail(display = "root city is listed as a child of city {}", _0)]
    RootHasParent(CityId),
    #[fail(display = "city {} lists itself as a child", _0)]
    SelfLoop(CityId),
    #[fail(display = "city {} is listed as a child of both {} and {}", child, first, second)]
    DuplicateParent {
        child: CityId,
        first: CityId,
        second: CityId,
    },
    #[fail(display = "city {} is not reachable from the root", _0)]
    Unreachable(CityId),
}

impl StaticNetwork {
    /// Build the network from each city's children list, in city order.
    /// The parent of every listed child is set to the listing city. The
    /// input must describe a single tree rooted in city 1.
    pub fn from_children(children: Vec<Vec<CityId>>) -> Result<StaticNetwork, StructureError> {
        let n = children.len();
        if n == 0 {
            return Err(StructureError::EmptyNetwork);
        }

        let mut cities: Vec<City> = children
            .into_iter()
            .map(|c| City { parent: None, children: c.into() })
            .collect();

        for idx in 0..n {
            let city = idx + 1;
            for k in 0..cities[idx].children.len() {
                let child = cities[idx].children[k];
                if child < 1 || child > n {
                    return Err(StructureError::UnknownCity(child, n));
                }
                if child == ROOT {
                    return Err(StructureError::RootHasParent(city));
                }
                if child == city {
                    return Err(StructureError::SelfLoop(city));
                }
                match cities[child - 1].parent {
                    Some(first) => {
                        return Err(StructureError::DuplicateParent {
                            child,
                            first,
                            second: city,
                        })
                    }
                    None => cities[child - 1].parent = Some(city),
                }
            }
        }

        let network = StaticNetwork { cities };
        network.check_connected()?;
        Ok(network)
    }

    // Every non-root city has exactly one parent at this point, so a
    // city is only missed here if it hangs off a cycle.
    fn check_connected(&self) -> Result<(), StructureError> {
        let mut visited = vec![false; self.cities.len()];
        let mut stack = vec![ROOT];
        while let Some(city) = stack.pop() {
            visited[city - 1] = true;
            stack.extend(self.children(city).iter().cloned());
        }
        match visited.iter().position(|v| !v) {
            Some(idx) => Err(StructureError::Unreachable(idx + 1)),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        if id == 0 {
            return None;
        }
        self.cities.get(id - 1)
    }

    pub fn parent(&self, id: CityId) -> Option<CityId> {
        self.city(id).and_then(|c| c.parent)
    }

    pub fn children(&self, id: CityId) -> &[CityId] {
        match self.city(id) {
            Some(c) => &c.children,
            None => &[],
        }
    }

    /// The city a raw query target refers to, if it is inside the network.
    pub fn contains(&self, target: Target) -> Option<CityId> {
        if target < 1 || target > self.len() as Target {
            None
        } else {
            Some(target as CityId)
        }
    }

    /// Number of edges between the root and `id`.
    pub fn depth(&self, id: CityId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(p) = current {
            depth += 1;
            current = self.parent(p);
        }
        depth
    }

    pub fn iter(&self) -> impl Iterator<Item = (CityId, &City)> {
        self.cities.iter().enumerate().map(|(idx, c)| (idx + 1, c))
    }
}

#[test]
fn test_parents_from_children() {
    let net = StaticNetwork::from_children(vec![vec![2, 3], vec![4, 5], vec![], vec![], vec![]])
        .unwrap();
    assert_eq!(net.len(), 5);
    assert_eq!(net.parent(1), None);
    assert_eq!(net.parent(2), Some(1));
    assert_eq!(net.parent(3), Some(1));
    assert_eq!(net.parent(5), Some(2));
    assert_eq!(net.children(2), &[4, 5]);
    assert_eq!(net.children(3), &[] as &[CityId]);
    assert_eq!(net.depth(5), 2);
    assert_eq!(net.depth(1), 0);
}

#[test]
fn test_contains() {
    let net = StaticNetwork::from_children(vec![vec![2], vec![]]).unwrap();
    assert_eq!(net.contains(0), None);
    assert_eq!(net.contains(-4), None);
    assert_eq!(net.contains(1), Some(1));
    assert_eq!(net.contains(2), Some(2));
    assert_eq!(net.contains(3), None);
}

#[test]
fn test_structure_errors() {
    use self::StructureError::*;
    assert_eq!(StaticNetwork::from_children(vec![]).unwrap_err(), EmptyNetwork);
    assert_eq!(StaticNetwork::from_children(vec![vec![3], vec![]]).unwrap_err(),
               UnknownCity(3, 2));
    assert_eq!(StaticNetwork::from_children(vec![vec![2], vec![1]]).unwrap_err(),
               RootHasParent(2));
    assert_eq!(StaticNetwork::from_children(vec![vec![2], vec![2]]).unwrap_err(),
               SelfLoop(2));
    assert_eq!(StaticNetwork::from_children(vec![vec![2, 3], vec![3], vec![]]).unwrap_err(),
               DuplicateParent { child: 3, first: 1, second: 2 });
    // 2 and 3 point at each other, detached from the root.
    assert_eq!(StaticNetwork::from_children(vec![vec![], vec![3], vec![2]]).unwrap_err(),
               Unreachable(2));
}
