use crate::input::network::{CityId, StaticNetwork, Target};
use crate::railway::route::QueryOutcome;
use std::fmt;

pub type SwitchLogger = Box<dyn Fn(SwitchLogEvent)>;

/// A logger that drops every event.
pub fn silent() -> SwitchLogger {
    Box::new(|_| {})
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchLogEvent {
    Query(Target),
    Rejected(Target),
    Path(Vec<CityId>),
    Kept { city: CityId, position: CityId },
    Thrown { city: CityId, previous: Option<CityId>, position: CityId },
    Routed { target: CityId, flips: usize },
}

impl fmt::Display for SwitchLogEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::SwitchLogEvent::*;
        match *self {
            Query(t) => write!(f, "query target={}", t),
            Rejected(t) => write!(f, "target {} is outside the network", t),
            Path(ref path) => {
                write!(f, "path:")?;
                for c in path {
                    write!(f, " {}", c)?;
                }
                Ok(())
            }
            Kept { city, position } => write!(f, "  at city {}: switch points to {} -> ok", city, position),
            Thrown { city, previous: Some(p), position } => {
                write!(f, "  at city {}: switch points to {} -> thrown to {}", city, p, position)
            }
            Thrown { city, previous: None, position } => {
                write!(f, "  at city {}: switch unset -> thrown to {}", city, position)
            }
            Routed { target, flips } => write!(f, "routed to {} with {} switch changes", target, flips),
        }
    }
}

#[derive(Debug)]
pub struct History {
    pub results: Vec<QueryOutcome>,
    pub events: Vec<SwitchLogEvent>,
}

impl History {
    /// Events belonging to the `n`th query, starting from its `Query` event.
    /// Scans the log from the start on every call.
    pub fn query_events(&self, n: usize) -> &[SwitchLogEvent] {
        let is_query = |e: &SwitchLogEvent| match *e { SwitchLogEvent::Query(_) => true, _ => false };
        let mut starts = self.events.iter().enumerate()
            .filter(|&(_, e)| is_query(e))
            .map(|(i, _)| i)
            .skip(n);
        match starts.next() {
            Some(begin) => {
                let end = starts.next().unwrap_or(self.events.len());
                &self.events[begin..end]
            }
            None => &[],
        }
    }
}

/// Print the loaded tree, one city per line, with the initial
/// switch position of each city that has children.
pub fn tree_dump(net: &StaticNetwork) -> Result<String, failure::Error> {
    use std::fmt::Write;
    let mut s = String::new();
    for (id, city) in net.iter() {
        write!(s, "city {}: ", id)?;
        match city.children.first() {
            None => write!(s, "no children")?,
            Some(first) => {
                write!(s, "children:")?;
                for c in &city.children {
                    write!(s, " {}", c)?;
                }
                write!(s, " (switch -> {})", first)?;
            }
        }
        match city.parent {
            Some(p) => write!(s, ", parent: {}\n", p)?,
            None => write!(s, ", root\n")?,
        }
    }
    Ok(s)
}

#[test]
fn test_tree_dump() {
    let net = StaticNetwork::from_children(vec![vec![3, 2], vec![], vec![]]).unwrap();
    let dump = tree_dump(&net).unwrap();
    assert_eq!(dump,
               "city 1: children: 3 2 (switch -> 3), root\n\
                city 2: no children, parent: 1\n\
                city 3: no children, parent: 1\n");
}
