use crate::path::Cost;
use std::fmt;
use std::str::FromStr;

/// The rule that orders the Frontier of a search.
///
/// All three Strategies share the same search routine and only differ in the priority they
/// assign to a Node, given the Cost `g` of the best known Path from the start to that Node and
/// the Heuristic `h` from that Node to the goal.
///
/// ```
/// # use grid_search_lab::search::Strategy;
/// assert_eq!(Strategy::Dijkstra.priority(3, 4), 3);
/// assert_eq!(Strategy::AStar.priority(3, 4), 7);
/// assert_eq!(Strategy::Greedy.priority(3, 4), 4);
///
/// assert_eq!("a_star".parse::<Strategy>().unwrap(), Strategy::AStar);
/// assert_eq!(Strategy::Greedy.to_string(), "greedy");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Uniform-cost search: priority `g`. Explores in rings of equal distance from the start
    /// and ignores where the goal is. Always finds a shortest Path.
    Dijkstra,
    /// priority `g + h`. Always finds a shortest Path, as long as the Heuristic never
    /// overestimates, and usually explores far fewer Nodes than Dijkstra.
    AStar,
    /// Greedy Best-First search: priority `h`. Rushes towards the goal and ignores the Cost
    /// already walked, which makes it fast but lets obstacles lead it onto detours.
    /// Nodes are never reopened once explored, so the Path is not necessarily a shortest one.
    Greedy,
}

impl Strategy {
    /// All Strategies, in the order they are usually compared
    pub const ALL: [Strategy; 3] = [Strategy::Dijkstra, Strategy::AStar, Strategy::Greedy];

    /// The priority of a Node with Cost-so-far `g` and Heuristic `h`. Lower is explored first.
    pub fn priority(self, g: Cost, h: Cost) -> Cost {
        match self {
            Strategy::Dijkstra => g,
            Strategy::AStar => g + h,
            Strategy::Greedy => h,
        }
    }

    /// `false` if [`priority`](Strategy::priority) ignores the Heuristic
    pub fn uses_heuristic(self) -> bool {
        self != Strategy::Dijkstra
    }

    /// The machine-readable name, as used on the command line and in the result log
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "a_star",
            Strategy::Greedy => "greedy",
        }
    }

    /// A human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Dijkstra => "Dijkstra",
            Strategy::AStar => "A*",
            Strategy::Greedy => "Greedy Best-First",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when parsing an unknown [`Strategy`] name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected one of: dijkstra, a_star, greedy)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;
    fn from_str(s: &str) -> Result<Strategy, ParseStrategyError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "ucs" => Ok(Strategy::Dijkstra),
            "a_star" | "astar" | "a*" | "a_estrella" => Ok(Strategy::AStar),
            "greedy" | "gbfs" => Ok(Strategy::Greedy),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
