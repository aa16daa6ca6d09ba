use super::station::{StationId, STATION_LIST_SEPARATOR};
use indexmap::IndexSet;
use serde::Serialize;

/// Ordered set of station ids. Order is traversal / encounter order and
/// drives the order of names in the requirement summary.
pub type StationSet = IndexSet<StationId>;

/// Which flavour of highlight is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    Empty,
    TransientHover,
    Pinned,
}

impl SelectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionKind::Empty => "empty",
            SelectionKind::TransientHover => "hovering",
            SelectionKind::Pinned => "pinned",
        }
    }
}

impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The highlight set and how it came to be
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    /// Shown while the pointer rests on `anchor`; never persisted
    TransientHover { anchor: StationId, stations: StationSet },
    /// Set by a click. `anchor` is the last clicked station; it is `None`
    /// when the selection was rehydrated without a usable anchor.
    Pinned {
        anchor: Option<StationId>,
        stations: StationSet,
    },
}

impl Selection {
    pub fn kind(&self) -> SelectionKind {
        match self {
            Selection::Empty => SelectionKind::Empty,
            Selection::TransientHover { .. } => SelectionKind::TransientHover,
            Selection::Pinned { .. } => SelectionKind::Pinned,
        }
    }

    pub fn anchor(&self) -> Option<&StationId> {
        match self {
            Selection::Empty => None,
            Selection::TransientHover { anchor, .. } => Some(anchor),
            Selection::Pinned { anchor, .. } => anchor.as_ref(),
        }
    }

    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        let set = match self {
            Selection::Empty => None,
            Selection::TransientHover { stations, .. } | Selection::Pinned { stations, .. } => {
                Some(stations)
            }
        };
        set.into_iter().flatten()
    }

    pub fn contains(&self, id: &str) -> bool {
        match self {
            Selection::Empty => false,
            Selection::TransientHover { stations, .. } | Selection::Pinned { stations, .. } => {
                stations.contains(id)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.stations().count()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, Selection::Pinned { .. })
    }

    /// Read-only copy for renderers
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            kind: self.kind(),
            anchor: self.anchor().cloned(),
            stations: self.stations().cloned().collect(),
        }
    }
}

/// Detached view of the selection handed to render adapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSnapshot {
    pub kind: SelectionKind,
    pub anchor: Option<StationId>,
    pub stations: Vec<StationId>,
}

impl SelectionSnapshot {
    pub fn contains(&self, id: &str) -> bool {
        self.stations.iter().any(|station| station.as_str() == id)
    }
}

/// A pinned selection in its stored string form.
///
/// Ids are raw strings here; they are only checked against the graph on
/// rehydration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSelection {
    pub stations: Vec<String>,
    pub anchor: Option<String>,
}

impl PersistedSelection {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn pinned(stations: &StationSet, anchor: Option<&StationId>) -> Self {
        Self {
            stations: stations.iter().map(|id| id.to_string()).collect(),
            anchor: anchor.map(|id| id.to_string()),
        }
    }

    /// Parses the stored forms of both keys. Empty values mean "nothing pinned".
    pub fn decode(stations: Option<&str>, anchor: Option<&str>) -> Self {
        let stations = stations
            .map(|raw| {
                raw.split(STATION_LIST_SEPARATOR)
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let anchor = anchor
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Self { stations, anchor }
    }

    /// Comma-joined station list
    pub fn encode_stations(&self) -> String {
        self.stations.join(&STATION_LIST_SEPARATOR.to_string())
    }

    pub fn encode_anchor(&self) -> String {
        self.anchor.clone().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
