use crate::shared::error::HideoutError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Maximum length for station ids
const MAX_STATION_ID_LENGTH: usize = 128;

/// Separator used when a list of station ids is stored as one string
pub const STATION_LIST_SEPARATOR: char = ',';

/// NewType wrapper for station id with validation
///
/// Ids end up comma-joined in durable storage, so they may not contain
/// the separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Result<Self, HideoutError> {
        let id = id.into();

        if id.is_empty() {
            return Err(HideoutError::Validation {
                message: "Station id cannot be empty".to_string(),
            });
        }

        if id.len() > MAX_STATION_ID_LENGTH {
            return Err(HideoutError::Validation {
                message: format!(
                    "Station id is too long ({} bytes). Maximum allowed: {} bytes",
                    id.len(),
                    MAX_STATION_ID_LENGTH
                ),
            });
        }

        if id.contains(STATION_LIST_SEPARATOR) {
            return Err(HideoutError::Validation {
                message: format!("Station id '{}' must not contain '{}'", id, STATION_LIST_SEPARATOR),
            });
        }

        if id.trim() != id || id.chars().any(char::is_control) {
            return Err(HideoutError::Validation {
                message: format!(
                    "Station id '{}' must not contain control characters or surrounding whitespace",
                    id.escape_debug()
                ),
            });
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

/// An item consumed by an upgrade, e.g. `{"item": "Bolts", "amount": 5}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequirement {
    pub item: String,
    pub amount: u32,
}

impl ItemRequirement {
    pub fn new(item: impl Into<String>, amount: u32) -> Self {
        Self {
            item: item.into(),
            amount,
        }
    }
}

/// A leveled requirement: a character skill or a trader loyalty level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRequirement {
    pub name: String,
    pub lvl: u32,
}

impl LevelRequirement {
    pub fn new(name: impl Into<String>, lvl: u32) -> Self {
        Self {
            name: name.into(),
            lvl,
        }
    }
}

/// One CSS grid placement value: either a line number or a track spec such as `"2 / 4"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GridPlacement {
    Line(i64),
    Track(String),
}

/// Layout hints for renderers. Never consulted by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "gridRow", default, skip_serializing_if = "Option::is_none")]
    pub grid_row: Option<GridPlacement>,
    #[serde(rename = "gridColumn", default, skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<GridPlacement>,
}

/// Everything a station needs before it can be built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prerequisites {
    pub items: Vec<ItemRequirement>,
    pub skills: Vec<LevelRequirement>,
    pub traders: Vec<LevelRequirement>,
    pub stations: Vec<StationId>,
}

impl Prerequisites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: impl Into<String>, amount: u32) -> Self {
        self.items.push(ItemRequirement::new(item, amount));
        self
    }

    pub fn with_skill(mut self, name: impl Into<String>, lvl: u32) -> Self {
        self.skills.push(LevelRequirement::new(name, lvl));
        self
    }

    pub fn with_trader(mut self, name: impl Into<String>, lvl: u32) -> Self {
        self.traders.push(LevelRequirement::new(name, lvl));
        self
    }

    pub fn with_station(mut self, station: StationId) -> Self {
        self.stations.push(station);
        self
    }
}

/// Station entity: one upgrade tier of one hideout facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    id: StationId,
    name: String,
    lvl: u32,
    geometry: Geometry,
    prerequisites: Prerequisites,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, lvl: u32, prerequisites: Prerequisites) -> Self {
        Self {
            id,
            name: name.into(),
            lvl,
            geometry: Geometry::default(),
            prerequisites,
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lvl(&self) -> u32 {
        self.lvl
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn prerequisites(&self) -> &Prerequisites {
        &self.prerequisites
    }

    /// Direct predecessor stations
    pub fn required_stations(&self) -> &[StationId] {
        &self.prerequisites.stations
    }
}
