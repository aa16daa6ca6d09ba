use crate::hideout::domain::{
    Geometry, HideoutGraph, ItemRequirement, LevelRequirement, Prerequisites, Station, StationId,
};
use crate::shared::error::HideoutError;
use indexmap::IndexMap;
use serde::Deserialize;

/// Dataset shape as published: `{ "<id>": { id, name, lvl, geometry, prerequisites } }`
#[derive(Debug, Deserialize)]
struct RawStation {
    id: String,
    name: String,
    lvl: u32,
    #[serde(default)]
    geometry: Geometry,
    #[serde(default)]
    prerequisites: RawPrerequisites,
}

#[derive(Debug, Default, Deserialize)]
struct RawPrerequisites {
    #[serde(default)]
    items: Vec<ItemRequirement>,
    #[serde(default)]
    skills: Vec<LevelRequirement>,
    #[serde(default)]
    traders: Vec<LevelRequirement>,
    #[serde(default)]
    stations: Vec<String>,
}

/// HideoutGraphLoader turns the static station dataset into a validated graph
///
/// Loading is all-or-nothing: any malformed station, dangling reference or
/// cycle rejects the whole dataset.
pub struct HideoutGraphLoader;

impl HideoutGraphLoader {
    /// Parses dataset JSON
    ///
    /// # Arguments
    /// * `source_name` - Where the content came from, for error messages
    /// * `content` - Raw dataset JSON
    pub fn parse(source_name: &str, content: &str) -> Result<HideoutGraph, HideoutError> {
        let raw: IndexMap<String, RawStation> =
            serde_json::from_str(content).map_err(|e| HideoutError::DatasetParseError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            })?;

        let stations = raw
            .into_iter()
            .map(|(key, station)| Self::convert_station(key, station))
            .collect::<Result<Vec<_>, _>>()?;

        let graph = HideoutGraph::new(stations)?;
        tracing::debug!(
            source = source_name,
            stations = graph.len(),
            edges = graph.prerequisite_edges().count(),
            "hideout graph built"
        );
        Ok(graph)
    }

    fn convert_station(key: String, raw: RawStation) -> Result<Station, HideoutError> {
        if raw.id != key {
            return Err(HideoutError::InvalidStation {
                reason: format!("entry is keyed '{}' but declares id '{}'", key, raw.id),
                station: key,
            });
        }

        let id = StationId::new(raw.id).map_err(|e| HideoutError::InvalidStation {
            station: key.clone(),
            reason: e.to_string(),
        })?;

        let stations = raw
            .prerequisites
            .stations
            .into_iter()
            .map(|prerequisite| {
                StationId::new(prerequisite).map_err(|e| HideoutError::InvalidStation {
                    station: key.clone(),
                    reason: format!("invalid prerequisite station: {}", e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let prerequisites = Prerequisites {
            items: raw.prerequisites.items,
            skills: raw.prerequisites.skills,
            traders: raw.prerequisites.traders,
            stations,
        };

        Ok(Station::new(id, raw.name, raw.lvl, prerequisites).with_geometry(raw.geometry))
    }
}
