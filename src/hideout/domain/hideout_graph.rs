use super::{Station, StationId};
use crate::shared::error::HideoutError;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// HideoutGraph aggregate: every station keyed by id, in dataset order.
///
/// Construction validates the whole dataset up front. A graph that exists
/// has unique ids, no dangling station references and no cycles, and it is
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct HideoutGraph {
    stations: IndexMap<StationId, Station>,
}

impl HideoutGraph {
    pub fn new(stations: Vec<Station>) -> Result<Self, HideoutError> {
        let mut by_id = IndexMap::with_capacity(stations.len());
        for station in stations {
            let id = station.id().clone();
            if by_id.insert(id.clone(), station).is_some() {
                return Err(HideoutError::InvalidStation {
                    station: id.to_string(),
                    reason: "duplicate station id".to_string(),
                });
            }
        }

        let graph = Self { stations: by_id };
        graph.validate_references()?;
        graph.validate_acyclic()?;
        Ok(graph)
    }

    fn validate_references(&self) -> Result<(), HideoutError> {
        for station in self.stations.values() {
            for prerequisite in station.required_stations() {
                if !self.stations.contains_key(prerequisite) {
                    return Err(HideoutError::DanglingPrerequisite {
                        station: station.id().to_string(),
                        prerequisite: prerequisite.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Kahn's algorithm over the "requires" edges; anything left unprocessed sits on a cycle.
    fn validate_acyclic(&self) -> Result<(), HideoutError> {
        let mut pending: Vec<usize> = self
            .stations
            .values()
            .map(|station| station.required_stations().len())
            .collect();

        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); self.stations.len()];
        for (index, station) in self.stations.values().enumerate() {
            for prerequisite in station.required_stations() {
                if let Some(prereq_index) = self.stations.get_index_of(prerequisite) {
                    dependents[prereq_index].push(index);
                }
            }
        }

        let mut ready: VecDeque<usize> = pending
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == 0)
            .map(|(index, _)| index)
            .collect();

        let mut processed = 0;
        while let Some(index) = ready.pop_front() {
            processed += 1;
            for &dependent in &dependents[index] {
                pending[dependent] -= 1;
                if pending[dependent] == 0 {
                    ready.push_back(dependent);
                }
            }
        }

        if processed == self.stations.len() {
            return Ok(());
        }

        let station = pending
            .iter()
            .position(|count| *count > 0)
            .and_then(|index| self.stations.get_index(index))
            .map(|(id, _)| id.to_string())
            .unwrap_or_default();
        Err(HideoutError::CyclicDependency { station })
    }

    pub fn get(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Looks up a station, reporting `UnknownStation` when it is absent
    pub fn station(&self, id: &str) -> Result<&Station, HideoutError> {
        self.get(id).ok_or_else(|| HideoutError::UnknownStation { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stations.contains_key(id)
    }

    /// Returns the graph's own id value for a raw string, if present
    pub fn resolve_id(&self, id: &str) -> Option<&StationId> {
        self.stations.get_key_value(id).map(|(key, _)| key)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn station_ids(&self) -> impl Iterator<Item = &StationId> {
        self.stations.keys()
    }

    /// Every prerequisite edge as `(prerequisite, dependent)`
    pub fn prerequisite_edges(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.stations.values().flat_map(|station| {
            station
                .required_stations()
                .iter()
                .map(move |prerequisite| (prerequisite, station.id()))
        })
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hideout::domain::Prerequisites;

    fn id(value: &str) -> StationId {
        StationId::new(value).unwrap()
    }

    fn station(value: &str, requires: &[&str]) -> Station {
        let prereqs = requires
            .iter()
            .fold(Prerequisites::new(), |acc, r| acc.with_station(id(r)));
        Station::new(id(value), value.to_uppercase(), 1, prereqs)
    }

    #[test]
    fn test_graph_keeps_dataset_order() {
        let graph = HideoutGraph::new(vec![
            station("c", &["b"]),
            station("a", &[]),
            station("b", &["a"]),
        ])
        .unwrap();

        let ids: Vec<&str> = graph.station_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(graph.len(), 3);
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_graph_lookup() {
        let graph = HideoutGraph::new(vec![station("a", &[])]).unwrap();
        assert!(graph.contains("a"));
        assert_eq!(graph.get("a").unwrap().name(), "A");
        assert!(graph.get("z").is_none());
        assert_eq!(
            graph.station("z").unwrap_err(),
            HideoutError::UnknownStation { id: "z".to_string() }
        );
        assert_eq!(graph.resolve_id("a"), Some(&id("a")));
    }

    #[test]
    fn test_graph_rejects_duplicate_ids() {
        let err = HideoutGraph::new(vec![station("a", &[]), station("a", &[])]).unwrap_err();
        assert!(matches!(err, HideoutError::InvalidStation { .. }));
    }

    #[test]
    fn test_graph_rejects_dangling_prerequisite() {
        let err = HideoutGraph::new(vec![station("b", &["a"])]).unwrap_err();
        assert_eq!(
            err,
            HideoutError::DanglingPrerequisite {
                station: "b".to_string(),
                prerequisite: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_graph_rejects_self_reference() {
        let err = HideoutGraph::new(vec![station("a", &["a"])]).unwrap_err();
        assert_eq!(err, HideoutError::CyclicDependency { station: "a".to_string() });
    }

    #[test]
    fn test_graph_rejects_longer_cycle() {
        let err = HideoutGraph::new(vec![
            station("root", &[]),
            station("a", &["c", "root"]),
            station("b", &["a"]),
            station("c", &["b"]),
        ])
        .unwrap_err();
        assert_eq!(err, HideoutError::CyclicDependency { station: "a".to_string() });
    }

    #[test]
    fn test_graph_accepts_diamond() {
        let graph = HideoutGraph::new(vec![
            station("a", &[]),
            station("b", &["a"]),
            station("c", &["a"]),
            station("d", &["b", "c"]),
        ]);
        assert!(graph.is_ok());
    }

    #[test]
    fn test_prerequisite_edges() {
        let graph = HideoutGraph::new(vec![
            station("a", &[]),
            station("b", &["a"]),
            station("c", &["a", "b"]),
        ])
        .unwrap();

        let edges: Vec<(&str, &str)> = graph
            .prerequisite_edges()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect();
        assert_eq!(edges, vec![("a", "b"), ("a", "c"), ("b", "c")]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = HideoutGraph::new(vec![]).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.prerequisite_edges().count(), 0);
    }
}
