use crate::hideout::domain::{HideoutGraph, StationId, StationSet};
use crate::shared::error::HideoutError;
use dashmap::DashMap;
use std::sync::Arc;

/// ClosureResolver computes the stations that must exist before a station can be built
///
/// The closure is reflexive: it starts with the station itself. Since the
/// graph never changes after load, each closure is computed once and cached
/// for the resolver's lifetime.
pub struct ClosureResolver {
    graph: Arc<HideoutGraph>,
    cache: DashMap<StationId, StationSet>,
}

impl ClosureResolver {
    pub fn new(graph: Arc<HideoutGraph>) -> Self {
        Self {
            graph,
            cache: DashMap::new(),
        }
    }

    pub fn graph(&self) -> &HideoutGraph {
        &self.graph
    }

    /// Returns the closure of `station_id`, computing it on first use
    ///
    /// # Errors
    /// `UnknownStation` if the id is not in the graph
    pub fn closure(&self, station_id: &str) -> Result<StationSet, HideoutError> {
        if let Some(cached) = self.cache.get(station_id) {
            return Ok(cached.value().clone());
        }

        let closure = Self::compute(&self.graph, station_id)?;
        let key = closure
            .first()
            .cloned()
            .ok_or_else(|| HideoutError::UnknownStation {
                id: station_id.to_string(),
            })?;
        self.cache.insert(key, closure.clone());
        Ok(closure)
    }

    /// Uncached traversal.
    ///
    /// Stack-based: a popped station joins the result and pushes every direct
    /// prerequisite that is neither visited nor already waiting on the
    /// stack. The result starts with `station_id` and then lists
    /// prerequisites in pop order.
    pub fn compute(graph: &HideoutGraph, station_id: &str) -> Result<StationSet, HideoutError> {
        let start = graph
            .resolve_id(station_id)
            .ok_or_else(|| HideoutError::UnknownStation {
                id: station_id.to_string(),
            })?;

        let mut result = StationSet::new();
        let mut stack: Vec<&StationId> = vec![start];

        while let Some(current) = stack.pop() {
            result.insert(current.clone());

            // Presence of every prerequisite was checked when the graph was built
            let Some(station) = graph.get(current.as_str()) else {
                continue;
            };
            for prerequisite in station.required_stations() {
                if !result.contains(prerequisite) && !stack.contains(&prerequisite) {
                    stack.push(prerequisite);
                }
            }
        }

        Ok(result)
    }

    /// Number of memoized closures
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hideout::domain::{Prerequisites, Station};

    fn id(value: &str) -> StationId {
        StationId::new(value).unwrap()
    }

    fn station(value: &str, requires: &[&str]) -> Station {
        let prereqs = requires
            .iter()
            .fold(Prerequisites::new(), |acc, r| acc.with_station(id(r)));
        Station::new(id(value), value, 1, prereqs)
    }

    fn abc_graph() -> Arc<HideoutGraph> {
        Arc::new(
            HideoutGraph::new(vec![
                station("A", &[]),
                station("B", &["A"]),
                station("C", &["B"]),
            ])
            .unwrap(),
        )
    }

    fn diamond_graph() -> Arc<HideoutGraph> {
        Arc::new(
            HideoutGraph::new(vec![
                station("root", &[]),
                station("left", &["root"]),
                station("right", &["root"]),
                station("top", &["left", "right"]),
                station("other", &[]),
            ])
            .unwrap(),
        )
    }

    fn ids(set: &StationSet) -> Vec<&str> {
        set.iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_closure_of_chain() {
        let resolver = ClosureResolver::new(abc_graph());
        let closure = resolver.closure("C").unwrap();
        assert_eq!(ids(&closure), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_closure_of_leaf_is_singleton() {
        let resolver = ClosureResolver::new(abc_graph());
        assert_eq!(ids(&resolver.closure("A").unwrap()), vec!["A"]);
    }

    #[test]
    fn test_closure_visits_shared_prerequisite_once() {
        let resolver = ClosureResolver::new(diamond_graph());
        let closure = resolver.closure("top").unwrap();
        // "right" is pushed last, so it pops first
        assert_eq!(ids(&closure), vec!["top", "right", "root", "left"]);
    }

    #[test]
    fn test_closure_unknown_station() {
        let resolver = ClosureResolver::new(abc_graph());
        assert_eq!(
            resolver.closure("Z").unwrap_err(),
            HideoutError::UnknownStation { id: "Z".to_string() }
        );
        assert_eq!(resolver.cached_count(), 0);
    }

    #[test]
    fn test_closure_is_memoized() {
        let resolver = ClosureResolver::new(abc_graph());
        let first = resolver.closure("C").unwrap();
        assert_eq!(resolver.cached_count(), 1);
        let second = resolver.closure("C").unwrap();
        assert_eq!(resolver.cached_count(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_closure_contains_self_and_prerequisite_closures() {
        let graph = diamond_graph();
        let resolver = ClosureResolver::new(graph.clone());

        for station in graph.stations() {
            let closure = resolver.closure(station.id().as_str()).unwrap();
            assert!(closure.contains(station.id()));
            for prerequisite in station.required_stations() {
                let prereq_closure = resolver.closure(prerequisite.as_str()).unwrap();
                assert!(prereq_closure.is_subset(&closure));
            }
        }
    }

    #[test]
    fn test_cached_and_uncached_agree() {
        let graph = diamond_graph();
        let resolver = ClosureResolver::new(graph.clone());
        for station in graph.station_ids() {
            assert_eq!(
                resolver.closure(station.as_str()).unwrap(),
                ClosureResolver::compute(&graph, station.as_str()).unwrap()
            );
        }
    }
}
