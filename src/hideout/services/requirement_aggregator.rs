use crate::hideout::domain::{HideoutGraph, RequirementSummary, Station, StationId};

/// RequirementAggregator totals the direct requirements of a set of stations
///
/// Pure business logic with no I/O. Each station contributes its own direct
/// items, skills and traders exactly once; because the input is a set, a
/// station shared by several closures is never counted twice.
pub struct RequirementAggregator;

impl RequirementAggregator {
    /// Aggregates the requirements of `stations`, iterated in the given order
    ///
    /// Ids missing from the graph are skipped with a warning.
    pub fn aggregate<'a, I>(graph: &HideoutGraph, stations: I) -> RequirementSummary
    where
        I: IntoIterator<Item = &'a StationId>,
    {
        let mut summary = RequirementSummary::new();
        for id in stations {
            match graph.get(id.as_str()) {
                Some(station) => Self::add_station(&mut summary, station),
                None => tracing::warn!(station = %id, "skipping unknown station in requirement summary"),
            }
        }
        summary
    }

    /// Direct requirements of a single station
    pub fn station_requirements(station: &Station) -> RequirementSummary {
        let mut summary = RequirementSummary::new();
        Self::add_station(&mut summary, station);
        summary
    }

    fn add_station(summary: &mut RequirementSummary, station: &Station) {
        let prerequisites = station.prerequisites();
        // Repeated entries for one item within a station are additive too
        for item in &prerequisites.items {
            summary.add_item(&item.item, item.amount);
        }
        for skill in &prerequisites.skills {
            summary.require_skill(&skill.name, skill.lvl);
        }
        for trader in &prerequisites.traders {
            summary.require_trader(&trader.name, trader.lvl);
        }
    }
}
