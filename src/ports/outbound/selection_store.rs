use crate::shared::Result;

/// Key holding the comma-joined pinned station ids
pub const HIGHLIGHTED_STATIONS_KEY: &str = "highlightedStations";

/// Key holding the id of the station whose click pinned the selection
pub const CLICKED_STATION_KEY: &str = "clickedStation";

/// SelectionStore port: a string key/value store that survives restarts
///
/// Failures are reported but callers treat them as non-fatal; the
/// selection keeps working in memory.
pub trait SelectionStore {
    /// Reads a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// No durable storage: reads find nothing and writes are dropped
impl SelectionStore for () {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}
