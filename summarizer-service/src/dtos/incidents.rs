use serde::Deserialize;
use serde_json::{Map, Value};

/// One reported road event. Nothing is required and no field is type checked;
/// absent or `null` fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    pub description: Option<Value>,
    pub summary: Option<Value>,
    #[serde(rename = "type")]
    pub incident_type: Option<Value>,
    pub criticality: Option<Value>,
    pub road_closed: Option<Value>,
    pub start_time: Option<Value>,
    pub end_time: Option<Value>,
}

/// `/incidents` body: incident id to record, in the order the caller sent them.
///
/// Backed by an insertion-ordered `serde_json::Map`, so a repeated id keeps its
/// first position and takes the last record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct IncidentSet(Vec<(String, IncidentRecord)>);

impl IncidentSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IncidentRecord)> {
        self.0.iter().map(|(id, record)| (id.as_str(), record))
    }
}

impl TryFrom<Map<String, Value>> for IncidentSet {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(id, value)| {
                serde_json::from_value(value)
                    .map(|record| (id.clone(), record))
                    .map_err(|e| format!("incident {}: {}", id, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(IncidentSet)
    }
}
