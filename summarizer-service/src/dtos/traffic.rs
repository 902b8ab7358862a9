use serde::Deserialize;
use serde_json::Number;
use validator::{Validate, ValidationErrors};

/// Raw `/traffic` body. Every field is optional here so that a missing key
/// surfaces as a validation failure rather than a decoding error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrafficRequest {
    #[validate(required)]
    pub speed: Option<Number>,
    #[validate(required)]
    pub speed_uncapped: Option<Number>,
    #[validate(required)]
    pub free_flow: Option<Number>,
    #[validate(required)]
    pub jam_factor: Option<Number>,
    #[validate(required)]
    pub confidence: Option<Number>,
    #[validate(required)]
    pub traversability: Option<String>,
}

/// A traffic flow sample with every field present.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficReading {
    /// km/h
    pub speed: Number,
    /// km/h, ignoring speed limits
    pub speed_uncapped: Number,
    /// km/h under free-flowing conditions
    pub free_flow: Number,
    /// 0 (free-flowing) to 1 (severe jam)
    pub jam_factor: Number,
    /// 0 to 1
    pub confidence: Number,
    pub traversability: String,
}

impl TryFrom<TrafficRequest> for TrafficReading {
    type Error = ValidationErrors;

    fn try_from(request: TrafficRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let TrafficRequest {
            speed: Some(speed),
            speed_uncapped: Some(speed_uncapped),
            free_flow: Some(free_flow),
            jam_factor: Some(jam_factor),
            confidence: Some(confidence),
            traversability: Some(traversability),
        } = request
        else {
            return Err(ValidationErrors::new());
        };

        Ok(TrafficReading {
            speed,
            speed_uncapped,
            free_flow,
            jam_factor,
            confidence,
            traversability,
        })
    }
}
