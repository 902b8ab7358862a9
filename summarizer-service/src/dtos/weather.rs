use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use validator::{Validate, ValidationErrors};

/// Sunrise/sunset as sent by the caller: a formatted time or a unix timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Timestamp(Number),
    Text(String),
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeValue::Timestamp(n) => write!(f, "{}", n),
            TimeValue::Text(s) => f.write_str(s),
        }
    }
}

/// Raw `/weather` body. Accepts both camelCase keys and the title-case keys
/// produced by common weather feeds (`"Feels Like"`, `"Wind Gust"`, ...).
/// Sending both spellings of one field is a duplicate-field decode error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRequest {
    #[validate(required)]
    #[serde(alias = "City")]
    pub city: Option<String>,
    #[validate(required)]
    #[serde(alias = "Temperature")]
    pub temperature: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Feels Like")]
    pub feels_like: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Min Temperature")]
    pub min_temperature: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Max Temperature")]
    pub max_temperature: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Weather")]
    pub weather: Option<String>,
    #[validate(required)]
    #[serde(alias = "Pressure")]
    pub pressure: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Humidity")]
    pub humidity: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Visibility")]
    pub visibility: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Wind Speed")]
    pub wind_speed: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Wind Degree")]
    pub wind_degree: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Wind Gust")]
    pub wind_gust: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Cloudiness")]
    pub cloudiness: Option<Number>,
    #[validate(required)]
    #[serde(alias = "Sunrise")]
    pub sunrise: Option<TimeValue>,
    #[validate(required)]
    #[serde(alias = "Sunset")]
    pub sunset: Option<TimeValue>,
}

/// Current conditions for one city with every field present.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    /// °C
    pub temperature: Number,
    pub feels_like: Number,
    pub min_temperature: Number,
    pub max_temperature: Number,
    pub weather: String,
    /// hPa
    pub pressure: Number,
    /// %
    pub humidity: Number,
    /// meters
    pub visibility: Number,
    /// m/s
    pub wind_speed: Number,
    /// degrees
    pub wind_degree: Number,
    /// m/s
    pub wind_gust: Number,
    /// %
    pub cloudiness: Number,
    pub sunrise: TimeValue,
    pub sunset: TimeValue,
}

impl TryFrom<WeatherRequest> for WeatherReading {
    type Error = ValidationErrors;

    fn try_from(request: WeatherRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let WeatherRequest {
            city: Some(city),
            temperature: Some(temperature),
            feels_like: Some(feels_like),
            min_temperature: Some(min_temperature),
            max_temperature: Some(max_temperature),
            weather: Some(weather),
            pressure: Some(pressure),
            humidity: Some(humidity),
            visibility: Some(visibility),
            wind_speed: Some(wind_speed),
            wind_degree: Some(wind_degree),
            wind_gust: Some(wind_gust),
            cloudiness: Some(cloudiness),
            sunrise: Some(sunrise),
            sunset: Some(sunset),
        } = request
        else {
            return Err(ValidationErrors::new());
        };

        Ok(WeatherReading {
            city,
            temperature,
            feels_like,
            min_temperature,
            max_temperature,
            weather,
            pressure,
            humidity,
            visibility,
            wind_speed,
            wind_degree,
            wind_gust,
            cloudiness,
            sunrise,
            sunset,
        })
    }
}
