use crate::dtos::WeatherReading;

const WEATHER_GLOSSARY: &str = "\
City: The name of the city for which the weather data is provided.

Temperature: The current temperature in Celsius.

Feels Like: The \"feels like\" temperature, which takes into account factors like wind and humidity.

Min Temperature: The minimum temperature expected for the day.

Max Temperature: The maximum temperature expected for the day.

Weather: A description of the current weather conditions.

Pressure: The atmospheric pressure in hPa (hectopascal).

Humidity: The relative humidity percentage.

Visibility: The visibility distance in meters.

Wind Speed: The speed of the wind in meters per second.

Wind Degree: The direction of the wind in degrees.

Wind Gust: The maximum wind gust speed in meters per second.

Cloudiness: The percentage of cloud cover.

Sunrise: The time of sunrise.

Sunset: The time of sunset.";

pub fn render_weather_prompt(reading: &WeatherReading) -> String {
    let values = format!(
        "City: {}, Temperature: {}, Feels Like: {}, Min Temperature: {}, \
         Max Temperature: {}, Weather: {}, Pressure: {}, Humidity: {}, \
         Visibility: {}, Wind Speed: {}, Wind Degree: {}, Wind Gust: {}, \
         Cloudiness: {}, Sunrise: {}, Sunset: {}.",
        reading.city,
        reading.temperature,
        reading.feels_like,
        reading.min_temperature,
        reading.max_temperature,
        reading.weather,
        reading.pressure,
        reading.humidity,
        reading.visibility,
        reading.wind_speed,
        reading.wind_degree,
        reading.wind_gust,
        reading.cloudiness,
        reading.sunrise,
        reading.sunset,
    );

    format!(
        "You are my summarizer chatbot who helps me with summarizing weather-related data I have.\n\
         You have to summarize this text: {values} into 1 small paragraph.\n\
         \n\
         Here are the details about the weather parameters:\n\
         {WEATHER_GLOSSARY}\n"
    )
}
