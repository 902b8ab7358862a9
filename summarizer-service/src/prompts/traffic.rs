use crate::dtos::TrafficReading;

const TRAFFIC_GLOSSARY: &str = "\
speed: This parameter represents the current speed of traffic in the area, measured in meters per second (m/s) or kilometers per hour (km/h).

speedUncapped: Similar to \"speed\", this parameter also represents the current speed of traffic but without any speed limits applied.

freeFlow: This parameter represents the expected speed of traffic under ideal conditions or free-flowing conditions. It serves as a reference point for comparing the current traffic speed.

jamFactor: This parameter indicates the level of congestion or traffic density in the area. It is often represented as a value between 0 and 1, where 0 indicates no congestion (free-flowing traffic) and 1 indicates severe congestion (traffic jam).

confidence: This parameter indicates the confidence level or reliability of the traffic data provided. It is often represented as a value between 0 and 1, where 1 indicates high confidence in the data accuracy.

traversability: This parameter describes the overall condition of the road or route in terms of its accessibility or openness. It can have values like \"open\", \"closed\", \"restricted\", etc., indicating whether the road is passable or not.";

pub fn render_traffic_prompt(reading: &TrafficReading) -> String {
    let values = format!(
        "speed = {} km/h. speedUncapped = {} km/h. freeFlow = {} km/h. \
         jamFactor = {}. confidence = {}. traversability = {}.",
        reading.speed,
        reading.speed_uncapped,
        reading.free_flow,
        reading.jam_factor,
        reading.confidence,
        reading.traversability,
    );

    format!(
        "You are my summarizer chatbot who helps me with summarizing travel-related data I have.\n\
         You have to summarize this text: {values} into 1 small paragraph.\n\
         \n\
         Here are details about the metrics used in the text above:\n\
         {TRAFFIC_GLOSSARY}\n"
    )
}
