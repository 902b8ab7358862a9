use super::describe;
use crate::dtos::{IncidentRecord, IncidentSet};
use std::fmt::Write;

fn render_incident(out: &mut String, id: &str, record: &IncidentRecord) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "Incident ID: {}\n\
         Summary: {}\n\
         Description: {}\n\
         Type: {}\n\
         Criticality: {}\n\
         Road Closed: {}\n\
         Start Time: {}\n\
         End Time: {}\n\n",
        id,
        describe(record.summary.as_ref()),
        describe(record.description.as_ref()),
        describe(record.incident_type.as_ref()),
        describe(record.criticality.as_ref()),
        describe(record.road_closed.as_ref()),
        describe(record.start_time.as_ref()),
        describe(record.end_time.as_ref()),
    );
}

pub fn render_incidents_prompt(incidents: &IncidentSet) -> String {
    let mut blocks = String::new();
    for (id, record) in incidents.iter() {
        render_incident(&mut blocks, id, record);
    }
    if incidents.is_empty() {
        blocks.push_str("No incidents have been reported.\n");
    }

    format!(
        "You are my summarizer chatbot who helps me with summarizing incidents in an area.\n\
         You have to summarize the following incidents into 1 small paragraph:\n\
         \n\
         {blocks}"
    )
}
