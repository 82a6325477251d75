//! Wire types of the disaster query service.
//!
//! - `GET /search?term=..` returns `[SearchHit]`
//! - `GET /disaster/<id>` returns [`DisasterDetail`]
//! - `POST /chat` takes [`ChatRequest`] and returns [`ChatReply`]
//!
//! Search rows come straight from the service's tabular data, so the field
//! names mirror the dataset columns.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Accept a year sent as an integer, a float or a string.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// One row of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "Year", default, deserialize_with = "lenient_year")]
    pub year: Option<i64>,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "Disaster Type", default)]
    pub disaster_type: String,
    #[serde(rename = "Total Deaths", default)]
    pub total_deaths: Option<f64>,
    #[serde(rename = "Total Affected", default)]
    pub total_affected: Option<f64>,
    /// Every other column the service sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchHit {
    /// `"{Year} - {Country} - {Disaster Type}"`, as listed in the result picker.
    pub fn label(&self) -> String {
        let year = self.year.map(|y| y.to_string()).unwrap_or_default();
        format!("{} - {} - {}", year, self.country, self.disaster_type)
    }
}

/// A disaster with its generated narrative text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterDetail {
    pub disaster: SearchHit,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub public_info: String,
    #[serde(default)]
    pub engagement: String,
    #[serde(default)]
    pub education: String,
}

impl DisasterDetail {
    pub fn narrative(&self, tab: NarrativeTab) -> &str {
        match tab {
            NarrativeTab::Summary => &self.summary,
            NarrativeTab::PublicInfo => &self.public_info,
            NarrativeTab::Engagement => &self.engagement,
            NarrativeTab::Education => &self.education,
        }
    }
}

/// The four narrative sections of a disaster detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NarrativeTab {
    #[default]
    Summary,
    PublicInfo,
    Engagement,
    Education,
}

impl NarrativeTab {
    pub const ALL: [NarrativeTab; 4] = [
        NarrativeTab::Summary,
        NarrativeTab::PublicInfo,
        NarrativeTab::Engagement,
        NarrativeTab::Education,
    ];

    pub fn tab_label(&self) -> &'static str {
        match self {
            NarrativeTab::Summary => "Summary",
            NarrativeTab::PublicInfo => "Public Information",
            NarrativeTab::Engagement => "Citizen Engagement",
            NarrativeTab::Education => "Educational Content",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            NarrativeTab::Summary => "Disaster Summary",
            NarrativeTab::PublicInfo => "Public Information and Updates",
            NarrativeTab::Engagement => "Citizen Engagement Plan",
            NarrativeTab::Education => "Educational Content",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest<'a> {
    /// Index into the search results the question is about.
    pub disaster_id: usize,
    pub question: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hit_accepts_service_rows() {
        let body = r#"[
            {"Year": 2020, "Country": "United States of America", "Disaster Type": "Flood",
             "Total Deaths": 5.0, "Total Affected": null, "Region": "Northern America"},
            {"Year": "2011", "Country": "Japan", "Disaster Type": "Earthquake"},
            {"Year": 2019.0, "Country": "Bangladesh", "Disaster Type": "Storm"}
        ]"#;
        let hits: Vec<SearchHit> = serde_json::from_str(body).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].label(), "2020 - United States of America - Flood");
        assert_eq!(hits[0].total_deaths, Some(5.0));
        assert_eq!(hits[0].total_affected, None);
        assert_eq!(hits[0].extra.get("Region").and_then(|v| v.as_str()), Some("Northern America"));
        assert_eq!(hits[1].year, Some(2011));
        assert_eq!(hits[2].year, Some(2019));
    }

    #[test]
    fn test_detail_exposes_each_narrative() {
        let body = r#"{
            "disaster": {"Year": 2018, "Country": "Japan", "Disaster Type": "Flood", "Total Deaths": 246},
            "summary": "s", "public_info": "p", "engagement": "e", "education": "d"
        }"#;
        let detail: DisasterDetail = serde_json::from_str(body).unwrap();
        let texts: Vec<&str> = NarrativeTab::ALL.iter().map(|t| detail.narrative(*t)).collect();
        assert_eq!(texts, vec!["s", "p", "e", "d"]);
        assert_eq!(detail.disaster.year, Some(2018));
    }

    #[test]
    fn test_chat_request_shape() {
        let body = serde_json::to_value(ChatRequest {
            disaster_id: 3,
            question: "How many were evacuated?",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"disaster_id": 3, "question": "How many were evacuated?"})
        );
    }
}
