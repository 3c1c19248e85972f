//! Shape of the forecast request and response, plus the structural
//! descriptor handed to the generation provider. Field names are camelCase
//! on the wire; that casing is part of the generation contract, not a
//! styling choice.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

/// The strategy list must carry between two and three entries, in display
/// order.
pub const MIN_STRATEGY_STEPS: usize = 2;
pub const MAX_STRATEGY_STEPS: usize = 3;

/// Numeric state of the pioneer plus their free-form goal. Constructed
/// fresh per submission and never persisted. Range constraints (rates ≥ 0,
/// active members ≤ team size) are the caller's responsibility; the
/// pipeline takes the input as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInput {
    /// π mined per hour right now.
    pub current_rate: f64,
    /// Total referred members.
    pub team_size: u32,
    /// Members currently mining.
    pub active_team_members: u32,
    /// The pioneer's goal, e.g. "How can I double my rate?".
    pub question: String,
}

/// Projected rate and horizon. `new_mining_rate` is deliberately a display
/// string ("0.35 π/hr"): the model produces free text, and the UI shows it
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateProjection {
    pub new_mining_rate: String,
    pub timeline: String,
}

/// The structured answer shown on the forecast card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastOutput {
    /// One or two sentences summarizing the current state.
    pub insight: String,
    /// 2-3 recommended actions; order is meaningful.
    pub strategy: Vec<String>,
    pub forecast: RateProjection,
}

impl ForecastOutput {
    /// Post-call shape validation: deserialization already pins field names
    /// and types, this checks the constraints a JSON type system cannot.
    pub fn conforms(&self) -> std::result::Result<(), String> {
        if self.insight.trim().is_empty() {
            return Err("insight is empty".to_string());
        }
        if self.strategy.len() < MIN_STRATEGY_STEPS || self.strategy.len() > MAX_STRATEGY_STEPS {
            return Err(format!(
                "strategy must have {MIN_STRATEGY_STEPS}-{MAX_STRATEGY_STEPS} entries, got {}",
                self.strategy.len()
            ));
        }
        if self.strategy.iter().any(|s| s.trim().is_empty()) {
            return Err("strategy contains an empty entry".to_string());
        }
        if self.forecast.new_mining_rate.trim().is_empty() {
            return Err("forecast.newMiningRate is empty".to_string());
        }
        if self.forecast.timeline.trim().is_empty() {
            return Err("forecast.timeline is empty".to_string());
        }
        Ok(())
    }
}

/// The descriptor the provider is asked to constrain its output to:
/// field names, types, and strategy cardinality.
pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "insight": { "type": "string" },
            "strategy": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": MIN_STRATEGY_STEPS,
                "maxItems": MAX_STRATEGY_STEPS
            },
            "forecast": {
                "type": "object",
                "properties": {
                    "newMiningRate": { "type": "string" },
                    "timeline": { "type": "string" }
                },
                "required": ["newMiningRate", "timeline"]
            }
        },
        "required": ["insight", "strategy", "forecast"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_formed() -> ForecastOutput {
        ForecastOutput {
            insight: "You have strong team potential.".to_string(),
            strategy: vec![
                "Invite 5 more active members".to_string(),
                "Join a security circle".to_string(),
            ],
            forecast: RateProjection {
                new_mining_rate: "0.35 π/hr".to_string(),
                timeline: "within 6 weeks".to_string(),
            },
        }
    }

    #[test]
    fn well_formed_output_conforms() {
        assert!(well_formed().conforms().is_ok());
    }

    #[test]
    fn single_strategy_entry_is_rejected() {
        let mut out = well_formed();
        out.strategy.truncate(1);
        assert!(out.conforms().is_err());
    }

    #[test]
    fn four_strategy_entries_are_rejected() {
        let mut out = well_formed();
        out.strategy.push("Run a node".to_string());
        out.strategy.push("Verify your account".to_string());
        assert!(out.conforms().is_err());
    }

    #[test]
    fn blank_insight_is_rejected() {
        let mut out = well_formed();
        out.insight = "  ".to_string();
        assert!(out.conforms().is_err());
    }

    #[test]
    fn output_round_trips_with_camel_case_keys() {
        let json = serde_json::to_value(well_formed()).unwrap();
        assert!(json.get("forecast").unwrap().get("newMiningRate").is_some());

        let parsed: ForecastOutput = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, well_formed());
    }

    #[test]
    fn input_serializes_with_camel_case_keys() {
        let input = ForecastInput {
            current_rate: 0.02,
            team_size: 20,
            active_team_members: 5,
            question: "How can I double my rate?".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("currentRate").is_some());
        assert!(json.get("activeTeamMembers").is_some());
    }

    #[test]
    fn descriptor_pins_strategy_cardinality() {
        let schema = output_schema();
        assert_eq!(schema["properties"]["strategy"]["minItems"], 2);
        assert_eq!(schema["properties"]["strategy"]["maxItems"], 3);
        assert_eq!(schema["required"][0], "insight");
    }
}
