//! Prompt rendering: deterministic substitution of the forecast input into
//! a fixed instructional template. Pure function, no failure modes.

use crate::schema::ForecastInput;

/// Renders the prompt sent to the generation provider. The template embeds
/// formatting guidance and a worked example so the model has a concrete
/// target shape in addition to the response schema.
pub fn render(input: &ForecastInput) -> String {
    format!(
        r#"You are an expert mining strategist for the Pi Network. A pioneer has asked for a personalized forecast of their mining progress.

Their current mining data:
- Current mining rate: {current_rate} Pi per hour
- Total earning team size: {team_size} members
- Currently active team members: {active_team_members}

Their goal, in their own words: "{question}"

Analyze the data and answer with:
1. "insight": one or two sentences summarizing their current position.
2. "strategy": 2 to 3 concrete recommended actions, most impactful first.
3. "forecast": an object with "newMiningRate", a rate string with unit such as "0.35 π/hr", and "timeline", a plain-language horizon such as "within 6 weeks".

Example of a well-formed answer:
{{"insight": "You have strong team potential.", "strategy": ["Invite 5 more active members", "Join a security circle"], "forecast": {{"newMiningRate": "0.35 π/hr", "timeline": "within 6 weeks"}}}}

Keep the tone encouraging and specific to the numbers above. Respond with JSON only."#,
        current_rate = input.current_rate,
        team_size = input.team_size,
        active_team_members = input.active_team_members,
        question = input.question,
    )
}
