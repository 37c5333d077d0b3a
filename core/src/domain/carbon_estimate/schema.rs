use serde_json::json;

/// Returns the JSON schema for carbon estimate LLM responses
pub fn get_carbon_estimate_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dish": { "type": "string" },
            "estimated_carbon_kg": { "type": "number" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "carbon_kg": { "type": "number" }
                    },
                    "required": ["name", "carbon_kg"]
                }
            }
        },
        "required": ["dish", "estimated_carbon_kg", "ingredients"]
    })
}
