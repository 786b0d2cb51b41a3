/// Request/response bodies for the plan endpoints.
use crate::types::{Plan, PlanRouter};

/// Serialize a plan into a `POST /plans` request body.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn encode_plan(plan: &Plan) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(plan)
}

/// Decode a `GET /plans/routers` response body, preserving response order.
///
/// # Errors
///
/// Returns `serde_json::Error` if the body is not a JSON array of routers.
pub fn decode_routers(body: &[u8]) -> Result<Vec<PlanRouter>, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decodes_to_same_plan() {
        let plan = Plan {
            name: "myplan".to_owned(),
            memory: 4_194_304,
            swap: 512,
            cpu_share: 100,
            default: true,
            router: "myrouter".to_owned(),
        };
        let body = encode_plan(&plan).unwrap();
        let decoded: Plan = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded, plan);
    }

    #[test]
    fn test_decode_routers_keeps_order() {
        let body = br#"[{"Name":"zeta","Type":"b"},{"Name":"alpha","Type":"a"}]"#;
        let routers = decode_routers(body).unwrap();
        let names: Vec<&str> = routers.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_decode_routers_empty() {
        assert!(decode_routers(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_routers_malformed() {
        assert!(decode_routers(b"{not json").is_err());
        assert!(decode_routers(br#"{"Name":"x","Type":"y"}"#).is_err());
    }
}
