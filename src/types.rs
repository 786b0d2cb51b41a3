/// Shared serializable payload types for all commands.
///
/// Field names follow the platform API's JSON shape (`PascalCase` keys), so these
/// types go over the wire as-is.
use serde::{Deserialize, Serialize};

/// A named resource-limit profile, as submitted by `plan-create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Plan {
    /// Plan identifier, unique within the platform.
    pub name: String,
    /// Memory limit in bytes. 0 means unset.
    pub memory: i64,
    /// Swap limit in bytes. 0 means unset.
    pub swap: i64,
    /// Relative CPU weight.
    pub cpu_share: i64,
    /// Whether this plan is used when none is specified.
    pub default: bool,
    /// Router to associate, or empty for none.
    pub router: String,
}

/// A router available for plan creation, as returned by `router-list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRouter {
    /// Router name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Router backend type (e.g. "hipache", "galeb").
    #[serde(rename = "Type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_wire_keys() {
        let plan = Plan {
            name: "myplan".to_owned(),
            cpu_share: 100,
            ..Plan::default()
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Name": "myplan",
                "Memory": 0,
                "Swap": 0,
                "CpuShare": 100,
                "Default": false,
                "Router": "",
            })
        );
    }

    #[test]
    fn test_router_wire_keys() {
        let router: PlanRouter =
            serde_json::from_str(r#"{"Name":"router1","Type":"foo"}"#).unwrap();
        assert_eq!(router.name, "router1");
        assert_eq!(router.kind, "foo");
    }
}
