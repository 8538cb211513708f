use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::RecordRef;

/// Pilot seniority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Seniority {
    Trainee,
    Junior,
    Senior,
}

/// Pilot record from the pilots service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    pub name: String,
    pub seniority: Seniority,
    /// The single aircraft type this pilot may fly
    pub allowed_vehicle: RecordRef,
    /// Longest flight distance this pilot may fly
    pub allowed_range: f64,
    /// Fields not used by roster generation, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cabin attendant role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendantRole {
    Chief,
    Regular,
    Chef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub dish_name: String,
}

/// Cabin attendant record from the cabin-crew service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendant {
    pub name: String,
    #[serde(rename = "attendant_type")]
    pub role: AttendantRole,
    #[serde(default)]
    pub allowed_vehicles: Vec<RecordRef>,
    /// Only chefs carry recipes
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pilot_keeps_extra_fields() {
        let json = r#"{
            "id": 12,
            "name": "Ayse Kaya",
            "age": 44,
            "nationality": "Turkish",
            "allowed_vehicle": "Boeing 737",
            "allowed_range": 3000.0,
            "seniority": "SENIOR"
        }"#;
        let pilot: Pilot = serde_json::from_str(json).unwrap();
        assert_eq!(pilot.seniority, Seniority::Senior);
        assert_eq!(pilot.allowed_range, 3000.0);
        assert_eq!(pilot.extra.get("nationality"), Some(&Value::from("Turkish")));

        let back = serde_json::to_value(&pilot).unwrap();
        assert_eq!(back["id"], Value::from(12));
        assert_eq!(back["seniority"], Value::from("SENIOR"));
    }

    #[test]
    fn test_parse_chef_with_recipes() {
        let json = r#"{
            "name": "Marco",
            "attendant_type": "CHEF",
            "allowed_vehicles": [1, "Airbus A320"],
            "recipes": [{"dish_name": "Risotto"}, {"dish_name": "Baklava"}]
        }"#;
        let chef: Attendant = serde_json::from_str(json).unwrap();
        assert_eq!(chef.role, AttendantRole::Chef);
        assert_eq!(chef.allowed_vehicles.len(), 2);
        assert_eq!(chef.recipes[1].dish_name, "Baklava");
    }

    #[test]
    fn test_unknown_seniority_is_rejected() {
        let json = r#"{"name": "X", "allowed_vehicle": 1, "allowed_range": 1.0, "seniority": "CAPTAIN"}"#;
        assert!(serde_json::from_str::<Pilot>(json).is_err());
    }
}
