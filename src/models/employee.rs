//! Employee and dependent models.
//!
//! This module defines the Employee and Dependent structs and the
//! Relationship enum for representing the people covered by a benefits
//! plan.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The relationship of a dependent to the covered employee.
///
/// Informational only: the relationship never affects the calculated
/// benefit cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// The employee's spouse.
    Spouse,
    /// A child of the employee.
    Child,
    /// The employee's domestic partner.
    DomesticPartner,
}

/// A person covered under an employee's benefits plan.
///
/// Each dependent adds a base monthly cost, and dependents at or above the
/// configured age threshold add a further monthly surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    /// Unique identifier for the dependent.
    pub id: Uuid,
    /// The dependent's first name.
    pub first_name: String,
    /// The dependent's last name.
    pub last_name: String,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
    /// How the dependent is related to the employee.
    pub relationship: Relationship,
}

/// An employee whose paycheck is being calculated.
///
/// The dependent list preserves insertion order so that iteration, and with
/// it the audit trace, is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's annual salary. Must be non-negative.
    pub annual_salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Dependents covered under the employee's benefits plan.
    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_test_employee(dependents: Vec<Dependent>) -> Employee {
        Employee {
            id: Uuid::from_str("4ac2bb95-46a6-4c12-a5a1-7e5a0ccbb100").unwrap(),
            first_name: "LeBron".to_string(),
            last_name: "James".to_string(),
            annual_salary: Decimal::new(7536684, 2),
            date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
            dependents,
        }
    }

    #[test]
    fn test_deserialize_employee_without_dependents() {
        let json = r#"{
            "id": "4ac2bb95-46a6-4c12-a5a1-7e5a0ccbb100",
            "first_name": "LeBron",
            "last_name": "James",
            "annual_salary": "75366.84",
            "date_of_birth": "1984-12-30"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.first_name, "LeBron");
        assert_eq!(employee.last_name, "James");
        assert_eq!(employee.annual_salary, Decimal::new(7536684, 2));
        assert_eq!(
            employee.date_of_birth,
            NaiveDate::from_ymd_opt(1984, 12, 30).unwrap()
        );
        assert!(employee.dependents.is_empty());
    }

    #[test]
    fn test_deserialize_employee_with_dependents() {
        let json = r#"{
            "id": "b128ca38-65c8-4431-9a57-50be9e6b3d02",
            "first_name": "Ja",
            "last_name": "Morant",
            "annual_salary": "92365.22",
            "date_of_birth": "1999-08-10",
            "dependents": [
                {
                    "id": "8b561d01-7605-4b47-9a58-54b2bd0b41de",
                    "first_name": "Spouse",
                    "last_name": "Morant",
                    "date_of_birth": "1998-03-03",
                    "relationship": "spouse"
                },
                {
                    "id": "0ff17816-98f7-47ad-af8c-b45461b09e9d",
                    "first_name": "Child1",
                    "last_name": "Morant",
                    "date_of_birth": "2020-06-23",
                    "relationship": "child"
                }
            ]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.dependents.len(), 2);
        assert_eq!(employee.dependents[0].relationship, Relationship::Spouse);
        assert_eq!(employee.dependents[1].relationship, Relationship::Child);
    }

    #[test]
    fn test_deserialize_domestic_partner() {
        let json = r#"{
            "id": "a63e54d4-0a62-4e86-a3c2-83e9b614b95f",
            "first_name": "DP",
            "last_name": "Jordan",
            "date_of_birth": "1974-01-02",
            "relationship": "domestic_partner"
        }"#;

        let dependent: Dependent = serde_json::from_str(json).unwrap();
        assert_eq!(dependent.relationship, Relationship::DomesticPartner);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee(vec![Dependent {
            id: Uuid::from_str("8b561d01-7605-4b47-9a58-54b2bd0b41de").unwrap(),
            first_name: "Savannah".to_string(),
            last_name: "James".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1986, 8, 27).unwrap(),
            relationship: Relationship::Spouse,
        }]);

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_relationship_serialization() {
        assert_eq!(
            serde_json::to_string(&Relationship::Spouse).unwrap(),
            "\"spouse\""
        );
        assert_eq!(
            serde_json::to_string(&Relationship::Child).unwrap(),
            "\"child\""
        );
        assert_eq!(
            serde_json::to_string(&Relationship::DomesticPartner).unwrap(),
            "\"domestic_partner\""
        );
    }

    #[test]
    fn test_dependent_order_is_preserved() {
        let dependents: Vec<Dependent> = (0..4)
            .map(|i| Dependent {
                id: Uuid::from_u128(i),
                first_name: format!("Child{i}"),
                last_name: "James".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2004 + i as i32, 10, 6).unwrap(),
                relationship: Relationship::Child,
            })
            .collect();
        let employee = create_test_employee(dependents);

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = deserialized
            .dependents
            .iter()
            .map(|d| d.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Child0", "Child1", "Child2", "Child3"]);
    }
}
