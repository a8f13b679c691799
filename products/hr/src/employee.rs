use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::HrError;

/// Registry-assigned employee identifier. Always positive.
pub type EmployeeId = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = HrError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let upper = raw.to_uppercase();
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str() == upper)
            .ok_or_else(|| HrError::UnrecognizedGender(raw.to_string()))
    }
}

impl TryFrom<String> for Gender {
    type Error = HrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub salary: f64,
}

/// Create payload. Any `id` sent by the caller is dropped during
/// deserialization; the registry assigns one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub salary: f64,
}

impl NewEmployee {
    pub(crate) fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            salary: self.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gender_parse_ignores_case() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("FeMaLe".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let err = "robot".parse::<Gender>().unwrap_err();
        assert!(matches!(err, HrError::UnrecognizedGender(ref raw) if raw == "robot"));
        assert!("".parse::<Gender>().is_err());
        assert!(" male".parse::<Gender>().is_err());
    }

    #[test]
    fn employee_serializes_uppercase_gender() {
        let employee = Employee {
            id: 7,
            name: "Ada Lovelace".into(),
            age: 36,
            gender: Gender::Female,
            salary: 8100.5,
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Ada Lovelace",
                "age": 36,
                "gender": "FEMALE",
                "salary": 8100.5
            })
        );
    }

    #[test]
    fn payload_drops_caller_id_and_accepts_lowercase_gender() {
        let payload: NewEmployee = serde_json::from_value(json!({
            "id": 99,
            "name": "Alan Turing",
            "age": 41,
            "gender": "male",
            "salary": 6200.0
        }))
        .unwrap();
        assert_eq!(payload.gender, Gender::Male);
        assert_eq!(payload.into_employee(6).id, 6);
    }

    #[test]
    fn payload_with_bad_gender_fails_to_deserialize() {
        let result = serde_json::from_value::<NewEmployee>(json!({
            "name": "Robo",
            "age": 1,
            "gender": "robot",
            "salary": 0.0
        }));
        assert!(result.is_err());
    }
}
