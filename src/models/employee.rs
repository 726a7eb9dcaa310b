use serde::{Deserialize, Serialize};

use super::{require, require_date, FieldErrors, Record, RecordDraft};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub hire_date: String,
}

/// Employee fields as edited in a form or an inline table row. No `id`:
/// the server assigns it and it is never sent back as a mutable field.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    pub hire_date: String,
}

impl Record for Employee {
    type Draft = EmployeeDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            position: self.position.clone(),
            hire_date: self.hire_date.clone(),
        }
    }

    fn resource_name() -> &'static str {
        "employee"
    }
}

impl RecordDraft for EmployeeDraft {
    type Payload = EmployeeDraft;

    fn apply_field(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "name" => self.name = value.to_string(),
            "position" => self.position = value.to_string(),
            "hireDate" => self.hire_date = value.to_string(),
            other => return Err(format!("Unknown employee field: {}", other)),
        }
        Ok(())
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require("name", &self.name, &mut errors);
        require("position", &self.position, &mut errors);
        require_date("hireDate", &self.hire_date, &mut errors);
        errors
    }

    fn to_payload(&self) -> Result<EmployeeDraft, String> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "Asha".into(),
            position: "Picker".into(),
            hire_date: "2024-01-01".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn empty_name_is_required() {
        let mut draft = valid_draft();
        draft.name = "  ".into();
        let errors = draft.validate();
        assert!(errors.contains_key("name"));
        assert!(!errors.contains_key("position"));
    }

    #[test]
    fn malformed_hire_date_is_rejected() {
        let mut draft = valid_draft();
        draft.hire_date = "01/02/2024".into();
        assert!(draft.validate().contains_key("hireDate"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut draft = valid_draft();
        assert!(draft.apply_field("salary", "100").is_err());
        assert_eq!(draft, valid_draft());
    }

    #[test]
    fn payload_carries_no_id() {
        let json = serde_json::to_value(valid_draft().to_payload().unwrap()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["hireDate"], "2024-01-01");
    }
}
