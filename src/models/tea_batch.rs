use serde::{Deserialize, Serialize};

use super::{require, require_date, FieldErrors, Record, RecordDraft};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeaBatch {
    pub id: i64,
    pub tea_type: String,
    pub weight_in_kg: f64,
    pub arrival_date: String,
    pub processing_stage: String,
}

/// Tea batch under edit. The weight stays a string here (it is whatever the
/// input holds); it only becomes a number in the payload, after validation.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct TeaBatchDraft {
    pub tea_type: String,
    pub weight_in_kg: String,
    pub arrival_date: String,
    pub processing_stage: String,
}

/// Typed wire shape for create/update. No `id`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeaBatchPayload {
    pub tea_type: String,
    pub weight_in_kg: f64,
    pub arrival_date: String,
    pub processing_stage: String,
}

impl Record for TeaBatch {
    type Draft = TeaBatchDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> TeaBatchDraft {
        TeaBatchDraft {
            tea_type: self.tea_type.clone(),
            weight_in_kg: self.weight_in_kg.to_string(),
            arrival_date: self.arrival_date.clone(),
            processing_stage: self.processing_stage.clone(),
        }
    }

    fn resource_name() -> &'static str {
        "tea batch"
    }
}

fn parse_weight(value: &str) -> Result<f64, String> {
    let weight: f64 = value
        .trim()
        .parse()
        .map_err(|_| "Weight must be a number".to_string())?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err("Weight must be a positive number".to_string());
    }
    Ok(weight)
}

impl RecordDraft for TeaBatchDraft {
    type Payload = TeaBatchPayload;

    fn apply_field(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "teaType" => self.tea_type = value.to_string(),
            "weightInKg" => self.weight_in_kg = value.to_string(),
            "arrivalDate" => self.arrival_date = value.to_string(),
            "processingStage" => self.processing_stage = value.to_string(),
            other => return Err(format!("Unknown tea batch field: {}", other)),
        }
        Ok(())
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require("teaType", &self.tea_type, &mut errors);
        if self.weight_in_kg.trim().is_empty() {
            errors.insert("weightInKg", "Weight is required".into());
        } else if let Err(msg) = parse_weight(&self.weight_in_kg) {
            errors.insert("weightInKg", msg);
        }
        require_date("arrivalDate", &self.arrival_date, &mut errors);
        require("processingStage", &self.processing_stage, &mut errors);
        errors
    }

    fn to_payload(&self) -> Result<TeaBatchPayload, String> {
        Ok(TeaBatchPayload {
            tea_type: self.tea_type.clone(),
            weight_in_kg: parse_weight(&self.weight_in_kg)?,
            arrival_date: self.arrival_date.clone(),
            processing_stage: self.processing_stage.clone(),
        })
    }
}
