use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::AnswerSet;
use super::classification::ClassificationResult;

/// A completed, classified assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub instrument_id: String,
    pub patient_name: Option<String>,
    pub answers: AnswerSet,
    pub result: ClassificationResult,
    pub date_administered: jiff::civil::Date,
    pub created_at: jiff::Timestamp,
}
