use serde::Deserialize;

/// Body for POST /api/v1/histories/{id}/attendees and
/// PUT /api/v1/histories/{id}/attendees/{user_id}. On the PUT route the
/// path user id wins and `exam_score` grades the whole history.
#[derive(Debug, Deserialize)]
pub struct AttendeeRequest {
    pub user_id: Option<String>,
    pub first_round: Option<bool>,
    pub second_round: Option<bool>,
    pub paying: Option<bool>,
    pub reason: Option<String>,
    pub approver_id: Option<String>,
    pub exam_score: Option<f64>,
}
