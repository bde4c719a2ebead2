use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Body of `POST /api/feedback`. The rating is stored as given; the
/// 1..=5 range is enforced by the store, not here.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub event_id: i64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub student_id: i64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub rating: i32,
    #[serde(default)]
    pub comments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_values_decode() {
        let body = json!({"event_id": 1, "student_id": "42", "rating": "5", "comments": "great"});

        let feedback: NewFeedback = serde_json::from_value(body).unwrap();
        assert_eq!(feedback.rating, 5);
        assert_eq!(feedback.comments.as_deref(), Some("great"));
    }

    #[test]
    fn test_comments_are_optional() {
        let body = json!({"event_id": 1, "student_id": 42, "rating": 3});

        let feedback: NewFeedback = serde_json::from_value(body).unwrap();
        assert_eq!(feedback.comments, None);
    }
}
