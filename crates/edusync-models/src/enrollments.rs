//! Enrollment schema.
//!
//! `studentId` and `courseId` must be well-formed identifiers but are not
//! checked against the students and courses collections, so an enrollment may
//! outlive the documents it points at.

use crate::schema::{Field, ResourceSchema};

pub static ENROLLMENTS: ResourceSchema = ResourceSchema {
    collection: "enrollments",
    label: "Enrollment",
    singular: "enrollment",
    id_key: "enrollmentId",
    fields: &[
        Field::object_id("studentId"),
        Field::object_id("courseId"),
        Field::text("enrollmentDate"),
        Field::text("status"),
        Field::text("finalGrade"),
        Field::text("semester"),
        Field::number("creditsEarned"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaError;
    use serde_json::json;

    fn enrollment() -> serde_json::Value {
        json!({
            "studentId": "665f1c2b9d3e4a0012345678",
            "courseId": "665f1c2b9d3e4a0087654321",
            "enrollmentDate": "2024-08-15T00:00:00.000Z",
            "status": "Enrolled",
            "finalGrade": "In Progress",
            "semester": "Fall 2024",
            "creditsEarned": 0
        })
    }

    #[test]
    fn test_zero_credits_is_accepted() {
        let document = ENROLLMENTS.validate(&enrollment()).unwrap();
        assert_eq!(document.get_i32("creditsEarned").unwrap(), 0);
        assert!(document.get_object_id("studentId").is_ok());
        assert!(document.get_object_id("courseId").is_ok());
    }

    #[test]
    fn test_string_credits_are_rejected() {
        let mut body = enrollment();
        body["creditsEarned"] = json!("3");

        let err = ENROLLMENTS.validate(&body).unwrap_err();
        assert_eq!(err.to_string(), "Field 'creditsEarned' must be a number.");
    }

    #[test]
    fn test_reference_checks_run_in_field_order() {
        let mut body = enrollment();
        body["studentId"] = json!("bad");
        body["courseId"] = json!("also-bad");

        assert_eq!(
            ENROLLMENTS.validate(&body),
            Err(SchemaError::InvalidReference("studentId"))
        );
    }

    #[test]
    fn test_free_text_status() {
        let mut body = enrollment();
        body["status"] = json!("Withdrawn");
        assert!(ENROLLMENTS.validate(&body).is_ok());
    }
}
