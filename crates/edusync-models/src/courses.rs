//! Course schema.

use crate::schema::{Field, ResourceSchema};

pub static COURSES: ResourceSchema = ResourceSchema {
    collection: "courses",
    label: "Course",
    singular: "course",
    id_key: "courseId",
    fields: &[
        Field::text("courseName"),
        Field::text("description"),
        Field::text("programLength"),
        Field::number("creditsRequired"),
        Field::text("deliveryMode"),
        Field::text("careerPath"),
        Field::boolean("isActive"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaError;
    use serde_json::json;

    fn algebra() -> serde_json::Value {
        json!({
            "courseName": "Algebra",
            "description": "intro",
            "programLength": "1 semester",
            "creditsRequired": 3,
            "deliveryMode": "online",
            "careerPath": "STEM",
            "isActive": false
        })
    }

    #[test]
    fn test_inactive_course_is_valid() {
        let document = COURSES.validate(&algebra()).unwrap();
        assert!(!document.get_bool("isActive").unwrap());
        assert_eq!(document.get_i32("creditsRequired").unwrap(), 3);
    }

    #[test]
    fn test_missing_is_active() {
        let mut body = algebra();
        body["isActive"] = serde_json::Value::Null;

        let err = COURSES.validate(&body).unwrap_err();
        assert_eq!(err, SchemaError::Missing("isActive"));
    }

    #[test]
    fn test_credits_required_must_be_numeric() {
        let mut body = algebra();
        body["creditsRequired"] = json!("three");

        assert_eq!(
            COURSES.validate(&body),
            Err(SchemaError::NotANumber("creditsRequired"))
        );
    }
}
