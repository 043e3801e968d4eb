//! Student schema.
//!
//! Students carry identity, contact and program fields, all free text. The
//! `enrolledCourse` field is a course name, not a reference: enrollments link
//! students to courses by identifier.

use crate::schema::{Field, ResourceSchema};

pub static STUDENTS: ResourceSchema = ResourceSchema {
    collection: "students",
    label: "Student",
    singular: "student",
    id_key: "studentId",
    fields: &[
        Field::text("firstName"),
        Field::text("lastName"),
        Field::text("email"),
        Field::text("birthDate"),
        Field::text("country"),
        Field::text("enrolledCourse"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaError;
    use serde_json::json;

    fn student() -> serde_json::Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "birthDate": "1815-12-10",
            "country": "United Kingdom",
            "enrolledCourse": "Mathematics"
        })
    }

    #[test]
    fn test_valid_student() {
        let document = STUDENTS.validate(&student()).unwrap();
        assert_eq!(document.len(), 6);
        assert_eq!(document.get_str("country").unwrap(), "United Kingdom");
    }

    #[test]
    fn test_each_field_is_required() {
        for name in STUDENTS.field_names() {
            let mut body = student();
            body.as_object_mut().unwrap().remove(name);

            assert_eq!(STUDENTS.validate(&body), Err(SchemaError::Missing(name)));
        }
    }
}
