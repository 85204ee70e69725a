use schemars::schema_for;
use syllabus_core::payloads::{CourseCreate, CourseUpdate};
use syllabus_core::responses::{CourseAggregate, LessonDetail};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `syl schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(args.type_name)?, flags.format)
}

fn schema_value(type_name: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        SchemaType::CourseCreate => schema_for!(CourseCreate),
        SchemaType::CourseUpdate => schema_for!(CourseUpdate),
        SchemaType::Course => schema_for!(CourseAggregate),
        SchemaType::Lesson => schema_for!(LessonDetail),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::schema_value;
    use crate::cli::root_commands::SchemaType;

    #[test]
    fn create_schema_requires_title() {
        let schema = schema_value(SchemaType::CourseCreate).expect("schema");
        let required = schema["required"].as_array().expect("required list");
        assert!(required.iter().any(|field| field == "title"));
        assert!(schema["properties"]["lessons"].is_object());
    }

    #[test]
    fn every_type_has_a_schema() {
        for type_name in [
            SchemaType::CourseCreate,
            SchemaType::CourseUpdate,
            SchemaType::Course,
            SchemaType::Lesson,
        ] {
            let schema = schema_value(type_name).expect("schema");
            assert!(schema.is_object());
        }
    }
}
