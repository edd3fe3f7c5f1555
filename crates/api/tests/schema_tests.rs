mod common;

use api::config::GraphQLConfig;
use api::gql::{build_schema, build_schema_with};
use common::*;

#[tokio::test]
async fn test_sdl_exposes_entities_and_operations() {
    let schema = build_schema(lazy_state());
    let sdl = schema.sdl();

    for ty in [
        "type School",
        "type Teacher",
        "type Student",
        "type Olympiad",
        "type Participation",
        "input CreateSchoolInput",
        "input CreateTeacherInput",
        "input CreateStudentInput",
        "input CreateOlympiadInput",
        "input CreateParticipationInput",
    ] {
        assert!(sdl.contains(ty), "SDL should declare `{ty}`");
    }

    for field in [
        "schools: [School!]!",
        "school(id: ID!): School",
        "teachers: [Teacher!]!",
        "teacher(id: ID!): Teacher",
        "students: [Student!]!",
        "student(id: ID!): Student",
        "participation(id: ID!): Participation",
        "participationsByOlympiad(olympiadId: ID!): [Participation!]!",
        "olympiad(id: ID!): Olympiad",
        "createSchool(input: CreateSchoolInput!): School!",
        "createTeacher(input: CreateTeacherInput!): Teacher!",
        "createStudent(input: CreateStudentInput!): Student!",
        "createOlympiad(input: CreateOlympiadInput!): Olympiad!",
        "createParticipation(input: CreateParticipationInput!): Participation!",
    ] {
        assert!(sdl.contains(field), "SDL should contain `{field}`");
    }
}

#[tokio::test]
async fn test_field_names_follow_camel_case() {
    let schema = build_schema(lazy_state());
    let sdl = schema.sdl();

    assert!(sdl.contains("last4Reg: String!"));
    assert!(sdl.contains("schoolId: ID!"));
    assert!(sdl.contains("teacherId: ID!"));
    assert!(sdl.contains("createdAt: DateTime!"));
    assert!(!sdl.contains("last4_reg"));
}

#[tokio::test]
async fn test_singular_participation_names_are_deprecated_aliases() {
    let schema = build_schema(lazy_state());
    let sdl = schema.sdl();

    assert!(sdl.contains(
        "participationByOlympiad(olympiadId: ID!): [Participation!]! @deprecated"
    ));
    assert!(sdl.contains("participation: [Participation!]! @deprecated"));

    let response = execute_graphql(
        &schema,
        r#"{ participationByOlympiad(olympiadId: "not-a-uuid") { id } }"#,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["participationByOlympiad"], serde_json::json!([]));
}

#[tokio::test]
async fn test_introspection_lists_student_relations() {
    let config = GraphQLConfig {
        introspection: true,
        ..GraphQLConfig::default()
    };
    let schema = build_schema_with(lazy_state(), &config);

    let query = r#"
        query {
            __type(name: "Student") {
                fields { name }
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;
    assert!(
        response.errors.is_empty(),
        "Introspection should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let names: Vec<&str> = data["__type"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();

    for expected in [
        "id",
        "firstname",
        "lastname",
        "last4Reg",
        "teacherId",
        "teacher",
        "schoolId",
        "school",
        "participations",
        "createdAt",
    ] {
        assert!(names.contains(&expected), "Student should expose {expected}");
    }
}

#[tokio::test]
async fn test_malformed_ids_are_reported_as_absent() {
    let schema = build_schema(lazy_state());

    let query = r#"
        query {
            school(id: "not-a-uuid") { id }
            teacher(id: "not-a-uuid") { id }
            student(id: "not-a-uuid") { id }
            participation(id: "not-a-uuid") { id }
            olympiad(id: "not-a-uuid") { id }
            participationsByOlympiad(olympiadId: "not-a-uuid") { id }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;
    assert!(
        response.errors.is_empty(),
        "Lookups of unknown ids are not errors: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    assert!(data["school"].is_null());
    assert!(data["teacher"].is_null());
    assert!(data["student"].is_null());
    assert!(data["participation"].is_null());
    assert!(data["olympiad"].is_null());
    assert_eq!(data["participationsByOlympiad"], serde_json::json!([]));
}

#[tokio::test]
async fn test_create_teacher_rejects_malformed_school_id() {
    let schema = build_schema(lazy_state());

    let mutation = r#"
        mutation {
            createTeacher(input: {
                firstname: "A"
                lastname: "B"
                last4Reg: "1234"
                schoolId: "not-a-uuid"
            }) { id }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;
    assert_eq!(response.errors.len(), 1);
    assert!(
        response.errors[0].message.starts_with("Invalid school ID"),
        "got: {}",
        response.errors[0].message
    );
}

#[tokio::test]
async fn test_create_student_rejects_malformed_teacher_id() {
    let schema = build_schema(lazy_state());

    let mutation = r#"
        mutation {
            createStudent(input: {
                firstname: "C"
                lastname: "D"
                last4Reg: "5678"
                schoolId: "7c4f2a6e-55b1-4c38-9a2f-2f0c7f7a9b10"
                teacherId: "teacher-42"
            }) { id }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;
    assert_eq!(response.errors.len(), 1);
    assert!(
        response.errors[0].message.starts_with("Invalid teacher ID"),
        "got: {}",
        response.errors[0].message
    );
}

#[tokio::test]
async fn test_create_participation_rejects_malformed_ids() {
    let schema = build_schema(lazy_state());

    let mutation = r#"
        mutation {
            createParticipation(input: { studentId: "s", olympiadId: "o" }) { id }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.starts_with("Invalid student ID"));
}

#[tokio::test]
async fn test_missing_required_input_is_rejected() {
    let schema = build_schema(lazy_state());

    let mutation = r#"
        mutation {
            createTeacher(input: { firstname: "A", lastname: "B", schoolId: "x" }) { id }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;
    assert!(
        !response.errors.is_empty(),
        "Missing last4Reg should fail validation"
    );
}

#[tokio::test]
async fn test_query_depth_is_bounded() {
    let config = GraphQLConfig {
        max_depth: 3,
        ..GraphQLConfig::default()
    };
    let schema = build_schema_with(lazy_state(), &config);

    let query = r#"
        query {
            students {
                teacher {
                    students {
                        participations {
                            olympiad { name }
                        }
                    }
                }
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;
    assert!(
        !response.errors.is_empty(),
        "Query deeper than the limit should be rejected"
    );
}

#[tokio::test]
async fn test_query_complexity_is_bounded() {
    let config = GraphQLConfig {
        max_complexity: 3,
        ..GraphQLConfig::default()
    };
    let schema = build_schema_with(lazy_state(), &config);

    let query = r#"
        query {
            students { id firstname lastname last4Reg createdAt }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;
    assert!(
        !response.errors.is_empty(),
        "Query more complex than the limit should be rejected"
    );
}

#[tokio::test]
async fn test_invalid_query() {
    let schema = build_schema(lazy_state());

    let query = r#"
        query {
            nonExistentField
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;

    assert!(
        !response.errors.is_empty(),
        "Invalid query should return errors"
    );
}

#[tokio::test]
async fn test_malformed_query() {
    let schema = build_schema(lazy_state());

    let query = r#"
        query {
            schools {
                id
                # missing closing brace
    "#;

    let response = execute_graphql(&schema, query, None).await;

    assert!(
        !response.errors.is_empty(),
        "Malformed query should return errors"
    );
}
