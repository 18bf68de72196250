use projectboard_core::{Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn project_new_sets_defaults() {
    let project = Project::new("Build site", "Make a site", 3);

    assert!(!project.id.is_nil());
    assert_eq!(project.title, "Build site");
    assert_eq!(project.description, "Make a site");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
}

#[test]
fn with_id_keeps_caller_provided_identity() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project = Project::with_id(id, "X", "Y", 1);

    assert_eq!(project.id, id);
    assert_eq!(project.status, ProjectStatus::Active);
}

#[test]
fn persons_label_pluralizes_everything_but_one() {
    assert_eq!(Project::new("t", "d", 0).persons_label(), "0 persons");
    assert_eq!(Project::new("t", "d", 1).persons_label(), "1 person");
    assert_eq!(Project::new("t", "d", 2).persons_label(), "2 persons");
    assert_eq!(Project::new("t", "d", 3).persons_label(), "3 persons");
}

#[test]
fn status_names_are_stable() {
    assert_eq!(ProjectStatus::Active.as_str(), "active");
    assert_eq!(ProjectStatus::Finished.as_str(), "finished");
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project = Project::with_id(id, "Build site", "Make a site", 3);

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Build site");
    assert_eq!(json["description"], "Make a site");
    assert_eq!(json["people"], 3);
    assert_eq!(json["status"], "active");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}
