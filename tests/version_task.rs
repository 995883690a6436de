//! Host-style integration tests: discover builtins, register them, run the
//! version task, and read the published properties back out of the table.

use vertask::core::version::VersionInfo;
use vertask::task::api::{
    discover_builtin_tasks, register_builtin_tasks, BuildTask, PropertyTable, TaskError,
    TaskRegistry, TaskRunner, TaskSettings, VersionTask, PROPERTY_VERSION,
    PROPERTY_VERSION_MAJOR, PROPERTY_VERSION_MINOR, PROPERTY_VERSION_PATCH,
};

#[test]
fn test_builtin_discovery_exposes_version_task() {
    let discovered = discover_builtin_tasks();
    let version = discovered.iter().find(|d| d.info.name == "version");

    let version = version.expect("version task should be discoverable");
    assert!(!version.info.description.is_empty());
    assert!(version.info.api_version > 0);
}

#[test]
fn test_version_task_publishes_current_build_version() {
    let runner = TaskRunner::new();
    let mut registry = TaskRegistry::new();
    register_builtin_tasks(&mut registry).unwrap();
    let mut properties = PropertyTable::new();

    runner
        .run(
            &mut registry,
            "version",
            &TaskSettings::new(),
            &mut properties,
        )
        .unwrap();

    let current = VersionInfo::current();
    assert_eq!(
        properties.get(PROPERTY_VERSION_MAJOR),
        Some(current.major.to_string().as_str())
    );
    assert_eq!(
        properties.get(PROPERTY_VERSION_MINOR),
        Some(current.minor.to_string().as_str())
    );
    assert_eq!(
        properties.get(PROPERTY_VERSION_PATCH),
        Some(current.patch.to_string().as_str())
    );
    assert_eq!(
        properties.get(PROPERTY_VERSION),
        Some(current.version.as_str())
    );
    assert_eq!(properties.len(), 4);
}

#[test]
fn test_version_task_with_fixture_version() {
    let runner = TaskRunner::new();
    let mut registry = TaskRegistry::new();
    registry
        .register_task(Box::new(VersionTask::new(VersionInfo::new(4, 7, 2, "4.7.2"))))
        .unwrap();
    let mut properties = PropertyTable::new();

    runner
        .run(
            &mut registry,
            "version",
            &TaskSettings::new(),
            &mut properties,
        )
        .unwrap();

    assert_eq!(properties.get(PROPERTY_VERSION_MAJOR), Some("4"));
    assert_eq!(properties.get(PROPERTY_VERSION_MINOR), Some("7"));
    assert_eq!(properties.get(PROPERTY_VERSION_PATCH), Some("2"));
    assert_eq!(properties.get(PROPERTY_VERSION), Some("4.7.2"));
}

#[test]
fn test_patch_override_scenario() {
    let runner = TaskRunner::new();
    let mut registry = TaskRegistry::new();
    registry
        .register_task(Box::new(VersionTask::new(VersionInfo::new(4, 7, 2, "4.7.2"))))
        .unwrap();
    let mut properties = PropertyTable::new();

    let settings = TaskSettings::parse(&["patch=9".to_string()]).unwrap();
    runner
        .run(&mut registry, "version", &settings, &mut properties)
        .unwrap();

    assert_eq!(properties.get(PROPERTY_VERSION_PATCH), Some("9"));
    assert_eq!(properties.get(PROPERTY_VERSION_MAJOR), Some("4"));
    assert_eq!(properties.get(PROPERTY_VERSION_MINOR), Some("7"));
    assert_eq!(properties.get(PROPERTY_VERSION), Some("4.7.2"));
}

#[test]
fn test_version_string_override_is_verbatim() {
    let runner = TaskRunner::new();
    let mut registry = TaskRegistry::new();
    registry
        .register_task(Box::new(VersionTask::new(VersionInfo::new(4, 7, 2, "4.7.2"))))
        .unwrap();
    let mut properties = PropertyTable::new();

    let settings = TaskSettings::parse(&["version=2026.08-custom".to_string()]).unwrap();
    runner
        .run(&mut registry, "version", &settings, &mut properties)
        .unwrap();

    // The string override is honored verbatim, the numeric triple untouched
    assert_eq!(properties.get(PROPERTY_VERSION), Some("2026.08-custom"));
    assert_eq!(properties.get(PROPERTY_VERSION_MAJOR), Some("4"));
    assert_eq!(properties.get(PROPERTY_VERSION_PATCH), Some("2"));
}

#[test]
fn test_repeat_invocation_writes_identical_entries() {
    let mut task = VersionTask::new(VersionInfo::new(4, 7, 2, "4.7.2"));
    let mut properties = PropertyTable::new();

    task.initialize().unwrap();
    task.invoke(&mut properties).unwrap();
    let after_first = properties.clone();

    task.invoke(&mut properties).unwrap();

    assert_eq!(properties, after_first);
    assert_eq!(properties.property_names().len(), 4);
}

#[test]
fn test_unknown_attribute_is_rejected_end_to_end() {
    let runner = TaskRunner::new();
    let mut registry = TaskRegistry::new();
    register_builtin_tasks(&mut registry).unwrap();
    let mut properties = PropertyTable::new();

    let settings = TaskSettings::parse(&["plevel=3".to_string()]).unwrap();
    let result = runner.run(&mut registry, "version", &settings, &mut properties);

    match result {
        Err(TaskError::Generic { message }) => {
            assert!(message.contains("Unknown attribute 'plevel'"), "{}", message);
        }
        other => panic!("expected Generic error, got {:?}", other),
    }
    assert!(properties.is_empty());
}

#[test]
fn test_published_names_match_the_fixed_keys() {
    let mut task = VersionTask::new(VersionInfo::new(4, 7, 2, "4.7.2"));
    let mut properties = PropertyTable::new();

    task.initialize().unwrap();
    task.invoke(&mut properties).unwrap();

    assert_eq!(
        properties.property_names(),
        vec![
            PROPERTY_VERSION.to_string(),
            PROPERTY_VERSION_MAJOR.to_string(),
            PROPERTY_VERSION_MINOR.to_string(),
            PROPERTY_VERSION_PATCH.to_string(),
        ]
    );
}
