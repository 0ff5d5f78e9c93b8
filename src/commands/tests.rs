//! Tests for command implementations.

use super::edit::{cmd_add, cmd_add_item, cmd_remove, cmd_set, cmd_toggle};
use super::history::{cmd_history, format_event};
use super::save::{cmd_save, parse_entries};
use super::search::search_report;
use super::show::{cmd_show, render_file};
use crate::cli::{
    AddArgs, AddItemArgs, HistoryArgs, RemoveArgs, SaveArgs, SetArgs, ShowArgs, ToggleArgs,
};
use crate::conf::{ConfigDocument, ConfigEntry, FileKind};
use crate::context::ConsoleContext;
use crate::error::ConsoleError;
use crate::events::{Event, EventAction, read_events};
use crate::settings::Settings;
use crate::store::{ConfigFile, require_document};
use crate::test_support::{DEPLOYMENT_SAMPLE, create_recipe_dir};
use std::path::PathBuf;

fn read(ctx: &ConsoleContext, name: &str) -> String {
    std::fs::read_to_string(ctx.recipe_dir.join(name)).unwrap()
}

fn entries(ctx: &ConsoleContext, name: &str) -> Vec<ConfigEntry> {
    require_document(ctx, &Settings::default(), name).unwrap().entries
}

// ============================================================================
// Edit commands
// ============================================================================

#[test]
fn test_add_appends_entry() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = AddArgs {
        file: "deployment.conf".to_string(),
        key: "replicas".to_string(),
        value: "3".to_string(),
    };

    cmd_add(&ctx, &Settings::default(), args).unwrap();

    assert_eq!(read(&ctx, "deployment.conf"), format!("{}replicas = 3\n", DEPLOYMENT_SAMPLE));
}

#[test]
fn test_add_to_missing_file_is_not_found() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = AddArgs {
        file: "absent.conf".to_string(),
        key: "a".to_string(),
        value: "1".to_string(),
    };

    let err = cmd_add(&ctx, &Settings::default(), args).unwrap_err();
    assert!(matches!(err, ConsoleError::NotFound(_)));
    assert!(!ctx.recipe_dir.join("absent.conf").exists());
}

#[test]
fn test_set_updates_only_that_line() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = SetArgs {
        file: "deployment.conf".to_string(),
        index: 0,
        value: "production".to_string(),
    };

    cmd_set(&ctx, &Settings::default(), args).unwrap();

    assert_eq!(
        read(&ctx, "deployment.conf"),
        DEPLOYMENT_SAMPLE.replace("env = staging", "env = production")
    );
}

#[test]
fn test_set_on_list_is_rejected_without_writing() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = SetArgs {
        file: "deployment.conf".to_string(),
        index: 3,
        value: "x".to_string(),
    };

    let err = cmd_set(&ctx, &Settings::default(), args).unwrap_err();
    assert!(matches!(err, ConsoleError::UserError(_)));
    assert_eq!(read(&ctx, "deployment.conf"), DEPLOYMENT_SAMPLE);
}

#[test]
fn test_toggle_entry_and_item() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let settings = Settings::default();

    cmd_toggle(
        &ctx,
        &settings,
        ToggleArgs {
            file: "deployment.conf".to_string(),
            index: 1,
            item: None,
        },
    )
    .unwrap();
    cmd_toggle(
        &ctx,
        &settings,
        ToggleArgs {
            file: "deployment.conf".to_string(),
            index: 3,
            item: Some(0),
        },
    )
    .unwrap();

    let entries = entries(&ctx, "deployment.conf");
    assert_eq!(entries[1], ConfigEntry::scalar("debug", "true", false));
    assert_eq!(
        entries[3].items().unwrap(),
        ["# auth-service".to_string(), "#billing-service".to_string()]
    );
}

#[test]
fn test_toggle_overrides_object() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = ToggleArgs {
        file: "overrides.conf".to_string(),
        index: 2,
        item: None,
    };

    cmd_toggle(&ctx, &Settings::default(), args).unwrap();

    let text = read(&ctx, "overrides.conf");
    assert!(text.contains("\n#payments {\n    provider = stripe\n}\n"));
    assert!(entries(&ctx, "overrides.conf")[2].commented);
}

#[test]
fn test_remove_entry_and_item() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let settings = Settings::default();

    cmd_remove(
        &ctx,
        &settings,
        RemoveArgs {
            file: "deployment.conf".to_string(),
            index: 3,
            item: Some(1),
        },
    )
    .unwrap();
    cmd_remove(
        &ctx,
        &settings,
        RemoveArgs {
            file: "deployment.conf".to_string(),
            index: 0,
            item: None,
        },
    )
    .unwrap();

    let entries = entries(&ctx, "deployment.conf");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].key, "debug");
    assert_eq!(entries[2].items().unwrap(), ["auth-service".to_string()]);
}

#[test]
fn test_add_item_to_list() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = AddItemArgs {
        file: "overrides.conf".to_string(),
        index: 3,
        item: " c.internal ".to_string(),
    };

    cmd_add_item(&ctx, &Settings::default(), args).unwrap();

    assert!(read(&ctx, "overrides.conf").contains("    #b.internal,\n    c.internal,\n]\n"));
}

#[test]
fn test_add_item_to_scalar_is_rejected() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = AddItemArgs {
        file: "overrides.conf".to_string(),
        index: 0,
        item: "x".to_string(),
    };

    let err = cmd_add_item(&ctx, &Settings::default(), args).unwrap_err();
    assert_eq!(err.to_string(), "entry 'feature.flag' is not a list");
}

// ============================================================================
// Save
// ============================================================================

#[test]
fn test_save_from_input_file() {
    let (temp_dir, ctx) = create_recipe_dir();
    let input = temp_dir.path().join("entries.json");
    std::fs::write(
        &input,
        r#"[{"key": "a", "value": "1", "commented": true}, {"key": "l", "value": ["x"]}]"#,
    )
    .unwrap();

    let args = SaveArgs {
        file: "overrides.conf".to_string(),
        input: Some(input),
    };
    cmd_save(&ctx, &Settings::default(), args).unwrap();

    assert_eq!(
        read(&ctx, "overrides.conf"),
        "overrides {\n#a = 1\nl = [\n    x,\n]\n}\n"
    );
}

#[test]
fn test_save_with_missing_input_file() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = SaveArgs {
        file: "overrides.conf".to_string(),
        input: Some(PathBuf::from("/nonexistent/entries.json")),
    };

    let err = cmd_save(&ctx, &Settings::default(), args).unwrap_err();
    assert!(matches!(err, ConsoleError::UserError(_)));
}

#[test]
fn test_parse_entries_rejects_non_array() {
    assert!(parse_entries(r#"{"key": "a"}"#).is_err());
    assert!(parse_entries("[]").unwrap().is_empty());
}

#[test]
fn test_parse_entries_object_flag() {
    let entries = parse_entries(r#"[{"key": "s", "value": "s { a = 1 }", "isObject": true}]"#).unwrap();
    assert_eq!(entries[0], ConfigEntry::object("s", "s { a = 1 }", false));
}

// ============================================================================
// Show and search
// ============================================================================

#[test]
fn test_show_missing_named_file_is_not_found() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = ShowArgs {
        file: Some("absent.conf".to_string()),
        json: false,
    };

    let err = cmd_show(&ctx, &Settings::default(), args).unwrap_err();
    assert!(matches!(err, ConsoleError::NotFound(_)));
}

#[test]
fn test_show_all_succeeds_with_missing_file() {
    let (_temp_dir, ctx) = create_recipe_dir();
    std::fs::remove_file(ctx.recipe_dir.join("overrides.conf")).unwrap();

    for json in [false, true] {
        let args = ShowArgs { file: None, json };
        cmd_show(&ctx, &Settings::default(), args).unwrap();
    }
}

#[test]
fn test_render_file_numbers_entries() {
    let document = ConfigDocument::parse(FileKind::Plain, DEPLOYMENT_SAMPLE);
    let file = ConfigFile {
        file_name: "deployment.conf".to_string(),
        path: PathBuf::from("/r/deployment.conf"),
        document: Some(document),
    };

    let text = render_file(&file);

    assert!(text.starts_with("deployment.conf  (/r/deployment.conf)\n"));
    assert!(text.contains("  [0] env = staging\n"));
    assert!(text.contains("  [1] # debug = true\n"));
    assert!(text.contains("  [3] services = [2 items]\n        0  auth-service\n"));
}

#[test]
fn test_render_unreadable_and_empty_files() {
    let mut file = ConfigFile {
        file_name: "x.conf".to_string(),
        path: PathBuf::from("/r/x.conf"),
        document: None,
    };
    assert!(render_file(&file).contains("(File not found or could not be read)"));

    file.document = Some(ConfigDocument::default());
    assert!(render_file(&file).contains("(no entries)"));
}

#[test]
fn test_search_report_entries_and_items() {
    let document = ConfigDocument::parse(FileKind::Plain, DEPLOYMENT_SAMPLE);

    let report = search_report(&document, "billing");
    assert_eq!(report, "  [3] services item 1: #billing-service\n");

    let report = search_report(&document, "env");
    assert!(report.starts_with("  [0] env = staging\n"));

    assert!(search_report(&document, "zz").is_empty());
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_format_event_line() {
    let event = Event::new(EventAction::Save).with_file("overrides.conf");
    let line = format_event(&event);

    assert!(line.ends_with("  overrides.conf"));
    assert!(line.contains(" save "));
    assert!(line.contains(&event.actor));
}

#[test]
fn test_history_after_edit() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let args = AddArgs {
        file: "deployment.conf".to_string(),
        key: "a".to_string(),
        value: "1".to_string(),
    };
    cmd_add(&ctx, &Settings::default(), args).unwrap();

    let events = read_events(&ctx).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].file.as_deref(), Some("deployment.conf"));
    cmd_history(&ctx, HistoryArgs { limit: 5 }).unwrap();
}
