use frogmemo::cli::args::{Args, Command};
use frogmemo::domain::{Format, SearchScope};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["frogmemo", "1234567890"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_without_flags_when_parsing_then_uses_defaults() {
    // Arrange
    let args = vec!["frogmemo", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { tag, search, scope, json } => {
            assert_eq!(tag, None);
            assert_eq!(search, None);
            assert_eq!(scope, SearchScope::All);
            assert!(!json);
        }
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.store, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_list_with_search_and_scope_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from([
        "frogmemo", "list", "--search", "select", "--scope", "content",
    ])
    .unwrap();

    match parsed.command {
        Command::List { search, scope, .. } => {
            assert_eq!(search.as_deref(), Some("select"));
            assert_eq!(scope, SearchScope::Content);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_unknown_scope_when_parsing_then_fails() {
    let result = Args::try_parse_from(["frogmemo", "list", "--scope", "body"]);

    assert!(result.is_err());
}

#[test]
fn given_add_with_repeated_tags_when_parsing_then_collects_them() {
    // Arrange
    let args = [
        "frogmemo", "add", "--title", "Query", "--content", "SELECT 1", "--tag", "work", "--tag",
        "db", "--format", "sql",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add { title, source, tags, format } => {
            assert_eq!(title.as_deref(), Some("Query"));
            assert_eq!(source.content.as_deref(), Some("SELECT 1"));
            assert_eq!(source.file, None);
            assert_eq!(tags, vec!["work", "db"]);
            assert_eq!(format, Some(Format::Sql));
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_content_and_file_together_when_parsing_then_fails() {
    let result = Args::try_parse_from(["frogmemo", "add", "--content", "x", "--file", "a.txt"]);

    assert!(result.is_err());
}

#[test]
fn given_update_with_height_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(["frogmemo", "update", "17", "--height", "80"]).unwrap();

    match parsed.command {
        Command::Update { id, height, .. } => {
            assert_eq!(id, "17");
            assert_eq!(height, Some(80));
        }
        _ => panic!("Expected Update command"),
    }
}

#[test]
fn given_tag_command_when_parsing_then_takes_id_and_tag() {
    let parsed = Args::try_parse_from(["frogmemo", "tag", "17", "work"]).unwrap();

    match parsed.command {
        Command::Tag { id, tag } => {
            assert_eq!(id, "17");
            assert_eq!(tag, "work");
        }
        _ => panic!("Expected Tag command"),
    }
}

#[test]
fn given_toggle_lines_command_when_parsing_then_uses_kebab_case_name() {
    let parsed = Args::try_parse_from(["frogmemo", "toggle-lines", "3"]).unwrap();

    assert!(matches!(parsed.command, Command::ToggleLines { id } if id == "3"));
}

#[test]
fn given_global_store_flag_after_subcommand_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["frogmemo", "tags", "-s", "/tmp/store.json", "-vv"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Tags));
    assert_eq!(parsed.store, Some(PathBuf::from("/tmp/store.json")));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_export_with_output_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(["frogmemo", "export", "-o", "out.json"]).unwrap();

    match parsed.command {
        Command::Export { output } => assert_eq!(output, Some(PathBuf::from("out.json"))),
        _ => panic!("Expected Export command"),
    }
}
