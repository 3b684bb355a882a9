use clap::Parser;
use pharmatc::cli::args::{Args, Command};
use pharmatc::constants::DEFAULT_EXPORT_FILE_NAME;
use pharmatc::domain::{SearchField, Tolerance};
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["pharmatc", "--name", "아스피린"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_name_search_when_parsing_then_selector_carries_name_field() {
    // Arrange
    let args = vec!["pharmatc", "search", "--name", "아스피린"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Search { selector, json } => {
            assert_eq!(
                selector.field_query(),
                Some((SearchField::ItemName, "아스피린"))
            );
            assert_eq!(json, false);
        }
        _ => panic!("Expected Search command"),
    }
    assert_eq!(parsed.api_url, None);
    assert_eq!(parsed.store, None);
}

#[test]
fn given_item_seq_search_when_parsing_then_selector_carries_code_field() {
    // Arrange
    let args = vec!["pharmatc", "search", "--item-seq", "199303108"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Search { selector, .. } => {
            assert_eq!(
                selector.field_query(),
                Some((SearchField::ItemSeq, "199303108"))
            );
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn given_two_selectors_when_parsing_search_then_fails() {
    // Arrange - the selector group is exclusive
    let args = vec![
        "pharmatc",
        "search",
        "--name",
        "아스피린",
        "--edi-code",
        "653001980",
    ];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should reject two selectors at once");
}

#[test]
fn given_no_selector_when_parsing_search_then_fails() {
    // Arrange
    let args = vec!["pharmatc", "search"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should require a selector");
}

#[test]
fn given_no_tolerance_when_parsing_match_then_defaults_to_exact() {
    // Arrange
    let args = vec!["pharmatc", "match", "--id", "4321"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Match {
            base,
            tolerance,
            same_form,
            filter,
            json,
        } => {
            assert_eq!(base.id, Some(4321));
            assert_eq!(tolerance, Tolerance::Exact);
            assert_eq!(same_form, false);
            assert_eq!(filter, None);
            assert_eq!(json, false);
        }
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn given_each_valid_tolerance_when_parsing_match_then_parses_variant() {
    for (text, expected) in [
        ("0", Tolerance::Exact),
        ("5", Tolerance::Pct5),
        ("10", Tolerance::Pct10),
        ("15", Tolerance::Pct15),
        ("20", Tolerance::Pct20),
    ] {
        let parsed = Args::try_parse_from([
            "pharmatc",
            "match",
            "--id",
            "4321",
            "--tolerance",
            text,
        ])
        .unwrap();

        match parsed.command {
            Command::Match { tolerance, .. } => assert_eq!(tolerance, expected),
            _ => panic!("Expected Match command"),
        }
    }
}

#[test]
fn given_short_tolerance_flag_when_parsing_match_then_parses_variant() {
    // Arrange
    let args = vec!["pharmatc", "match", "--id", "4321", "-t", "15"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Match { tolerance, .. } => assert_eq!(tolerance, Tolerance::Pct15),
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn given_out_of_set_tolerance_when_parsing_match_then_fails() {
    // Arrange - 12 is not one of the five allowed percentages
    let args = vec!["pharmatc", "match", "--id", "4321", "--tolerance", "12"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should reject out-of-set tolerance");
}

#[test]
fn given_same_form_with_id_base_when_parsing_then_fails() {
    // Arrange - a bare id carries no dosage form to compare against
    let args = vec!["pharmatc", "match", "--id", "4321", "--same-form"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should reject --same-form with --id");
}

#[test]
fn given_same_form_with_code_base_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "pharmatc",
        "match",
        "--item-seq",
        "199303108",
        "--same-form",
        "--tolerance",
        "10",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Match {
            base,
            tolerance,
            same_form,
            ..
        } => {
            assert_eq!(
                base.field_query(),
                Some((SearchField::ItemSeq, "199303108"))
            );
            assert_eq!(tolerance, Tolerance::Pct10);
            assert_eq!(same_form, true);
        }
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn given_filter_text_when_parsing_match_then_carries_filter() {
    // Arrange
    let args = vec![
        "pharmatc", "match", "--id", "4321", "--filter", "아스피린",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Match { filter, .. } => {
            assert_eq!(filter, Some("아스피린".to_string()));
        }
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn given_save_with_edi_code_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["pharmatc", "save", "--edi-code", "653001980"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Save { selector } => {
            assert_eq!(
                selector.field_query(),
                Some((SearchField::EdiCode, "653001980"))
            );
        }
        _ => panic!("Expected Save command"),
    }
}

#[test]
fn given_remove_with_id_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["pharmatc", "remove", "4321"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Remove { id } => assert_eq!(id, 4321),
        _ => panic!("Expected Remove command"),
    }
}

#[test]
fn given_list_with_filter_and_json_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["pharmatc", "list", "--filter", "정", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { filter, json } => {
            assert_eq!(filter, Some("정".to_string()));
            assert_eq!(json, true);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_no_output_when_parsing_export_then_uses_default_file_name() {
    // Arrange
    let args = vec!["pharmatc", "export"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Export { output } => {
            assert_eq!(output, PathBuf::from(DEFAULT_EXPORT_FILE_NAME));
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn given_output_flag_when_parsing_export_then_uses_it() {
    // Arrange
    let args = vec!["pharmatc", "export", "-o", "/tmp/out.xlsx"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Export { output } => {
            assert_eq!(output, PathBuf::from("/tmp/out.xlsx"));
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec![
        "pharmatc",
        "list",
        "--store",
        "/tmp/drugs.json",
        "--api-url",
        "http://localhost:8080",
        "-vv",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.store, Some(PathBuf::from("/tmp/drugs.json")));
    assert_eq!(parsed.api_url, Some("http://localhost:8080".to_string()));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["pharmatc", "-v", "export"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 1);
}
