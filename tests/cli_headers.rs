//! `iconforge headers` end to end

mod common;

use common::*;

const HOLDER: &str = "Solace Systems. All rights reserved.";

#[test]
fn headers_insert_after_xml_declaration() {
    let env = TestEnv::new();
    env.write("logo/32px/logo.svg", XML_SVG);
    env.write("icons/16px/alert.svg", SIMPLE_SVG);

    let result = env.run(&["headers"]);

    assert!(result.success, "{}", result.combined_output());
    let logo = env.read("logo/32px/logo.svg");
    assert!(logo.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!--\n"), "{logo}");
    assert!(logo.contains(HOLDER));
    let icon = env.read("icons/16px/alert.svg");
    assert!(icon.starts_with("<!--\n Copyright 2023-"), "{icon}");
    assert!(icon.ends_with(SIMPLE_SVG));
}

#[test]
fn headers_are_idempotent() {
    let env = TestEnv::new();
    env.write("icons/16px/alert.svg", SIMPLE_SVG);

    assert!(env.run(&["headers"]).success);
    let first = env.read("icons/16px/alert.svg");
    let second = env.run(&["headers", "--json"]);

    assert!(second.success, "{}", second.combined_output());
    assert_eq!(env.read("icons/16px/alert.svg"), first);
    assert!(second
        .json_events()
        .iter()
        .any(|e| e["event"] == "header_updated" && e["change"] == "unchanged"));
}

#[test]
fn headers_replace_stale_year() {
    let env = TestEnv::new();
    env.write(
        "images/16px/photo.svg",
        &format!("<!--\n Copyright 2023-2023 {HOLDER}\n-->\n<svg/>\n"),
    );

    let result = env.run(&["headers"]);

    assert!(result.success, "{}", result.combined_output());
    let content = env.read("images/16px/photo.svg");
    assert_eq!(content.matches("Copyright").count(), 1, "{content}");
    assert!(!content.contains("Copyright 2023-2023"));
    assert!(content.ends_with("<svg/>\n"));
}

#[test]
fn headers_skip_missing_directories_with_warning() {
    let env = TestEnv::new();
    env.write("icons/16px/alert.svg", SIMPLE_SVG);

    let result = env.run(&["headers"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("illustrations"), "{}", result.stderr);
}

#[cfg(unix)]
#[test]
fn headers_keep_source_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new();
    env.write("icons/16px/alert.svg", SIMPLE_SVG);
    let file = env.path("icons/16px/alert.svg");
    std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o644)).unwrap();

    assert!(env.run(&["headers"]).success);

    let mode = std::fs::metadata(&file).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}
