// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

fn entry(var: &str, value: &str) -> SysBinding {
    SysBinding {
        var: var.to_string(),
        value: value.to_string(),
    }
}

#[rstest]
fn test_decode_valid_bindings() {
    let bindings = SysBindings::decode(&[entry("os", "linux"), entry("arch", "x86_64")])
        .expect("Should decode valid bindings");

    assert_eq!(bindings.get(SysVar::Os), Some("linux"));
    assert_eq!(bindings.get(SysVar::Arch), Some("x86_64"));
    assert_eq!(bindings.get(SysVar::OsFamily), None);
    assert_eq!(bindings.len(), 2);
}

#[rstest]
fn test_decode_empty_list() {
    let bindings = SysBindings::decode(&[]).expect("Should decode empty list");
    assert!(bindings.is_empty());
    assert_eq!(bindings, SysBindings::default());
}

#[rstest]
#[case(vec![entry("os", "linux"), entry("os", "macos")], "linux", "macos")]
#[case(vec![entry("os", "macos"), entry("os", "linux")], "macos", "linux")]
fn test_decode_duplicate_binding_fails(
    #[case] entries: Vec<SysBinding>,
    #[case] expected_first: &str,
    #[case] expected_second: &str,
) {
    let err = SysBindings::decode(&entries).expect_err("Duplicate bindings should not decode");
    match err {
        Error::DuplicateBinding {
            name,
            first,
            second,
        } => {
            assert_eq!(name, "os");
            assert_eq!(first, expected_first);
            assert_eq!(second, expected_second);
        }
        other => panic!("Expected DuplicateBinding, got {other:?}"),
    }
}

#[rstest]
fn test_decode_unknown_variable_lists_catalog() {
    let err = SysBindings::decode(&[entry("os", "linux"), entry("cpu", "arm")])
        .expect_err("Unknown variable should not decode");
    match err {
        Error::UnknownVariable {
            name,
            location,
            known,
        } => {
            assert_eq!(name, "cpu");
            assert_eq!(location, "sys[1]");
            assert_eq!(
                known,
                vec!["arch", "os", "os-version", "os-distribution", "os-family"]
            );
        }
        other => panic!("Expected UnknownVariable, got {other:?}"),
    }
}

#[rstest]
fn test_set_returns_new_map() {
    let base = SysBindings::default().set(SysVar::Os, "linux");
    let updated = base.set(SysVar::Os, "macos");

    // The original map is unchanged
    assert_eq!(base.get(SysVar::Os), Some("linux"));
    assert_eq!(updated.get(SysVar::Os), Some("macos"));

    let widened = updated.set(SysVar::Arch, "arm64");
    assert_eq!(widened.get(SysVar::Os), Some("macos"));
    assert_eq!(widened.get(SysVar::Arch), Some("arm64"));
    assert_eq!(updated.get(SysVar::Arch), None);
}

#[rstest]
fn test_extend_overrides_win_base_fills_gaps() {
    let base = SysBindings::default().set(SysVar::Os, "linux");
    let overrides = SysBindings::default()
        .set(SysVar::Os, "macos")
        .set(SysVar::Arch, "arm64");

    let merged = base.extend(&overrides);
    assert_eq!(merged.get(SysVar::Os), Some("macos"));
    assert_eq!(merged.get(SysVar::Arch), Some("arm64"));

    // Extending with an empty map changes nothing
    assert_eq!(base.extend(&SysBindings::default()), base);
}

#[rstest]
fn test_iter_in_canonical_name_order() {
    let bindings = SysBindings::default()
        .set(SysVar::OsVersion, "12.1")
        .set(SysVar::Arch, "x86_64");

    let keys: Vec<&str> = bindings.iter().map(|(var, _)| var.name()).collect();
    assert_eq!(keys, vec!["arch", "os-version"]);
}

#[rstest]
fn test_display_enumerates_whole_catalog() {
    let bindings = SysBindings::default().set(SysVar::Os, "linux");
    let rendered = bindings.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "  arch (unset)",
            "  os = linux",
            "  os-distribution (unset)",
            "  os-family (unset)",
            "  os-version (unset)",
        ]
    );
}
