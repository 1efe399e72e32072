// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
#[case("arch")]
#[case("os")]
#[case("os-version")]
#[case("os-distribution")]
#[case("os-family")]
fn test_sys_catalog_round_trip(#[case] name: &str) {
    let var = SysVar::from_name(name).expect("Should resolve catalog name");
    assert_eq!(var.name(), name);
}

#[rstest]
fn test_const_catalog_round_trip() {
    let var = ConstVar::from_name("opam-version").expect("Should resolve constant name");
    assert_eq!(var.name(), "opam-version");
}

#[rstest]
fn test_unknown_names_do_not_resolve() {
    assert_eq!(SysVar::from_name("cpu"), None);
    assert_eq!(SysVar::from_name("OS"), None); // case-sensitive
    assert_eq!(ConstVar::from_name("version"), None);
    assert_eq!(Variable::resolve("switch"), None);
}

#[rstest]
fn test_resolve_tries_system_catalog_first() {
    assert_eq!(Variable::resolve("os"), Some(Variable::Sys(SysVar::Os)));
    assert_eq!(
        Variable::resolve("opam-version"),
        Some(Variable::Const(ConstVar::OpamVersion))
    );
}

#[rstest]
fn test_ordering_is_lexicographic_over_names() {
    let mut vars = SysVar::ALL;
    vars.sort();
    let names: Vec<&str> = vars.iter().map(|v| v.name()).collect();
    assert_eq!(
        names,
        vec!["arch", "os", "os-distribution", "os-family", "os-version"]
    );
}

#[rstest]
fn test_known_names_lists_system_catalog_first() {
    let names = Variable::known_names();
    assert_eq!(
        names,
        vec![
            "arch",
            "os",
            "os-version",
            "os-distribution",
            "os-family",
            "opam-version",
        ]
    );
}

#[rstest]
fn test_display_uses_canonical_name() {
    assert_eq!(SysVar::OsDistribution.to_string(), "os-distribution");
    assert_eq!(
        Variable::Const(ConstVar::OpamVersion).to_string(),
        "opam-version"
    );
}
