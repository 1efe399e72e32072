// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn test_current_reports_tool_version() {
    let consts = ConstBindings::current();
    assert_eq!(consts.opam_version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(consts.get(ConstVar::OpamVersion), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_alternate_versions_can_be_constructed() {
    let consts = ConstBindings::new("2.4.0");
    assert_eq!(consts.get(ConstVar::OpamVersion), "2.4.0");
    assert_ne!(consts, ConstBindings::new("2.5.0"));
}

#[test]
fn test_display_renders_fixed_set() {
    let consts = ConstBindings::new("2.4.0");
    assert_eq!(consts.to_string(), "  opam-version = 2.4.0\n");
}
