// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

use opamenv::{ConstBindings, Context};

use super::*;

#[test]
fn test_templates_decode_cleanly() {
    for template in [generate_minimal_template(), generate_full_template()] {
        let context = Context::from_yaml(template, ConstBindings::current())
            .expect("Generated template should decode");
        assert!(context.sys().is_empty());
        assert_eq!(context.repos().len(), 1);
    }
}

#[test]
fn test_init_refuses_to_overwrite() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut cmd = CmdInit {
        path: tmp.path().to_path_buf(),
        template: "minimal".to_string(),
    };

    let code = cmd.run().expect("First init should succeed");
    assert_eq!(code, 0);
    assert!(tmp.path().join(opamenv::OPAMENV_FILENAME).is_file());

    let result = cmd.run();
    assert!(result.is_err(), "Second init should refuse to overwrite");
}
