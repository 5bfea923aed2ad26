// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
use proptest::prelude::*;
use waymark_core::geometry::{densify, parse_path, reverse_path};
use waymark_core::types::SampleOptions;

proptest! {
    // Serialized numbers are shortest-roundtrip, so parsing the string
    // back must reproduce the command list bit-for-bit, in order.
    #[test]
    fn serialize_parse_roundtrip(path in testutil::path_strategy()) {
        let parsed = parse_path(&path.to_string()).unwrap();
        prop_assert!(parsed.warnings.is_empty());
        prop_assert_eq!(parsed.path, path);
    }
}

proptest! {
    #[test]
    fn double_reversal_is_exact(path in testutil::path_strategy()) {
        let opts = SampleOptions::default();
        let twice = reverse_path(&reverse_path(&path));
        prop_assert_eq!(
            densify(&twice, &opts).points,
            densify(&path, &opts).points
        );
    }
}

proptest! {
    #[test]
    fn reversed_polyline_mirrors_forward(path in testutil::path_strategy()) {
        let opts = SampleOptions::default();
        let fwd = densify(&path, &opts);
        let rev = densify(&reverse_path(&path), &opts);
        prop_assert_eq!(fwd.len(), rev.len());
        let n = fwd.len();
        for i in 0..n {
            let a = fwd.points[i];
            let b = rev.points[n - 1 - i];
            prop_assert!((a.x - b.x).abs() < 1e-6);
            prop_assert!((a.y - b.y).abs() < 1e-6);
        }
    }
}
