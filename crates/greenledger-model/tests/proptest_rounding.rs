// SPDX-License-Identifier: Apache-2.0

use greenledger_model::round_co2e;
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn rounded_values_keep_sign_and_three_decimals(value in 0.0_f64..1.0e9) {
        let rounded = round_co2e(value);
        prop_assert!(rounded >= 0.0);
        prop_assert!((rounded - value).abs() <= 0.0005 + f64::EPSILON * value);
        prop_assert_eq!(round_co2e(rounded), rounded);
    }
}
