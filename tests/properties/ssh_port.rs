//! Property tests for effective SSH port selection.

use proptest::prelude::*;
use serde_json::json;

use rollback::domain::value_objects::{resolve_port, PortSource, DEFAULT_SSH_PORT};

proptest! {
    /// PROPERTY: integers in 1..=65535 are used as-is; anything else is port 22.
    #[test]
    fn property_integer_ports(n in any::<i64>()) {
        let value = json!(n);
        let (port, source) = resolve_port(Some(&value));
        if (1..=65535).contains(&n) {
            prop_assert_eq!(i64::from(port), n);
            prop_assert_eq!(source, PortSource::Configured);
        } else {
            prop_assert_eq!(port, DEFAULT_SSH_PORT);
            prop_assert_eq!(source, PortSource::Defaulted);
        }
    }

    /// PROPERTY: whole floats behave like the matching integer; true fractions default.
    #[test]
    fn property_float_ports(n in -10i64..70_000, frac in prop_oneof![Just(0.0f64), 0.01f64..0.99]) {
        let value = json!(n as f64 + frac);
        let (port, source) = resolve_port(Some(&value));
        if frac == 0.0 && (1..=65535).contains(&n) {
            prop_assert_eq!(i64::from(port), n);
            prop_assert_eq!(source, PortSource::Configured);
        } else {
            prop_assert_eq!(port, DEFAULT_SSH_PORT);
            prop_assert_eq!(source, PortSource::Defaulted);
        }
    }

    /// PROPERTY: strings never count as a port, even numeric ones.
    #[test]
    fn property_strings_default(s in "[0-9]{0,6}|[a-z ]{0,8}") {
        let value = json!(s);
        prop_assert_eq!(resolve_port(Some(&value)), (DEFAULT_SSH_PORT, PortSource::Defaulted));
    }
}
