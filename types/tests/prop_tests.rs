use proptest::prelude::*;

use substat_types::{NodeId, TimeFormat, Timestamp};

const BASE58: &str = "[1-9A-HJ-NP-Za-km-z]{1,40}";

proptest! {
    /// seconds_until(end) = end - start for end >= start.
    #[test]
    fn timestamp_seconds_until(base in 0u64..1_000_000_000, offset in 0u64..1_000_000_000) {
        let start = Timestamp::new(base);
        let end = Timestamp::new(base + offset);
        prop_assert_eq!(start.seconds_until(end), offset);
    }

    /// seconds_until saturates to 0 when end < start.
    #[test]
    fn timestamp_seconds_until_saturates(base in 1u64..1_000_000, deficit in 1u64..1_000_000) {
        let later = Timestamp::new(base + deficit);
        let earlier = Timestamp::new(base);
        prop_assert_eq!(later.seconds_until(earlier), 0);
    }

    /// UTC rendering sorts like the raw seconds while years stay four digits wide.
    #[test]
    fn utc_format_preserves_order(a in 0u64..4_000_000_000, b in 0u64..4_000_000_000) {
        let fa = Timestamp::new(a).format(TimeFormat::Utc);
        let fb = Timestamp::new(b).format(TimeFormat::Utc);
        prop_assert_eq!(fa.cmp(&fb), a.cmp(&b));
    }

    /// Any base58 body with the NodeID- prefix parses and displays unchanged.
    #[test]
    fn node_id_display_roundtrip(body in BASE58) {
        let raw = format!("NodeID-{body}");
        let id: NodeId = raw.parse().unwrap();
        prop_assert_eq!(id.to_string(), raw);
    }

    /// Without the prefix nothing parses as a node ID.
    #[test]
    fn node_id_requires_prefix(body in BASE58) {
        prop_assert!(body.parse::<NodeId>().is_err());
    }
}
