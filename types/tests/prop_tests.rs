use proptest::prelude::*;

use ballot_types::{Address, WorkflowPhase};

proptest! {
    /// Phase codes round-trip and unknown codes are rejected.
    #[test]
    fn phase_code_roundtrip(code in 0u8..=u8::MAX) {
        match WorkflowPhase::from_u8(code) {
            Ok(phase) => {
                prop_assert!(code <= 5);
                prop_assert_eq!(phase.as_u8(), code);
            }
            Err(_) => prop_assert!(code > 5),
        }
    }

    /// Ordering of phases agrees with ordering of their codes.
    #[test]
    fn phase_ordering_matches_codes(a in 0u8..6, b in 0u8..6) {
        let pa = WorkflowPhase::from_u8(a).unwrap();
        let pb = WorkflowPhase::from_u8(b).unwrap();
        prop_assert_eq!(pa < pb, a < b);
        prop_assert_eq!(pa == pb, a == b);
    }

    /// `next` always advances by exactly one code.
    #[test]
    fn phase_next_advances_by_one(code in 0u8..6) {
        let phase = WorkflowPhase::from_u8(code).unwrap();
        match phase.next() {
            Some(next) => prop_assert_eq!(next.as_u8(), code + 1),
            None => prop_assert!(phase.is_final()),
        }
    }

    /// Any non-blank string parses to an address that displays as its trimmed form.
    #[test]
    fn address_parse_display(raw in "[a-zA-Z0-9_]{1,40}") {
        let address = Address::parse(&raw).unwrap();
        prop_assert_eq!(address.to_string(), raw.clone());
        prop_assert_eq!(address.as_str(), raw.as_str());
    }

    /// Whitespace-only input is never a valid address.
    #[test]
    fn address_blank_rejected(raw in "[ \t\n]{0,10}") {
        prop_assert!(Address::parse(&raw).is_err());
    }
}
