use super::*;

const ALL: &[ErrorCode] = &[
    ErrorCode::E0001,
    ErrorCode::E0002,
    ErrorCode::E0003,
    ErrorCode::E0004,
    ErrorCode::E1001,
    ErrorCode::E1002,
    ErrorCode::E1003,
    ErrorCode::E6001,
    ErrorCode::E6002,
    ErrorCode::E6003,
    ErrorCode::E6004,
    ErrorCode::E6005,
    ErrorCode::E6006,
    ErrorCode::E6007,
    ErrorCode::E6008,
    ErrorCode::E6009,
    ErrorCode::E6010,
    ErrorCode::E6011,
    ErrorCode::E6012,
    ErrorCode::E6013,
];

#[test]
fn display_matches_variant_name() {
    for code in ALL {
        assert_eq!(code.to_string(), format!("{code:?}"));
    }
}

#[test]
fn every_code_belongs_to_exactly_one_phase() {
    for code in ALL {
        let phases = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_eval_error(),
        ];
        assert_eq!(phases.iter().filter(|p| **p).count(), 1, "{code}");
    }
}

#[test]
fn phase_prefixes() {
    for code in ALL {
        let s = code.as_str();
        if code.is_lexer_error() {
            assert!(s.starts_with("E0"));
        } else if code.is_parser_error() {
            assert!(s.starts_with("E1"));
        } else {
            assert!(s.starts_with("E6"));
        }
    }
}

#[test]
fn descriptions_are_not_empty() {
    for code in ALL {
        assert!(!code.description().is_empty());
    }
}
