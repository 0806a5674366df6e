//! Opcode encoding and mnemonic tests.

use ttalu_core::isa::Opcode;

#[test]
fn bits_round_trip_for_every_opcode() {
    for op in Opcode::ALL {
        assert_eq!(Opcode::from_bits(op.bits()), op);
    }
}

#[test]
fn encoding_order_matches_the_wire_numbering() {
    assert_eq!(Opcode::Add.bits(), 0);
    assert_eq!(Opcode::Sub.bits(), 1);
    assert_eq!(Opcode::Mul.bits(), 2);
    assert_eq!(Opcode::Div.bits(), 3);
    assert_eq!(Opcode::Shl.bits(), 4);
    assert_eq!(Opcode::Shr.bits(), 5);
    assert_eq!(Opcode::And.bits(), 6);
    assert_eq!(Opcode::Or.bits(), 7);
}

#[test]
fn from_bits_ignores_bits_above_the_field() {
    // 0x0B = 0b1011: only the low three bits (3 = DIV) matter.
    assert_eq!(Opcode::from_bits(0x0B), Opcode::Div);
    assert_eq!(Opcode::from_bits(0xF8), Opcode::Add);
}

#[test]
fn index_matches_position_in_all() {
    for (position, op) in Opcode::ALL.iter().enumerate() {
        assert_eq!(op.index(), position);
    }
}

#[test]
fn only_mul_and_div_are_multi_cycle() {
    for op in Opcode::ALL {
        let expected = matches!(op, Opcode::Mul | Opcode::Div);
        assert_eq!(op.is_multi_cycle(), expected, "{op}");
    }
}

#[test]
fn display_uses_the_mnemonic() {
    assert_eq!(Opcode::Add.to_string(), "ADD");
    assert_eq!(Opcode::Shr.to_string(), "SHR");
}

#[test]
fn parse_accepts_any_case() {
    assert_eq!("add".parse::<Opcode>(), Ok(Opcode::Add));
    assert_eq!("ADD".parse::<Opcode>(), Ok(Opcode::Add));
    assert_eq!("Shl".parse::<Opcode>(), Ok(Opcode::Shl));
    assert_eq!("oR".parse::<Opcode>(), Ok(Opcode::Or));
}

#[test]
fn parse_round_trips_every_mnemonic() {
    for op in Opcode::ALL {
        assert_eq!(op.mnemonic().parse::<Opcode>(), Ok(op));
    }
}

#[test]
fn parse_rejects_unknown_mnemonics() {
    // XOR is deliberately not part of the operation set.
    assert!("xor".parse::<Opcode>().is_err());
    assert!("".parse::<Opcode>().is_err());
    assert!("add ".parse::<Opcode>().is_err());
}
