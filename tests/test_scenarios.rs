//! End-to-end scenarios through the public string API
//!
//! Each case feeds literal decimal inputs through parse, arithmetic, and
//! emit, checking the exact expected text.

use decint::{DecInt, DecUint};

fn uint(s: &str) -> DecUint {
    s.parse().expect("valid unsigned literal")
}

fn int(s: &str) -> DecInt {
    s.parse().expect("valid signed literal")
}

#[test]
fn thirty_digit_addition() {
    let a = uint("123456789012345678901234567890");
    let b = uint("987654321098765432109876543210");
    assert_eq!((a + b).to_string(), "1111111110111111111011111111100");
}

#[test]
fn carry_into_a_new_limb() {
    assert_eq!(
        (uint("999999999999999999") + uint("1")).to_string(),
        "1000000000000000000"
    );
}

#[test]
fn borrow_across_every_limb() {
    assert_eq!(
        (uint("1000000000000000000") - uint("1")).to_string(),
        "999999999999999999"
    );
}

#[test]
fn nine_digit_product() {
    assert_eq!(
        (uint("123456789") * uint("987654321")).to_string(),
        "121932631112635269"
    );
}

#[test]
fn googol_divided_by_seven() {
    let googol = {
        let mut s = String::from("1");
        s.push_str(&"0".repeat(100));
        uint(&s)
    };
    let seven = uint("7");
    let (q, r) = googol.div_rem(&seven);

    // 10^100 mod 7: 10 = 3 (mod 7), 3^100 = 4 (mod 7)
    assert_eq!(r.to_string(), "4");
    // the quotient is (10^100 - 4) / 7; its last digit is 8
    assert!(q.to_string().ends_with('8'));
    assert_eq!(q.to_string().len(), 100);
    assert_eq!(&q * &seven + &r, googol);
}

#[test]
fn emit_canonicalizes_parsed_text() {
    let cases = [
        ("0", "0"),
        ("00007", "7"),
        (
            "10000000000000000000000000000000000000000",
            "10000000000000000000000000000000000000000",
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(uint(input).to_string(), expected, "input {input:?}");
    }
}

#[test]
fn signed_division_truncates_toward_zero() {
    assert_eq!((int("-7") / int("2")).to_string(), "-3");
    assert_eq!((int("-7") % int("2")).to_string(), "-1");
    assert_eq!((int("7") / int("-2")).to_string(), "-3");
    assert_eq!((int("7") % int("-2")).to_string(), "1");
}

#[test]
fn parse_all_zero_spellings_to_one_identity() {
    let zero = DecUint::zero();
    for s in ["0", "00", "000", "0000000000000000000"] {
        assert_eq!(uint(s), zero, "spelling {s:?}");
    }
}
