//! The balanced-ternary ⇄ two's-complement codec.
//!
//! A 243-trit block whose last trit is zero represents a signed integer in
//! ±(3²⁴² − 1)/2. This module converts such blocks to and from the 48-byte
//! big-endian two's-complement form consumed by the Kerl adapter and by
//! external transaction/address encodings.
//!
//! The conversion cannot be done digit-by-digit: every ternary digit
//! carries into every binary word. Encoding therefore multiplies an
//! accumulator through the full 384-bit width once per trit, and decoding
//! long-divides by three once per trit.

use trellis_ternary::trits::{validate_trits, Trit, HASH_TRITS};

use crate::bigint::{BYTE_COUNT, U384};
use crate::error::Error;

/// (3²⁴² − 1)/2: the bias between the excess-1 accumulator and the signed
/// value, and the magnitude bound of a 242-trit balanced number.
pub(crate) const HALF_3: U384 = U384::from_words([
    0xa5ce_8964,
    0x9f00_7669,
    0x1484_504f,
    0x3ade_00d9,
    0x0c24_486e,
    0x5097_9d57,
    0x79a4_c702,
    0x48bb_ae36,
    0xa9f6_808b,
    0xaa06_a805,
    0xa87f_abdf,
    0x5e69_ebef,
]);

/// Encodes 243 trits into 48 big-endian bytes.
///
/// Trit 242 is assumed zero and ignored. Fails with
/// [`Error::InvalidTritsLength`] for any other input length and with
/// [`Error::InvalidTritValue`] for digits outside {-1, 0, 1}.
pub fn trits_to_bytes(trits: &[Trit]) -> Result<[u8; BYTE_COUNT], Error> {
    if trits.len() != HASH_TRITS {
        return Err(Error::InvalidTritsLength(trits.len()));
    }
    validate_trits(trits)?;

    // All-minus-ones short-circuits: the loop below would leave the
    // accumulator at zero, and the zero guard would then skip the bias
    // adjustment. -HALF_3 is emitted directly as ~HALF_3 + 1.
    if trits[..HASH_TRITS - 1].iter().all(|&t| t == -1) {
        let mut acc = HALF_3;
        acc.not();
        acc.add_small(1);
        return Ok(acc.to_be_bytes());
    }

    // Excess-1 accumulation keeps the value non-negative throughout:
    // after the loop acc = value + HALF_3, in [0, 3^242).
    let mut acc = U384::ZERO;
    for &trit in trits[..HASH_TRITS - 1].iter().rev() {
        acc.mul_small(3);
        acc.add_small((trit + 1) as u32);
    }

    if !acc.is_zero() {
        if HALF_3 <= acc {
            acc.sub(&HALF_3);
        } else {
            // Negative value: two's complement of (HALF_3 - acc).
            let mut neg = HALF_3;
            neg.sub(&acc);
            neg.not();
            neg.add_small(1);
            acc = neg;
        }
    }
    Ok(acc.to_be_bytes())
}

/// Decodes 48 big-endian bytes into 243 trits; trit 242 is always zero.
///
/// Fails with [`Error::InvalidBytesLength`] for any other input length.
pub fn bytes_to_trits(bytes: &[u8]) -> Result<[Trit; HASH_TRITS], Error> {
    if bytes.len() != BYTE_COUNT {
        return Err(Error::InvalidBytesLength(bytes.len()));
    }
    let mut buf = [0u8; BYTE_COUNT];
    buf.copy_from_slice(bytes);
    let mut acc = U384::from_be_bytes(&buf);

    let mut trits = [0 as Trit; HASH_TRITS];
    if acc.is_zero() {
        return Ok(trits);
    }

    let mut flip = false;
    if !acc.msb() {
        // Positive: bias into the excess-1 domain.
        acc.add(&HALF_3);
    } else {
        // Negative: work on the one's complement, |value| - 1. Magnitudes
        // beyond HALF_3 + 1 reduce modulo 3^242 through the flip branch;
        // they occur for arbitrary digest input, never for codec output.
        acc.not();
        if acc > HALF_3 {
            acc.sub(&HALF_3);
            flip = true;
        } else {
            acc.add_small(1);
            let mut tmp = HALF_3;
            tmp.sub(&acc);
            acc = tmp;
        }
    }

    for trit in trits[..HASH_TRITS - 1].iter_mut() {
        *trit = acc.div_small_rem(3) as Trit - 1;
    }
    if flip {
        for trit in trits.iter_mut() {
            *trit = -*trit;
        }
    }
    Ok(trits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encoded_hex(trits: &[Trit]) -> String {
        hex::encode(trits_to_bytes(trits).unwrap())
    }

    const HALF_3_HEX: &str = "5e69ebefa87fabdfaa06a805a9f6808b48bbae3679a4c70250979d570c24486e3ade00d91484504f9f007669a5ce8964";
    const MINUS_HALF_3_HEX: &str = "a19614105780542055f957fa56097f74b74451c9865b38fdaf6862a8f3dbb791c521ff26eb7bafb060ff89965a31769c";

    #[test]
    fn test_half_3_constant() {
        assert_eq!(hex::encode(HALF_3.to_be_bytes()), HALF_3_HEX);
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encoded_hex(&[0; HASH_TRITS]), "0".repeat(96));
    }

    #[test]
    fn test_encode_one() {
        let mut trits = [0; HASH_TRITS];
        trits[0] = 1;
        assert_eq!(encoded_hex(&trits), format!("{}1", "0".repeat(95)));
    }

    #[test]
    fn test_encode_minus_one() {
        let mut trits = [0; HASH_TRITS];
        trits[0] = -1;
        assert_eq!(encoded_hex(&trits), "f".repeat(96));
    }

    #[test]
    fn test_encode_all_plus_ones() {
        // +HALF_3, the largest representable value. Trit 242 is ignored.
        assert_eq!(encoded_hex(&[1; HASH_TRITS]), HALF_3_HEX);
    }

    #[test]
    fn test_encode_all_minus_ones() {
        // -HALF_3 through the short-circuit path.
        assert_eq!(encoded_hex(&[-1; HASH_TRITS]), MINUS_HALF_3_HEX);
    }

    #[test]
    fn test_decode_zero() {
        let trits = bytes_to_trits(&[0u8; BYTE_COUNT]).unwrap();
        assert_eq!(trits, [0; HASH_TRITS]);
    }

    #[test]
    fn test_decode_minus_one() {
        let trits = bytes_to_trits(&[0xff; BYTE_COUNT]).unwrap();
        let mut expected = [0; HASH_TRITS];
        expected[0] = -1;
        assert_eq!(trits, expected);
    }

    #[test]
    fn test_decode_forces_last_trit_zero() {
        let trits = bytes_to_trits(&trits_to_bytes(&[1; HASH_TRITS]).unwrap()).unwrap();
        assert_eq!(trits[HASH_TRITS - 1], 0);
        assert_eq!(&trits[..HASH_TRITS - 1], &[1; HASH_TRITS - 1][..]);
    }

    #[test]
    fn test_roundtrip_extremes() {
        for trits in [[1; HASH_TRITS], [-1; HASH_TRITS], [0; HASH_TRITS]] {
            let mut expected = trits;
            expected[HASH_TRITS - 1] = 0;
            let bytes = trits_to_bytes(&trits).unwrap();
            assert_eq!(bytes_to_trits(&bytes).unwrap(), expected);
        }
    }

    #[test]
    fn test_length_checks() {
        assert_eq!(
            trits_to_bytes(&[0; 242]),
            Err(Error::InvalidTritsLength(242))
        );
        assert_eq!(
            trits_to_bytes(&[0; 486]),
            Err(Error::InvalidTritsLength(486))
        );
        assert_eq!(bytes_to_trits(&[0; 47]), Err(Error::InvalidBytesLength(47)));
        assert_eq!(bytes_to_trits(&[0; 49]), Err(Error::InvalidBytesLength(49)));
    }

    #[test]
    fn test_value_check() {
        let mut trits = [0; HASH_TRITS];
        trits[100] = 2;
        assert_eq!(trits_to_bytes(&trits), Err(Error::InvalidTritValue(2)));
    }

    fn hash_trits() -> impl Strategy<Value = [Trit; HASH_TRITS]> {
        prop::collection::vec(-1i8..=1, HASH_TRITS).prop_map(|v| {
            let mut trits = [0; HASH_TRITS];
            trits.copy_from_slice(&v);
            trits[HASH_TRITS - 1] = 0;
            trits
        })
    }

    proptest! {
        #[test]
        fn prop_decode_encode_roundtrip(trits in hash_trits()) {
            let bytes = trits_to_bytes(&trits).unwrap();
            prop_assert_eq!(bytes_to_trits(&bytes).unwrap(), trits);
        }

        #[test]
        fn prop_encode_decode_roundtrip(trits in hash_trits()) {
            // Every in-range 48-byte value is the encoding of some block.
            let bytes = trits_to_bytes(&trits).unwrap();
            let decoded = bytes_to_trits(&bytes).unwrap();
            prop_assert_eq!(trits_to_bytes(&decoded).unwrap(), bytes);
        }
    }
}
