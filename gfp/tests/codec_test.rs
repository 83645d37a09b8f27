use std::path::PathBuf;

use gfp::fixtures::{load_fixtures, GfpFixture};
use gfp::{GfpCodec, GfpError, GfpParams, WORD_WIDTH};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PRIME: &str = "198766463529478683931867765928436695041";
const R: &str = "141515903391459779531506841503331516415";
const R_INV: &str = "133854242216446749056083838363708373830";

const REPETITIONS: usize = 100_000;

fn codec() -> GfpCodec {
    GfpCodec::new(
        PRIME.parse().unwrap(),
        R.parse().unwrap(),
        R_INV.parse().unwrap(),
    )
    .unwrap()
}

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn fixtures(codec: &GfpCodec) -> Vec<GfpFixture> {
    load_fixtures(
        data_file("gfp_test_data.bin"),
        data_file("bigint_test_data.txt"),
        codec.prime(),
    )
    .expect("fixture pair must load")
}

fn signed(value: &BigUint) -> BigInt {
    BigInt::from_biguint(Sign::Plus, value.clone())
}

// ============================================================================
// Parameters
// ============================================================================

#[test]
fn test_parameters_read_back() {
    let codec = codec();
    assert_eq!(codec.prime().to_string(), PRIME);
    assert_eq!(codec.r().to_string(), R);
    assert_eq!(codec.r_inv().to_string(), R_INV);
}

#[test]
fn test_codec_from_toml() {
    let params = GfpParams::from_toml_str(&format!(
        "prime = \"{PRIME}\"\nr = \"{R}\"\nr_inv = \"{R_INV}\"\n"
    ))
    .unwrap();
    let from_config = GfpCodec::try_from(&params).unwrap();
    assert_eq!(from_config, codec());
}

#[test]
fn test_codec_from_params_missing_value() {
    let params = GfpParams {
        prime: Some(PRIME.into()),
        r: None,
        r_inv: Some(R_INV.into()),
    };
    let err = GfpCodec::from_params(&params).unwrap_err();
    assert_eq!(err, GfpError::MissingParameter("r"));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_params_new_roundtrip() {
    let c = codec();
    let params = GfpParams::new(c.prime(), c.r(), c.r_inv());
    assert_eq!(GfpCodec::try_from(params).unwrap(), c);
}

// ============================================================================
// Known vectors
// ============================================================================

#[test]
fn test_fixtures_decode() {
    let codec = codec();
    let fixtures = fixtures(&codec);
    assert!(!fixtures.is_empty());
    for fixture in &fixtures {
        assert_eq!(
            codec.from_gfp(&fixture.gfp).unwrap(),
            fixture.value,
            "converted value does not match actual value"
        );
    }
}

#[test]
fn test_fixtures_encode() {
    let codec = codec();
    for fixture in &fixtures(&codec) {
        assert_eq!(
            codec.to_gfp(&signed(&fixture.value)).unwrap(),
            fixture.gfp,
            "converted bytes do not match the MP-SPDZ representation of {}",
            fixture.value
        );
    }
}

#[test]
fn test_fixture_stream_decodes_in_one_pass() {
    let codec = codec();
    let bytes = std::fs::read(data_file("gfp_test_data.bin")).unwrap();
    let expected: Vec<BigUint> = fixtures(&codec).into_iter().map(|f| f.value).collect();
    assert_eq!(codec.from_gfp_words(&bytes).unwrap(), expected);
}

#[test]
fn test_vectors_near_word_boundaries() {
    let codec = codec();
    let prime: BigUint = PRIME.parse().unwrap();
    let cases: Vec<(BigUint, &str)> = vec![
        (BigUint::zero(), "00000000000000000000000000000000"),
        (BigUint::one(), "ffffcbdbb5aa28e479c9de70baf8766a"),
        (BigUint::from(2u32), "fdff639321007aac6d5c9c522fea643f"),
        (BigUint::from(42u32), "b9ff93f56f584747cee0c94db5fbfe86"),
        (&prime - 1u32, "0200684894aaae370c6d421e8b0e122b"),
        (prime.clone(), "00000000000000000000000000000000"),
        (BigUint::from(u64::MAX), "e718b3a00e9b4f1cb59e7a02de05b850"),
        (BigUint::one() << 64, "e5184b587af0a0e4a83138e452f7a525"),
        (BigUint::one() << 127, "a96826d514028bbf3ff7590a44a3c917"),
    ];
    for (value, hex) in cases {
        let gfp = codec.to_gfp(&signed(&value)).unwrap();
        let expected: Vec<u8> = (0..WORD_WIDTH)
            .map(|i| u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).unwrap())
            .collect();
        assert_eq!(gfp.to_vec(), expected, "encoding of {value}");
        assert_eq!(codec.from_gfp(&gfp).unwrap(), &value % &prime);
    }
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_wrong_length_rejected() {
    let err = codec().from_gfp(&[4, 2]).unwrap_err();
    assert_eq!(
        err,
        GfpError::InvalidLength {
            expected: WORD_WIDTH,
            actual: 2
        }
    );
    assert!(err.to_string().contains("must have a length of"));

    assert!(codec().from_gfp(&[0u8; WORD_WIDTH + 1]).is_err());
    assert!(codec().from_gfp(&[]).is_err());
}

#[test]
fn test_negative_value_rejected() {
    let err = codec().to_gfp(&BigInt::from(-1)).unwrap_err();
    assert!(matches!(err, GfpError::NegativeValue { .. }));
    assert!(err.to_string().contains("must not be negative"));
}

#[test]
fn test_value_greater_than_prime_rejected() {
    let codec = codec();
    let above = signed(codec.prime()) + 1;
    let err = codec.to_gfp(&above).unwrap_err();
    assert!(matches!(err, GfpError::ValueTooLarge { .. }));
    let message = err.to_string();
    assert!(message.contains("must not be larger"));
    assert!(message.contains(PRIME));
    assert!(message.contains(&above.to_string()));
}

#[test]
fn test_decode_all_ones_reduced() {
    let codec = codec();
    let value = codec.from_gfp(&[0xff; WORD_WIDTH]).unwrap();
    assert!(&value < codec.prime());
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn test_random_roundtrip() {
    let codec = codec();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..REPETITIONS {
        let v = rng.gen_range(0..=i64::MAX);
        let gfp = codec.to_gfp(&BigInt::from(v)).unwrap();
        assert_eq!(
            codec.from_gfp(&gfp).unwrap(),
            BigUint::from(v as u64),
            "roundtrip does not preserve value"
        );
    }
}

#[test]
fn test_shared_codec_across_threads() {
    let codec = codec();
    let fixtures = fixtures(&codec);
    std::thread::scope(|s| {
        for chunk in fixtures.chunks(16) {
            let codec = &codec;
            s.spawn(move || {
                for fixture in chunk {
                    assert_eq!(codec.from_gfp(&fixture.gfp).unwrap(), fixture.value);
                    assert_eq!(codec.to_gfp(&signed(&fixture.value)).unwrap(), fixture.gfp);
                }
            });
        }
    });
}
