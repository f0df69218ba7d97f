use docid_ulid::encoding::{ENCODING, TIME_LEN, TIME_MAX, ULID_LEN};
use docid_ulid::{decode_time, encode_time, FixedClock, Ulid, UlidGenerator};
use jiff::Timestamp;
use proptest::prelude::*;

proptest! {
    #[test]
    fn time_round_trips(t in 0..=TIME_MAX) {
        let encoded = encode_time(t, TIME_LEN).unwrap();
        prop_assert_eq!(encoded.len(), TIME_LEN);
        prop_assert_eq!(decode_time(&encoded).unwrap(), t);
    }

    #[test]
    fn time_order_is_text_order(a in 0..=TIME_MAX, b in 0..=TIME_MAX) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let lo_text = encode_time(lo, TIME_LEN).unwrap();
        let hi_text = encode_time(hi, TIME_LEN).unwrap();
        prop_assert!(lo_text < hi_text);
    }

    #[test]
    fn generated_ids_sort_by_time(a in 0..=TIME_MAX, b in 0..=TIME_MAX) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let generator = UlidGenerator::new().unwrap();
        let first = generator.generate_at(lo).unwrap();
        let second = generator.generate_at(hi).unwrap();
        prop_assert!(first < second);
        prop_assert!(first.parse::<Ulid>().unwrap() < second.parse::<Ulid>().unwrap());
    }

    #[test]
    fn ulid_text_round_trips(t in 0..=TIME_MAX, r in 0..(1_u128 << 80)) {
        let ulid = Ulid::from_parts(t, r).unwrap();
        let text = ulid.to_string();
        prop_assert_eq!(text.len(), ULID_LEN);
        prop_assert_eq!(text.parse::<Ulid>().unwrap(), ulid);
        prop_assert_eq!(decode_time(&text).unwrap(), t);
    }
}

#[test]
fn generated_ids_use_only_the_alphabet() {
    let generator = UlidGenerator::new().unwrap();
    for _ in 0..1_000 {
        let id = generator.generate().unwrap();
        assert_eq!(id.len(), ULID_LEN);
        assert!(id.bytes().all(|b| ENCODING.contains(&b)), "{id}");
    }
}

#[test]
fn fixed_clock_freezes_time_segment() {
    let at = Timestamp::from_millisecond(1_700_000_000_000).unwrap();
    let generator = UlidGenerator::with_clock(FixedClock::new(at), docid_ulid::OsPrng);
    let first = generator.generate().unwrap();
    let second = generator.generate().unwrap();
    assert_eq!(&first[..TIME_LEN], "01HF7YAT00");
    assert_eq!(&first[..TIME_LEN], &second[..TIME_LEN]);
    assert_ne!(first, second);
}
