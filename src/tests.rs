use crate::{assume_decoded_size, compute_encoded_size, decode, encode, encode_wrapped, is_symbol};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

const PANGRAM_NOISY: &str = "* / * / *The quick brown fox\tjumps\nover\rthe lazy dog { < # > }";
const PANGRAM_PLAIN: &str = "*/*/*Thequickbrownfoxjumpsoverthelazydog{<#>}";
const PANGRAM_DATA: [u8; 36] = [
    197, 188, 152, 123, 190, 170, 196, 57, 20, 212, 152, 234, 45, 19, 38, 185, 248, 29, 56, 51,
    69, 134, 70, 46, 193, 65, 219, 166, 60, 124, 38, 76, 84, 125, 125, 174,
];

const DOG_NOISY: &str = "The quick brown\r\nfox\tjumps\nover\rthe lazy\n\rdog!";
const DOG_PLAIN: &str = "Thequickbrownfoxjumpsoverthelazydog!";
const DOG_DATA: [u8; 29] = [
    88, 136, 162, 112, 31, 156, 195, 75, 208, 5, 61, 106, 20, 163, 227, 172, 240, 150, 163, 100,
    63, 170, 82, 175, 58, 17, 203, 5, 3,
];

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}

#[test]
fn test_decode_pangram_with_spaces() {
    assert_eq!(decode(PANGRAM_NOISY), PANGRAM_DATA);
    assert_eq!(decode(PANGRAM_PLAIN), PANGRAM_DATA);
}

#[test]
fn test_encode_pangram_data() {
    assert_eq!(encode(&PANGRAM_DATA), PANGRAM_PLAIN);
}

#[test]
fn test_dog_vector_both_ways() {
    assert_eq!(decode(DOG_NOISY), DOG_DATA);
    assert_eq!(encode(&DOG_DATA), DOG_PLAIN);
}

#[test]
fn test_encode_decode_empty() {
    assert_eq!(encode(b""), "");
    assert!(decode("").is_empty());
}

#[test]
fn test_roundtrip_every_small_size() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for n in 0..=32 {
        for _ in 0..16 {
            let data = random_bytes(&mut rng, n);
            let encoded = encode(&data);
            assert_eq!(encoded.len(), compute_encoded_size(n), "n = {n}");
            assert_eq!(assume_decoded_size(encoded.len()), n, "n = {n}");
            assert_eq!(decode(&encoded), data, "n = {n}, text = {encoded}");
        }
    }
}

#[test]
fn test_roundtrip_edge_bytes() {
    for n in 0..=40 {
        for fill in [0x00u8, 0xFF, 0x80, 0x7F] {
            let data = vec![fill; n];
            assert_eq!(decode(encode(&data)), data, "n = {n}, fill = {fill:#04x}");
        }
    }
}

#[test]
fn test_roundtrip_large_random() {
    let mut rng = StdRng::seed_from_u64(42);
    let len = rng.random_range(1..(1 << 20));
    let data = random_bytes(&mut rng, len);
    let encoded = encode(&data);
    assert_eq!(encoded.len(), compute_encoded_size(len));
    assert!(encoded.bytes().all(is_symbol));
    assert_eq!(decode(&encoded), data);
}

#[test]
fn test_noise_is_ignored() {
    let mut rng = StdRng::seed_from_u64(7);
    let noise = [b' ', b'\t', b'\n', b'\r', b'"', b'\'', b'\\', 0x00, 0x7F, 0x80, 0xFF];

    for n in [1usize, 2, 5, 13, 100, 1000] {
        let data = random_bytes(&mut rng, n);
        let clean = encode(&data);

        let mut noisy = Vec::new();
        for &symbol in clean.as_bytes() {
            while rng.random_bool(0.3) {
                noisy.push(noise[rng.random_range(0..noise.len())]);
            }
            noisy.push(symbol);
        }
        noisy.extend_from_slice(b" \r\n");

        assert_eq!(decode(&noisy), decode(&clean));
        assert_eq!(decode(&noisy), data);
    }
}

#[test]
fn test_wrapped_roundtrip() {
    let mut rng = StdRng::seed_from_u64(91);
    let data = random_bytes(&mut rng, 777);
    for width in [0usize, 1, 2, 13, 64, 76, 10_000] {
        let wrapped = encode_wrapped(&data, width);
        assert_eq!(decode(&wrapped), data, "width = {width}");
    }
}

#[test]
fn test_stress_decode_random_text() {
    let mut rng = StdRng::seed_from_u64(1 << 20);
    let text = random_bytes(&mut rng, 1 << 20);
    let data = decode(&text);
    assert!(data.len() <= assume_decoded_size(text.len()));
}

#[test]
fn test_stress_decode_random_printable() {
    let mut rng = StdRng::seed_from_u64(65536);
    let text: Vec<u8> = (0..65536).map(|_| rng.random_range(0x20..0x7F)).collect();
    let data = decode(&text);
    assert!(data.len() <= assume_decoded_size(text.len()));
}
