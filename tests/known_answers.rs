//! Frozen known-answer vectors for the key schedule and both ciphers.
//!
//! Vectors for keys longer than 512 bytes freeze the chained multi-pass
//! schedule. Any change in output indicates a regression.

use titanwall::{KeySchedule, TitanWallBlockCipher, TitanWallStreamCipher, KDSB_WORDS};

const BLOCK_KEY: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
const STREAM_KEY: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];

const PLAINTEXT: [u32; 8] = [
    0x0123_4567,
    0x89AB_CDEF,
    0xFEDC_BA98,
    0x7654_3210,
    0xAAAA_AAAA,
    0x5555_5555,
    0x8000_0000,
    0x1111_1111,
];

const CIPHERTEXT: [u32; 8] = [
    0x3270_C54C,
    0xF5E7_6C61,
    0x9F56_8372,
    0x1C39_6BCD,
    0x30A0_BC6E,
    0x0877_E685,
    0xB558_C27C,
    0x066B_BD63,
];

fn assert_kdsb(key: &[u8], head: [u32; 4], tail: [u32; 4]) {
    let schedule = KeySchedule::new(key).unwrap();
    let kdsb = schedule.subkeys();
    assert_eq!(kdsb[..4], head, "KDSB head mismatch for {}-byte key", key.len());
    assert_eq!(
        kdsb[KDSB_WORDS - 4..],
        tail,
        "KDSB tail mismatch for {}-byte key",
        key.len()
    );
}

// ═══════════════════════════════════════════════════════════════════════
// KeySchedule
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn kdsb_eight_byte_key() {
    assert_kdsb(
        &BLOCK_KEY,
        [0x9F9C_8657, 0xFA70_BF1E, 0x7A8B_42DB, 0xCDC6_BB1B],
        [0xCFC5_453E, 0x0292_EFF0, 0x7E95_C377, 0x96D5_7788],
    );
}

#[test]
fn kdsb_single_zero_byte_key() {
    let schedule = KeySchedule::new(&[0x00]).unwrap();
    assert_eq!(
        schedule.subkeys()[..4],
        [0xFBD7_1917, 0x2685_E827, 0x3579_50B4, 0x6DFD_C038]
    );
}

#[test]
fn kdsb_full_single_pass_key() {
    let key: Vec<u8> = (0..512).map(|i| (i & 0xFF) as u8).collect();
    assert_kdsb(
        &key,
        [0xC8D1_2A65, 0xF927_DB87, 0xBDBF_DE5F, 0x2943_0E2B],
        [0xB594_4FD2, 0x9C78_7D41, 0x8ABE_FEC9, 0xC07B_96B1],
    );
}

#[test]
fn kdsb_partial_second_pass() {
    let key: Vec<u8> = (0..600).map(|i| (i & 0xFF) as u8).collect();
    assert_kdsb(
        &key,
        [0x0B17_809E, 0x88C2_9DA3, 0x86E2_3E43, 0x602E_3AA0],
        [0xAC14_5C3E, 0x1038_40FC, 0xB4C0_D3A8, 0xCC9A_4E6A],
    );
}

#[test]
fn kdsb_two_full_passes() {
    let key: Vec<u8> = (0..1024).map(|i| ((i * 7 + 3) & 0xFF) as u8).collect();
    assert_kdsb(
        &key,
        [0x7DBC_C9B0, 0xA487_72D4, 0xB347_2ABA, 0x000B_C9D3],
        [0x3116_386C, 0x60CF_CC0F, 0x5373_C746, 0x6209_96BE],
    );
}

#[test]
fn kdsb_three_passes_carry_state() {
    let key: Vec<u8> = (0..1536).map(|i| ((i * 7 + 3) & 0xFF) as u8).collect();
    assert_kdsb(
        &key,
        [0x6FA8_FCA8, 0x4CE4_6689, 0x03AB_826D, 0xA2A5_7166],
        [0x59DA_1D98, 0xDBD2_D24E, 0x5790_AB72, 0x5FF4_807A],
    );
}

#[test]
fn bytes_past_first_pass_change_the_schedule() {
    let short: Vec<u8> = (0..512).map(|i| (i & 0xFF) as u8).collect();
    let mut long = short.clone();
    long.extend_from_slice(&[0xAB; 88]);

    let a = KeySchedule::new(&short).unwrap();
    let b = KeySchedule::new(&long).unwrap();
    assert_ne!(a.subkeys(), b.subkeys());
}

// ═══════════════════════════════════════════════════════════════════════
// TitanWallBlockCipher
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn block_single_vector() {
    let cipher = TitanWallBlockCipher::new(&BLOCK_KEY).unwrap();
    assert_eq!(cipher.encrypt(&PLAINTEXT).unwrap(), CIPHERTEXT);
    assert_eq!(cipher.decrypt(&CIPHERTEXT).unwrap(), PLAINTEXT);
}

#[test]
fn block_zero_plaintext() {
    let cipher = TitanWallBlockCipher::new(&BLOCK_KEY).unwrap();
    assert_eq!(
        cipher.encrypt(&[0u32; 8]).unwrap(),
        [
            0xAFF8_0219,
            0x6754_54E4,
            0x88B0_165D,
            0x7508_5602,
            0x7F5D_2071,
            0x06DD_55F3,
            0xF121_B802,
            0x0779_FFF9,
        ]
    );
}

#[test]
fn block_repeated_blocks_encrypt_identically() {
    let cipher = TitanWallBlockCipher::new(&BLOCK_KEY).unwrap();
    let plaintext: Vec<u32> = PLAINTEXT.iter().chain(PLAINTEXT.iter()).copied().collect();
    let ciphertext = cipher.encrypt(&plaintext).unwrap();
    assert_eq!(ciphertext[..8], CIPHERTEXT);
    assert_eq!(ciphertext[8..], CIPHERTEXT);
}

// ═══════════════════════════════════════════════════════════════════════
// TitanWallStreamCipher
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn stream_consecutive_calls() {
    let mut cipher = TitanWallStreamCipher::new(&STREAM_KEY).unwrap();

    let mut first = [0u8; 32];
    cipher.generate_pseudo_random_bytes(&mut first).unwrap();
    assert_eq!(
        first,
        [
            0xCD, 0x69, 0x2E, 0x5F, 0x4B, 0x3A, 0x79, 0x99, 0x72, 0x62, 0x95, 0x31, 0x65, 0x1B,
            0x75, 0x3A, 0x85, 0x24, 0x77, 0x80, 0xF8, 0x7E, 0xF9, 0xDF, 0xA2, 0xE9, 0x8C, 0x6E,
            0x56, 0x80, 0x30, 0x3A,
        ]
    );

    let mut second = [0u8; 16];
    cipher.generate_pseudo_random_bytes(&mut second).unwrap();
    assert_eq!(
        second,
        [
            0x2A, 0xD1, 0x48, 0x4B, 0xBE, 0x95, 0x18, 0xAB, 0xEE, 0x73, 0x60, 0xB7, 0xEB, 0xCE,
            0xEE, 0xBF,
        ]
    );
}

#[test]
fn stream_xor_message() {
    let mut cipher = TitanWallStreamCipher::new(&STREAM_KEY).unwrap();
    let mut message = *b"Hello, TitanWall!";
    cipher.apply_keystream(&mut message).unwrap();
    assert_eq!(
        message,
        [
            0x85, 0x0C, 0x42, 0x33, 0x24, 0x16, 0x59, 0xCD, 0x1B, 0x16, 0xF4, 0x5F, 0x32, 0x7A,
            0x19, 0x56, 0xA4,
        ]
    );
}
