//! # Sample Batch
//!
//! The card numbers the `demo` command runs on: five known-valid,
//! five known-invalid and five of unknown status.

pub static VALID_1: [u8; 16] = [4, 5, 3, 9, 6, 7, 7, 9, 0, 8, 0, 1, 6, 8, 0, 8];
pub static VALID_2: [u8; 16] = [5, 5, 3, 5, 7, 6, 6, 7, 6, 8, 7, 5, 1, 4, 3, 9];
pub static VALID_3: [u8; 15] = [3, 7, 1, 6, 1, 2, 0, 1, 9, 9, 8, 5, 2, 3, 6];
pub static VALID_4: [u8; 16] = [6, 0, 1, 1, 1, 4, 4, 3, 4, 0, 6, 8, 2, 9, 0, 5];
pub static VALID_5: [u8; 16] = [4, 5, 3, 9, 4, 0, 4, 9, 6, 7, 8, 6, 9, 6, 6, 6];

pub static INVALID_1: [u8; 16] = [4, 5, 3, 2, 7, 7, 8, 7, 7, 1, 0, 9, 1, 7, 9, 5];
pub static INVALID_2: [u8; 16] = [5, 7, 9, 5, 5, 9, 3, 3, 9, 2, 1, 3, 4, 6, 4, 3];
pub static INVALID_3: [u8; 15] = [3, 7, 5, 7, 9, 6, 0, 8, 4, 4, 5, 9, 9, 1, 4];
pub static INVALID_4: [u8; 16] = [6, 0, 1, 1, 1, 2, 7, 9, 6, 1, 7, 7, 7, 9, 3, 5];
pub static INVALID_5: [u8; 16] = [5, 3, 8, 2, 0, 1, 9, 7, 7, 2, 8, 8, 3, 8, 5, 4];

pub static MYSTERY_1: [u8; 15] = [3, 4, 4, 8, 0, 1, 9, 6, 8, 3, 0, 5, 4, 1, 4];
pub static MYSTERY_2: [u8; 16] = [5, 4, 6, 6, 1, 0, 0, 8, 6, 1, 6, 2, 0, 2, 3, 9];
pub static MYSTERY_3: [u8; 19] = [6, 0, 1, 1, 3, 7, 7, 0, 2, 0, 9, 6, 2, 6, 5, 6, 2, 0, 3];
pub static MYSTERY_4: [u8; 16] = [4, 9, 2, 9, 8, 7, 7, 1, 6, 9, 2, 1, 7, 0, 9, 3];
pub static MYSTERY_5: [u8; 16] = [4, 9, 1, 3, 5, 4, 0, 4, 6, 3, 0, 7, 2, 5, 2, 3];

/// All fifteen samples, valid first, then invalid, then mystery.
pub fn batch() -> Vec<&'static [u8]> {
    vec![
        VALID_1.as_slice(),
        VALID_2.as_slice(),
        VALID_3.as_slice(),
        VALID_4.as_slice(),
        VALID_5.as_slice(),
        INVALID_1.as_slice(),
        INVALID_2.as_slice(),
        INVALID_3.as_slice(),
        INVALID_4.as_slice(),
        INVALID_5.as_slice(),
        MYSTERY_1.as_slice(),
        MYSTERY_2.as_slice(),
        MYSTERY_3.as_slice(),
        MYSTERY_4.as_slice(),
        MYSTERY_5.as_slice(),
    ]
}
