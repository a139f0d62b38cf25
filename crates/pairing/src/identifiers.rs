//! Random identifiers printed on the label: device code, serial number,
//! CSN, setup ID and MAC address.
//!
//! Every generator takes the RNG explicitly so labels can be reproduced from
//! a seed.

use rand::Rng;

const SETUP_ID_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const HEX_CHARSET: &[u8] = b"0123456789ABCDEF";

/// Length of a generated setup ID.
pub const SETUP_ID_LEN: usize = 4;

/// Length of a MAC address without separators.
pub const MAC_LEN: usize = 12;

pub const SERIAL_LEN: usize = 12;
pub const CSN_LEN: usize = 33;

/// Character class in an identifier pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Letter,
    Digit,
}

use Slot::{Digit, Letter};

const SERIAL_PATTERN: [Slot; SERIAL_LEN] = [
    Letter, Digit, Letter, Letter, Letter, Digit, Letter, Digit, Digit, Digit, Letter, Letter,
];

fn letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

fn digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}

fn push_slots<R: Rng + ?Sized>(out: &mut String, slots: &[Slot], rng: &mut R) {
    for slot in slots {
        out.push(match slot {
            Letter => letter(rng),
            Digit => digit(rng),
        });
    }
}

fn pick<R: Rng + ?Sized>(charset: &[u8], len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| char::from(charset[rng.gen_range(0..charset.len())]))
        .collect()
}

/// Device code `LL{category}LDLL/L`, e.g. `AB5C2DE/F`.
pub fn generate_device_code<R: Rng + ?Sized>(category: u32, rng: &mut R) -> String {
    let mut code = String::with_capacity(12);
    push_slots(&mut code, &[Letter, Letter], rng);
    code.push_str(&category.to_string());
    push_slots(&mut code, &[Letter, Digit, Letter, Letter], rng);
    code.push('/');
    code.push(letter(rng));
    code
}

/// 12-character serial number (`LDLLLDLDDDLL`).
pub fn generate_serial<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut serial = String::with_capacity(SERIAL_LEN);
    push_slots(&mut serial, &SERIAL_PATTERN, rng);
    serial
}

/// 33-character CSN: 20 digits, 3 letters, 4 digits, letter, digit, letter,
/// 3 digits.
pub fn generate_csn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut csn = String::with_capacity(CSN_LEN);
    push_slots(&mut csn, &[Digit; 20], rng);
    push_slots(&mut csn, &[Letter; 3], rng);
    push_slots(&mut csn, &[Digit; 4], rng);
    push_slots(&mut csn, &[Letter, Digit, Letter], rng);
    push_slots(&mut csn, &[Digit; 3], rng);
    csn
}

pub fn generate_setup_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(SETUP_ID_CHARSET, SETUP_ID_LEN, rng)
}

/// 12 uppercase hex characters, no separators.
pub fn generate_mac<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(HEX_CHARSET, MAC_LEN, rng)
}

/// `30AEA40506A0` -> `30:AE:A4:05:06:A0`. Other lengths are returned as-is.
pub fn format_mac_display(mac: &str) -> String {
    if mac.len() != MAC_LEN || !mac.is_ascii() {
        return mac.to_string();
    }
    mac.as_bytes()
        .chunks(2)
        .map(|pair| pair.iter().map(|&b| char::from(b.to_ascii_uppercase())).collect::<String>())
        .collect::<Vec<_>>()
        .join(":")
}
