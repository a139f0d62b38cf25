//! `X-HM://` setup URI encoding.
//!
//! The payload is a 46-bit integer built from fixed-width fields, most
//! significant first, rendered as 9 base-36 digits and followed by the
//! 4-character setup ID. Pairing clients decode this layout directly, so the
//! widths, order, constants, alphabet and digit count are wire format.

use crate::error::{PairingError, ValidationError};
use crate::setup_code::SetupCode;

pub const URI_SCHEME: &str = "X-HM://";

pub const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Base-36 digits in the encoded payload.
pub const PAYLOAD_DIGITS: usize = 9;

pub const SETUP_ID_LEN: usize = 4;

/// `X-HM://` + payload digits + setup ID.
pub const URI_LEN: usize = URI_SCHEME.len() + PAYLOAD_DIGITS + SETUP_ID_LEN;

pub const PAYLOAD_VERSION: u64 = 0;
pub const PAYLOAD_RESERVED: u64 = 0;

/// Flags nibble; 2 marks an IP accessory.
pub const PAYLOAD_FLAGS: u64 = 2;

/// One bit-field of the setup payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadField {
    pub name: &'static str,
    pub width: u32,
    /// Offset of the field's least significant bit.
    pub shift: u32,
}

impl PayloadField {
    pub const fn mask(&self) -> u64 {
        (1u64 << self.width) - 1
    }

    const fn put(&self, value: u64) -> u64 {
        (value & self.mask()) << self.shift
    }

    const fn get(&self, payload: u64) -> u64 {
        (payload >> self.shift) & self.mask()
    }
}

pub const VERSION: PayloadField = PayloadField {
    name: "version",
    width: 3,
    shift: 43,
};
pub const RESERVED: PayloadField = PayloadField {
    name: "reserved",
    width: 4,
    shift: 39,
};
pub const CATEGORY: PayloadField = PayloadField {
    name: "category",
    width: 8,
    shift: 31,
};
pub const FLAGS: PayloadField = PayloadField {
    name: "flags",
    width: 4,
    shift: 27,
};
pub const PASSWORD: PayloadField = PayloadField {
    name: "password",
    width: 27,
    shift: 0,
};

/// Field layout, most significant first.
pub const PAYLOAD_LAYOUT: [PayloadField; 5] = [VERSION, RESERVED, CATEGORY, FLAGS, PASSWORD];

/// Total bits used by [`PAYLOAD_LAYOUT`].
pub const PAYLOAD_BITS: u32 =
    VERSION.width + RESERVED.width + CATEGORY.width + FLAGS.width + PASSWORD.width;

/// Unpacked setup payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingPayload {
    pub version: u64,
    pub reserved: u64,
    pub category: u64,
    pub flags: u64,
    pub password: u64,
}

impl PairingPayload {
    /// Payload for `category` and a numeric password with the protocol's
    /// version, reserved and flags values.
    pub fn new(category: u32, password: u32) -> Self {
        Self {
            version: PAYLOAD_VERSION,
            reserved: PAYLOAD_RESERVED,
            category: u64::from(category),
            flags: PAYLOAD_FLAGS,
            password: u64::from(password),
        }
    }

    /// Shift-and-mask composition. Oversized values are truncated to their
    /// field width, not rejected.
    pub fn pack(&self) -> u64 {
        VERSION.put(self.version)
            | RESERVED.put(self.reserved)
            | CATEGORY.put(self.category)
            | FLAGS.put(self.flags)
            | PASSWORD.put(self.password)
    }

    pub fn unpack(payload: u64) -> Self {
        Self {
            version: VERSION.get(payload),
            reserved: RESERVED.get(payload),
            category: CATEGORY.get(payload),
            flags: FLAGS.get(payload),
            password: PASSWORD.get(payload),
        }
    }

    /// Full URI for this payload and `setup_id` (appended verbatim).
    pub fn to_uri(&self, setup_id: &str) -> String {
        format!("{URI_SCHEME}{}{setup_id}", to_base36(self.pack()))
    }
}

/// Render `value` as exactly [`PAYLOAD_DIGITS`] base-36 digits, zero padded.
///
/// Higher digits beyond the ninth are dropped; a packed payload never has them.
pub fn to_base36(mut value: u64) -> String {
    let mut out = [b'0'; PAYLOAD_DIGITS];
    for slot in out.iter_mut().rev() {
        *slot = BASE36_ALPHABET[(value % 36) as usize];
        value /= 36;
    }
    out.iter().map(|&b| b as char).collect()
}

/// Parse base-36 digits from [`BASE36_ALPHABET`] (uppercase only).
pub fn from_base36(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        let d = BASE36_ALPHABET.iter().position(|&c| c == b)? as u64;
        acc.checked_mul(36)?.checked_add(d)
    })
}

/// Build the setup URI, checking that every input fits its field.
///
/// `password` must be 8 digits, dashed (`613-80-755`) or plain.
pub fn encode_uri(category: u32, password: &str, setup_id: &str) -> Result<String, PairingError> {
    if category > CATEGORY.mask() as u32 {
        return Err(ValidationError::CategoryOutOfRange(category).into());
    }

    let code: SetupCode = password.parse()?;

    let id_len = setup_id.chars().count();
    if id_len != SETUP_ID_LEN {
        return Err(ValidationError::SetupIdLength(id_len).into());
    }

    let uri = PairingPayload::new(category, code.value()).to_uri(setup_id);
    tracing::debug!(category, setup_id, uri = %uri, "Encoded setup URI");
    Ok(uri)
}

/// Reference encoding with no input checks: fields are masked to width.
pub fn encode_uri_truncating(category: u32, password: u32, setup_id: &str) -> String {
    PairingPayload::new(category, password).to_uri(setup_id)
}

/// A parsed setup URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedUri {
    pub payload: PairingPayload,
    pub setup_id: String,
}

impl DecodedUri {
    pub fn category(&self) -> u64 {
        self.payload.category
    }

    /// The password as it appears on the label, `XXX-XX-XXX`.
    pub fn setup_code(&self) -> String {
        let raw = format!("{:08}", self.payload.password);
        format!("{}-{}-{}", &raw[0..3], &raw[3..5], &raw[5..])
    }
}

/// Parse an `X-HM://` URI back into its fields.
pub fn decode_uri(uri: &str) -> Result<DecodedUri, PairingError> {
    let rest = uri
        .strip_prefix(URI_SCHEME)
        .ok_or_else(|| PairingError::MalformedUri(format!("missing {URI_SCHEME} prefix")))?;
    if uri.len() != URI_LEN || !rest.is_ascii() {
        return Err(PairingError::MalformedUri(format!(
            "expected {URI_LEN} ASCII characters, got {}",
            uri.len()
        )));
    }

    let (digits, setup_id) = rest.split_at(PAYLOAD_DIGITS);
    let payload = from_base36(digits)
        .ok_or_else(|| PairingError::MalformedUri(format!("invalid base-36 payload '{digits}'")))?;
    if payload >> PAYLOAD_BITS != 0 {
        return Err(PairingError::MalformedUri(format!(
            "payload {payload} exceeds {PAYLOAD_BITS} bits"
        )));
    }

    Ok(DecodedUri {
        payload: PairingPayload::unpack(payload),
        setup_id: setup_id.to_string(),
    })
}
