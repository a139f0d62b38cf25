//! HomeKit accessory pairing primitives.
//!
//! Generates non-trivial 8-digit setup codes, packs the setup payload into
//! the `X-HM://` URI scanned by pairing clients, and produces the printed
//! identifiers (device code, serial, CSN) that go on an accessory label.

pub mod category;
pub mod error;
pub mod identifiers;
pub mod setup_code;
pub mod uri;
pub mod validation;

// Re-exports for convenience
pub use category::{category_name, categories, is_known_category};
pub use error::{PairingError, ValidationError};
pub use setup_code::{
    SetupCode, SetupCodeGenerator, UniformSource, generate_setup_code, is_too_simple, is_valid,
    to_plain,
};
pub use uri::{DecodedUri, PairingPayload, decode_uri, encode_uri, encode_uri_truncating};
