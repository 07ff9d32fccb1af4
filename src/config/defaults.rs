// src/config/defaults.rs
use crate::config::app::{AsymmetricSettings, EntropySettings, EntropySourceKind};
use crate::consts::{DEFAULT_ENTROPY_DEVICE, DEFAULT_RSA_BITS};

pub fn default_entropy() -> EntropySettings {
    EntropySettings {
        source: EntropySourceKind::Os,
        device_path: DEFAULT_ENTROPY_DEVICE.into(),
    }
}

pub fn default_asymmetric() -> AsymmetricSettings {
    AsymmetricSettings {
        rsa_bits: DEFAULT_RSA_BITS,
    }
}
