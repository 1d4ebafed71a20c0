//! OTG cable identity sensing.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Mechanism used to sense OTG cable identity on this port.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum IdDetection {
    /// Controller's own ID pin.
    #[default]
    Id = 0,
    /// ID sensed through the PMU.
    PmuId = 1,
    /// ID sensed on a dedicated GPIO.
    GpioId = 2,
    /// No physical ID source, the role is fixed by software.
    VirtualId = 3,
    /// PMU ID sensing on a board without VBUS detection.
    PmuIdNoVbus = 4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_detection_encoding_roundtrip() {
        for (variant, raw) in [
            (IdDetection::Id, 0u8),
            (IdDetection::PmuId, 1),
            (IdDetection::GpioId, 2),
            (IdDetection::VirtualId, 3),
            (IdDetection::PmuIdNoVbus, 4),
        ] {
            assert_eq!(u8::from(variant), raw);
            assert_eq!(IdDetection::try_from(raw), Ok(variant));
        }
        assert!(IdDetection::try_from(5).is_err());
    }
}
