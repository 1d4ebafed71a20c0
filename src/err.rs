use num_enum::TryFromPrimitiveError;

use crate::{
    OperationMode,
    charging::{ChargerType, QuickChargeVoltage},
    detect::IdDetection,
    ops::LifecyclePoint,
    phy::PhyInterface,
};

pub type Result<T = ()> = core::result::Result<T, ConfigError>;

/// Errors raised when decoding persisted encodings or validating a
/// platform-data instance against the board.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown {what} encoding {value:#04x}")]
    UnknownEncoding { what: &'static str, value: u8 },
    #[error("quick charge voltage {requested:?} exceeds board rating {board_limit:?}")]
    QuickChargeOverBoardLimit {
        requested: QuickChargeVoltage,
        board_limit: QuickChargeVoltage,
    },
    #[error("phy interface {intf:?} does not match the attached phy config")]
    PhyConfigMismatch { intf: PhyInterface },
    #[error("operation mode {op_mode:?} does not match the attached mode data")]
    ModeDataMismatch { op_mode: OperationMode },
}

macro_rules! unknown_encoding {
    ($ty:ty, $what:expr) => {
        impl From<TryFromPrimitiveError<$ty>> for ConfigError {
            fn from(value: TryFromPrimitiveError<$ty>) -> Self {
                ConfigError::UnknownEncoding {
                    what: $what,
                    value: value.number,
                }
            }
        }
    };
}

unknown_encoding!(OperationMode, "operation mode");
unknown_encoding!(PhyInterface, "phy interface");
unknown_encoding!(IdDetection, "id detection");
unknown_encoding!(QuickChargeVoltage, "quick charge voltage");
unknown_encoding!(ChargerType, "charger type");
unknown_encoding!(LifecyclePoint, "lifecycle point");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_encoding_carries_value() {
        let err = PhyInterface::try_from(9).unwrap_err();
        assert_eq!(
            ConfigError::from(err),
            ConfigError::UnknownEncoding {
                what: "phy interface",
                value: 9
            }
        );
    }
}
