//! Charger voltage classes, detected charger types and their default
//! current limits.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::pdata::DevModeData;

/// Ceiling on the voltage negotiated with a Quick Charge 2 wall charger.
///
/// A low value means longer charge time; a value above what the board's
/// input stage is rated for will damage the board. The rating is the board
/// designer's call, checked by
/// [`PlatformData::validate`](crate::PlatformData::validate). When in doubt
/// use 5V.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum QuickChargeVoltage {
    #[default]
    V5 = 0,
    V9 = 1,
    V12 = 2,
    V20 = 3,
}

impl QuickChargeVoltage {
    /// Negotiated ceiling in millivolts.
    pub const fn millivolts(self) -> u32 {
        match self {
            QuickChargeVoltage::V5 => 5_000,
            QuickChargeVoltage::V9 => 9_000,
            QuickChargeVoltage::V12 => 12_000,
            QuickChargeVoltage::V20 => 20_000,
        }
    }
}

/// Default current limits in microamps, applied when the board leaves the
/// per-type override at zero.
pub const SDP_CURRENT_LIMIT_UA: u32 = 500_000;
pub const DCP_CURRENT_LIMIT_UA: u32 = 1_500_000;
pub const CDP_CURRENT_LIMIT_UA: u32 = 1_500_000;
pub const NV_CHARGER_CURRENT_LIMIT_UA: u32 = 2_000_000;
pub const NON_STANDARD_CURRENT_LIMIT_UA: u32 = 500_000;
pub const APPLE_500MA_CURRENT_LIMIT_UA: u32 = 500_000;
pub const APPLE_1000MA_CURRENT_LIMIT_UA: u32 = 1_000_000;
pub const APPLE_2000MA_CURRENT_LIMIT_UA: u32 = 2_000_000;

/// Outcome of charger detection on a device-mode port.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ChargerType {
    /// Nothing attached.
    #[default]
    None = 0,
    /// Standard downstream port (a normal USB host).
    Sdp = 1,
    /// Dedicated charging port (wall charger).
    Dcp = 2,
    /// Quick Charge 2 wall charger.
    DcpQc2 = 3,
    /// Maxim proprietary wall charger.
    DcpMaxim = 4,
    /// Charging downstream port.
    Cdp = 5,
    NvCharger = 6,
    /// Charger that failed BC1.2 detection.
    NonStandard = 7,
    Apple500Ma = 8,
    Apple1000Ma = 9,
    Apple2000Ma = 10,
}

impl ChargerType {
    /// Cable-state name published to the extcon device for this charger
    /// type. Empty for [`ChargerType::None`].
    pub const fn extcon_cable_name(self) -> &'static str {
        match self {
            ChargerType::None => "",
            ChargerType::Sdp => "USB",
            ChargerType::Dcp => "TA",
            ChargerType::DcpQc2 => "QC2",
            ChargerType::DcpMaxim => "MAXIM",
            ChargerType::Cdp => "Charge-downstream",
            ChargerType::NvCharger => "Fast-charger",
            ChargerType::NonStandard => "Slow-charger",
            ChargerType::Apple500Ma => "Apple 500mA-charger",
            ChargerType::Apple1000Ma => "Apple 1A-charger",
            ChargerType::Apple2000Ma => "Apple 2A-charger",
        }
    }

    /// Current limit in microamps to request for this charger type,
    /// honoring the board's per-port overrides.
    ///
    /// DCP and Maxim chargers use the board's DCP override when set; QC2
    /// uses the QC2 override as-is, the way the board filled it in.
    pub fn default_current_limit_ua(self, dev: &DevModeData) -> u32 {
        let dcp = if dev.dcp_current_limit_ma != 0 {
            dev.dcp_current_limit_ma * 1_000
        } else {
            DCP_CURRENT_LIMIT_UA
        };
        match self {
            ChargerType::None => 0,
            ChargerType::Sdp => SDP_CURRENT_LIMIT_UA,
            ChargerType::Dcp | ChargerType::DcpMaxim => dcp,
            ChargerType::DcpQc2 => dev.qc2_current_limit_ma * 1_000,
            ChargerType::Cdp => CDP_CURRENT_LIMIT_UA,
            ChargerType::NvCharger => NV_CHARGER_CURRENT_LIMIT_UA,
            ChargerType::NonStandard => NON_STANDARD_CURRENT_LIMIT_UA,
            ChargerType::Apple500Ma => APPLE_500MA_CURRENT_LIMIT_UA,
            ChargerType::Apple1000Ma => APPLE_1000MA_CURRENT_LIMIT_UA,
            ChargerType::Apple2000Ma => APPLE_2000MA_CURRENT_LIMIT_UA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qc2_voltage_encoding_roundtrip() {
        for (variant, raw) in [
            (QuickChargeVoltage::V5, 0u8),
            (QuickChargeVoltage::V9, 1),
            (QuickChargeVoltage::V12, 2),
            (QuickChargeVoltage::V20, 3),
        ] {
            assert_eq!(u8::from(variant), raw);
            assert_eq!(QuickChargeVoltage::try_from(raw), Ok(variant));
        }
        assert!(QuickChargeVoltage::try_from(4).is_err());
    }

    #[test]
    fn test_qc2_voltage_ordering() {
        assert!(QuickChargeVoltage::V5 < QuickChargeVoltage::V9);
        assert!(QuickChargeVoltage::V12 < QuickChargeVoltage::V20);
        assert_eq!(QuickChargeVoltage::V20.millivolts(), 20_000);
    }

    #[test]
    fn test_charger_type_encoding_roundtrip() {
        for raw in 0u8..=10 {
            let variant = ChargerType::try_from(raw).unwrap();
            assert_eq!(u8::from(variant), raw);
        }
        assert!(ChargerType::try_from(11).is_err());
    }

    #[test]
    fn test_charger_current_limit_overrides() {
        let mut dev = DevModeData::default();
        assert_eq!(
            ChargerType::Dcp.default_current_limit_ua(&dev),
            DCP_CURRENT_LIMIT_UA
        );
        assert_eq!(ChargerType::DcpQc2.default_current_limit_ua(&dev), 0);

        dev.dcp_current_limit_ma = 1_800;
        dev.qc2_current_limit_ma = 1_200;
        assert_eq!(ChargerType::Dcp.default_current_limit_ua(&dev), 1_800_000);
        assert_eq!(
            ChargerType::DcpMaxim.default_current_limit_ua(&dev),
            1_800_000
        );
        assert_eq!(ChargerType::DcpQc2.default_current_limit_ua(&dev), 1_200_000);
        assert_eq!(ChargerType::None.default_current_limit_ua(&dev), 0);
        assert_eq!(
            ChargerType::Sdp.default_current_limit_ua(&dev),
            SDP_CURRENT_LIMIT_UA
        );
    }

    #[test]
    fn test_extcon_cable_names() {
        assert_eq!(ChargerType::None.extcon_cable_name(), "");
        assert_eq!(ChargerType::Sdp.extcon_cable_name(), "USB");
        assert_eq!(ChargerType::DcpQc2.extcon_cable_name(), "QC2");
        assert_eq!(
            ChargerType::Cdp.extcon_cable_name(),
            "Charge-downstream"
        );
    }
}
