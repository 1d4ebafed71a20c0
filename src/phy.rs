//! PHY link selection and per-link tuning bundles.

use alloc::string::String;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Physical-layer transceiver protocol wired to the controller.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PhyInterface {
    #[default]
    Utmi = 0,
    UlpiLink = 1,
    UlpiNull = 2,
    Hsic = 3,
    Icusb = 4,
}

impl PhyInterface {
    /// Whether the link uses a ULPI transceiver (with or without an
    /// external link chip).
    pub fn is_ulpi(self) -> bool {
        matches!(self, PhyInterface::UlpiLink | PhyInterface::UlpiNull)
    }
}

/// Packed HS transceiver slew register value.
///
/// The hardware register splits the slew code into a 2-bit LSB part and a
/// 7-bit MSB part. Both parts live in one 9-bit value so the in-register
/// layout survives serialization; setters mask their argument to the
/// sub-field width.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XcvrHsSlew(u16);

impl XcvrHsSlew {
    const LSB_MASK: u16 = 0x0003;
    const MSB_MASK: u16 = 0x007f;
    const MSB_SHIFT: u32 = 2;
    const BITS_MASK: u16 = 0x01ff;

    pub const fn new(msb: u8, lsb: u8) -> Self {
        Self(
            ((msb as u16) & Self::MSB_MASK) << Self::MSB_SHIFT
                | ((lsb as u16) & Self::LSB_MASK),
        )
    }

    /// 2-bit LSB part.
    pub const fn lsb(self) -> u8 {
        (self.0 & Self::LSB_MASK) as u8
    }

    /// 7-bit MSB part.
    pub const fn msb(self) -> u8 {
        ((self.0 >> Self::MSB_SHIFT) & Self::MSB_MASK) as u8
    }

    pub fn set_lsb(&mut self, lsb: u8) {
        self.0 = (self.0 & !Self::LSB_MASK) | ((lsb as u16) & Self::LSB_MASK);
    }

    pub fn set_msb(&mut self, msb: u8) {
        self.0 = (self.0 & !(Self::MSB_MASK << Self::MSB_SHIFT))
            | (((msb as u16) & Self::MSB_MASK) << Self::MSB_SHIFT);
    }

    /// Raw 9-bit register value, MSB part in bits 8..2, LSB part in
    /// bits 1..0.
    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::BITS_MASK)
    }
}

/// UTMI PHY tuning parameters.
///
/// Raw calibration constants copied into the PHY control registers at
/// power-on. Values come from the board characterization tables; there is
/// no cross-field invariant beyond the numeric ranges.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtmiConfig {
    /// HS sync start delay.
    pub hssync_start_delay: u8,
    /// Elasticity buffer limit.
    pub elastic_limit: u8,
    /// Idle wait delay before entering suspend.
    pub idle_wait_delay: u8,
    /// Termination range adjustment.
    pub term_range_adj: u8,
    /// Transceiver setup value.
    pub xcvr_setup: u8,
    /// LS falling-edge slew.
    pub xcvr_lsfslew: u8,
    /// LS rising-edge slew.
    pub xcvr_lsrslew: u8,
    /// Signed offset applied on top of the fused setup value.
    pub xcvr_setup_offset: i8,
    pub xcvr_use_lsb: bool,
    /// Take the setup value from the fuses instead of `xcvr_setup`.
    pub xcvr_use_fuses: bool,
    /// VBUS overcurrent pin map byte.
    pub vbus_oc_map: u8,
    /// Packed HS slew sub-fields.
    pub hsslew: XcvrHsSlew,
}

/// ULPI PHY tuning parameters.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct UlpiConfig {
    pub shadow_clk_delay: u8,
    pub clock_out_delay: u8,
    pub data_trimmer: u8,
    pub stpdirnxt_trimmer: u8,
    pub dir_trimmer: u8,
    /// Name of the external clock source feeding the PHY.
    pub clk: Option<String>,
    /// GPIO used to restore the PHY after a power cycle.
    pub phy_restore_gpio: Option<u32>,
}

/// PHY-specific tuning bundle, one arm per transceiver family.
///
/// The active arm is statically known; a consumer cannot read UTMI fields
/// out of a ULPI bundle. HSIC and ICUSB links carry no bundle at all, so
/// [`PlatformData`](crate::PlatformData) holds an `Option<PhyConfig>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhyConfig {
    Utmi(UtmiConfig),
    Ulpi(UlpiConfig),
}

impl PhyConfig {
    pub fn utmi(&self) -> Option<&UtmiConfig> {
        match self {
            PhyConfig::Utmi(cfg) => Some(cfg),
            PhyConfig::Ulpi(_) => None,
        }
    }

    pub fn ulpi(&self) -> Option<&UlpiConfig> {
        match self {
            PhyConfig::Ulpi(cfg) => Some(cfg),
            PhyConfig::Utmi(_) => None,
        }
    }

    /// Whether this bundle belongs to the given link type.
    pub fn matches(&self, intf: PhyInterface) -> bool {
        match self {
            PhyConfig::Utmi(_) => intf == PhyInterface::Utmi,
            PhyConfig::Ulpi(_) => intf.is_ulpi(),
        }
    }
}
