#![no_std]

//! Platform data definitions for an EHCI-era OTG USB controller.
//!
//! Board-description code builds one [`PlatformData`] per physical USB port
//! at platform bring-up and hands it to the controller and PHY drivers,
//! which treat it as read-only from then on. This crate only defines the
//! schema; PHY sequencing, suspend/resume orchestration and charger
//! negotiation live in the drivers that consume it.

extern crate alloc;

pub mod charging;
pub mod detect;
pub mod err;
pub mod ops;
pub mod pdata;
pub mod phy;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Selects whether the controller acts as a USB device or a USB host for
/// this port.
///
/// The integer encoding is part of the board-description contract.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OperationMode {
    #[default]
    Device = 0,
    Host = 1,
}

pub use charging::{ChargerType, QuickChargeVoltage};
pub use detect::IdDetection;
pub use err::{ConfigError, Result};
pub use ops::{LifecyclePoint, NoopOps, PhyOps};
pub use pdata::{ControllerHandle, DevModeData, HostModeData, ModeData, OtgData, PlatformData};
pub use phy::{PhyConfig, PhyInterface, UlpiConfig, UtmiConfig, XcvrHsSlew};
