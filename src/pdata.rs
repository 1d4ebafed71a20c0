//! Per-port platform data aggregates.

use alloc::{boxed::Box, string::String};

use crate::{
    OperationMode,
    charging::QuickChargeVoltage,
    detect::IdDetection,
    err::{ConfigError, Result},
    ops::{NoopOps, PhyOps},
    phy::{PhyConfig, PhyInterface},
};

/// Board parameters for a device-mode port.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevModeData {
    /// PMU interrupt signalling VBUS changes, when the PMU senses VBUS.
    pub vbus_pmu_irq: Option<u32>,
    /// GPIO sensing VBUS, when a pin does.
    pub vbus_gpio: Option<u32>,
    /// DCP charger draw limit in mA, 0 for the stack default.
    pub dcp_current_limit_ma: u32,
    /// Quick Charge 2 draw limit in mA.
    pub qc2_current_limit_ma: u32,
    pub charging_supported: bool,
    pub remote_wakeup_supported: bool,
    /// Port belongs to the XHCI controller rather than the legacy one.
    pub is_xhci: bool,
}

/// Board parameters for a host-mode port.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostModeData {
    /// GPIO driving VBUS to the connector.
    pub vbus_gpio: Option<u32>,
    pub hot_plug: bool,
    pub remote_wakeup_supported: bool,
    /// Cut controller power across suspend.
    pub power_off_on_suspend: bool,
    /// Drop VBUS when entering deep sleep.
    pub turn_off_vbus_on_lp0: bool,
    /// Port is wired for Y-cable (host + charging) operation.
    pub support_y_cable: bool,
}

/// Mode-specific parameters, one arm per [`OperationMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeData {
    Device(DevModeData),
    Host(HostModeData),
}

impl ModeData {
    /// Operation mode of the active arm.
    pub fn op_mode(&self) -> OperationMode {
        match self {
            ModeData::Device(_) => OperationMode::Device,
            ModeData::Host(_) => OperationMode::Host,
        }
    }

    pub fn dev(&self) -> Option<&DevModeData> {
        match self {
            ModeData::Device(data) => Some(data),
            ModeData::Host(_) => None,
        }
    }

    pub fn host(&self) -> Option<&HostModeData> {
        match self {
            ModeData::Host(data) => Some(data),
            ModeData::Device(_) => None,
        }
    }
}

/// Platform data for one physical USB port.
///
/// Built once by the board description at bring-up and treated as
/// read-only by the controller and PHY drivers afterwards.
pub struct PlatformData {
    /// Port participates in OTG role switching.
    pub port_otg: bool,
    /// Controller has the HOSTPC register extension.
    pub has_hostpc: bool,
    /// DMA engine copes with unaligned buffers.
    pub unaligned_dma_buf_supported: bool,
    /// VBUS is sensed through the PMU instead of a controller pin.
    pub support_pmu_vbus: bool,
    /// Extcon device publishing VBUS cable state, when one exists.
    pub vbus_extcon_dev_name: Option<String>,
    /// Extcon device publishing ID cable state, when one exists.
    pub id_extcon_dev_name: Option<String>,
    pub id_det_type: IdDetection,
    pub phy_intf: PhyInterface,
    pub op_mode: OperationMode,
    pub qc2_voltage: QuickChargeVoltage,
    /// Mode-specific parameters; the arm must agree with `op_mode`.
    pub mode: ModeData,
    /// PHY tuning bundle; `None` for HSIC and ICUSB links, which carry no
    /// tuning parameters.
    pub phy: Option<PhyConfig>,
    /// Board lifecycle hooks; `None` means every point is a no-op.
    pub ops: Option<Box<dyn PhyOps>>,
}

impl PlatformData {
    /// Platform data for a device-mode port, remaining fields at their
    /// defaults.
    pub fn new_device(dev: DevModeData) -> Self {
        Self::new(OperationMode::Device, ModeData::Device(dev))
    }

    /// Platform data for a host-mode port, remaining fields at their
    /// defaults.
    pub fn new_host(host: HostModeData) -> Self {
        Self::new(OperationMode::Host, ModeData::Host(host))
    }

    fn new(op_mode: OperationMode, mode: ModeData) -> Self {
        Self {
            port_otg: false,
            has_hostpc: false,
            unaligned_dma_buf_supported: false,
            support_pmu_vbus: false,
            vbus_extcon_dev_name: None,
            id_extcon_dev_name: None,
            id_det_type: IdDetection::default(),
            phy_intf: PhyInterface::default(),
            op_mode,
            qc2_voltage: QuickChargeVoltage::default(),
            mode,
            phy: None,
            ops: None,
        }
    }

    /// Hook set to drive at lifecycle points; falls back to a no-op set
    /// when the board attached none.
    pub fn ops(&self) -> &dyn PhyOps {
        match &self.ops {
            Some(ops) => ops.as_ref(),
            None => &NoopOps,
        }
    }

    /// Check this instance against the board's rated charger input and
    /// for agreement between the selector enums and the attached arms.
    ///
    /// The original board files trusted these silently; calling this is
    /// optional and nothing else in the crate depends on it.
    pub fn validate(&self, board_limit: QuickChargeVoltage) -> Result {
        if self.qc2_voltage > board_limit {
            log::warn!(
                "qc2 voltage {:?} above board rating {:?}",
                self.qc2_voltage,
                board_limit
            );
            return Err(ConfigError::QuickChargeOverBoardLimit {
                requested: self.qc2_voltage,
                board_limit,
            });
        }

        let phy_ok = match &self.phy {
            Some(cfg) => cfg.matches(self.phy_intf),
            // HSIC and ICUSB links are the only ones without a bundle.
            None => matches!(self.phy_intf, PhyInterface::Hsic | PhyInterface::Icusb),
        };
        if !phy_ok {
            return Err(ConfigError::PhyConfigMismatch {
                intf: self.phy_intf,
            });
        }

        if self.mode.op_mode() != self.op_mode {
            return Err(ConfigError::ModeDataMismatch {
                op_mode: self.op_mode,
            });
        }

        log::debug!(
            "platform data validated: {:?} {:?} over {:?}",
            self.op_mode,
            self.id_det_type,
            self.phy_intf
        );
        Ok(())
    }
}

/// Opaque identifier for the externally-owned controller device this
/// platform data is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerHandle(pub usize);

/// OTG port parameters linking a controller device to its platform data.
pub struct OtgData {
    /// The host controller serving this OTG port.
    pub controller: ControllerHandle,
    pub pdata: PlatformData,
    /// GPIO sensing OTG cable identity, for [`IdDetection::GpioId`].
    pub id_det_gpio: Option<u32>,
    pub is_xhci: bool,
}
