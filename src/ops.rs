//! Board-specific lifecycle hooks invoked around PHY operations.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Lifecycle points at which the PHY sequencing code calls into the
/// board's [`PhyOps`], in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum LifecyclePoint {
    Open = 0,
    Init = 1,
    PreSuspend = 2,
    PostSuspend = 3,
    PreResume = 4,
    PostResume = 5,
    PostRemoteWakeup = 6,
    PrePhyOff = 7,
    PostPhyOff = 8,
    PrePhyOn = 9,
    PostPhyOn = 10,
    PortPower = 11,
    Close = 12,
}

impl LifecyclePoint {
    /// All points in call order.
    pub const ALL: [LifecyclePoint; 13] = [
        LifecyclePoint::Open,
        LifecyclePoint::Init,
        LifecyclePoint::PreSuspend,
        LifecyclePoint::PostSuspend,
        LifecyclePoint::PreResume,
        LifecyclePoint::PostResume,
        LifecyclePoint::PostRemoteWakeup,
        LifecyclePoint::PrePhyOff,
        LifecyclePoint::PostPhyOff,
        LifecyclePoint::PrePhyOn,
        LifecyclePoint::PostPhyOn,
        LifecyclePoint::PortPower,
        LifecyclePoint::Close,
    ];
}

/// Board hooks run around the PHY state transitions.
///
/// Every method defaults to doing nothing, so a board overrides only the
/// points where it has work, typically toggling an external mux or
/// regulator. The sequencing code that decides *when* each point fires
/// lives with the PHY driver, not here.
pub trait PhyOps {
    fn open(&self) {}
    fn init(&self) {}
    fn pre_suspend(&self) {}
    fn post_suspend(&self) {}
    fn pre_resume(&self) {}
    fn post_resume(&self) {}
    fn post_remote_wakeup(&self) {}
    fn pre_phy_off(&self) {}
    fn post_phy_off(&self) {}
    fn pre_phy_on(&self) {}
    fn post_phy_on(&self) {}
    fn port_power(&self) {}
    fn close(&self) {}

    /// Drive a hook from its [`LifecyclePoint`] identifier.
    fn dispatch(&self, point: LifecyclePoint) {
        match point {
            LifecyclePoint::Open => self.open(),
            LifecyclePoint::Init => self.init(),
            LifecyclePoint::PreSuspend => self.pre_suspend(),
            LifecyclePoint::PostSuspend => self.post_suspend(),
            LifecyclePoint::PreResume => self.pre_resume(),
            LifecyclePoint::PostResume => self.post_resume(),
            LifecyclePoint::PostRemoteWakeup => self.post_remote_wakeup(),
            LifecyclePoint::PrePhyOff => self.pre_phy_off(),
            LifecyclePoint::PostPhyOff => self.post_phy_off(),
            LifecyclePoint::PrePhyOn => self.pre_phy_on(),
            LifecyclePoint::PostPhyOn => self.post_phy_on(),
            LifecyclePoint::PortPower => self.port_power(),
            LifecyclePoint::Close => self.close(),
        }
    }
}

/// Hook set with no overrides; stands in when a board attaches none.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOps;

impl PhyOps for NoopOps {}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    use alloc::vec::Vec;

    struct RecordingOps {
        calls: RefCell<Vec<LifecyclePoint>>,
    }

    impl PhyOps for RecordingOps {
        fn init(&self) {
            self.calls.borrow_mut().push(LifecyclePoint::Init);
        }

        fn port_power(&self) {
            self.calls.borrow_mut().push(LifecyclePoint::PortPower);
        }
    }

    #[test]
    fn test_all_points_in_call_order() {
        for (i, point) in LifecyclePoint::ALL.iter().enumerate() {
            assert_eq!(u8::from(*point), i as u8);
            assert_eq!(LifecyclePoint::try_from(i as u8), Ok(*point));
        }
        assert!(LifecyclePoint::try_from(13).is_err());
    }

    #[test]
    fn test_noop_ops_survive_full_sequence() {
        let ops = NoopOps;
        for point in LifecyclePoint::ALL {
            ops.dispatch(point);
        }
    }

    #[test]
    fn test_dispatch_reaches_overridden_hooks_only() {
        let ops = RecordingOps {
            calls: RefCell::new(Vec::new()),
        };
        for point in LifecyclePoint::ALL {
            ops.dispatch(point);
        }
        assert_eq!(
            *ops.calls.borrow(),
            [LifecyclePoint::Init, LifecyclePoint::PortPower]
        );
    }
}
