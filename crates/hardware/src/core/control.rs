/// Active-high cluster control outputs. True means "hold the downstream
/// domain in reset / powered-down".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlOutputs {
    pub cluster_reset_asserted: bool,
    pub cluster_power_asserted: bool,
}

impl ControlOutputs {
    pub fn released(&self) -> bool {
        !self.cluster_reset_asserted && !self.cluster_power_asserted
    }
}

/// Physical pin image driven into the core instance. The vendor pins are
/// active-low, so the wrapper inverts the sequencer outputs here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClusterPins {
    pub si_cpc_reset_n: bool,
    pub si_cluster_pwr_on_n: bool,
}

impl From<ControlOutputs> for ClusterPins {
    fn from(outputs: ControlOutputs) -> Self {
        Self {
            si_cpc_reset_n: !outputs.cluster_reset_asserted,
            si_cluster_pwr_on_n: !outputs.cluster_power_asserted,
        }
    }
}
