mod share_tooltip;

pub use share_tooltip::{ShareTooltip, SignalTooltip, activate};
