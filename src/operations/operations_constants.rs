/// Operation kinds
///
/// Each constant represents one of the supported investment ledger entries.
/// Purchase of an asset. Increases quantity and invested capital.
pub const OPERATION_KIND_BUY: &str = "BUY";

/// Disposal of an asset. Decreases quantity and invested capital at average cost.
pub const OPERATION_KIND_SELL: &str = "SELL";

/// Cash dividend received for a held asset. Does not change the position.
pub const OPERATION_KIND_DIVIDEND: &str = "DIVIDEND";

/// Interest earned on a fixed-income asset. Does not change the position.
pub const OPERATION_KIND_INTEREST: &str = "INTEREST";

/// Stock split or bonus share event. Does not change invested capital.
pub const OPERATION_KIND_SPLIT: &str = "SPLIT";

/// All supported operation kinds
pub const OPERATION_KINDS: [&str; 5] = [
    OPERATION_KIND_BUY,
    OPERATION_KIND_SELL,
    OPERATION_KIND_DIVIDEND,
    OPERATION_KIND_INTEREST,
    OPERATION_KIND_SPLIT,
];

/// Kinds that feed the earnings line of the investment evolution
pub const EARNING_OPERATION_KINDS: [&str; 3] = [
    OPERATION_KIND_DIVIDEND,
    OPERATION_KIND_INTEREST,
    OPERATION_KIND_SPLIT,
];
