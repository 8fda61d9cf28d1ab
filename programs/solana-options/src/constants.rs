pub const COVERED_CALL_SEED: &str = "covered-call";

pub const LOG_PREFIX: &str = "[covered-call]";
