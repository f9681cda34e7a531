use chrono::{SubsecRound, Utc};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<Utc>;

/// Current time truncated to milliseconds.
///
/// The document store keeps millisecond precision, so values handed back
/// from an insert compare equal to the same values read back later.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn now_has_millisecond_precision() {
        let ts = now();
        assert_eq!(ts.nanosecond() % 1_000_000, 0);
    }
}
