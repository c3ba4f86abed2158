/// Message severity, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Value = 1,
    Info = 2,
    Success = 3,
    Warning = 4,
    Error = 5,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Value,
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    pub const MIN_RAW: i32 = 0;
    pub const MAX_RAW: i32 = 5;

    /// Map a raw level to its severity, or `None` outside 0..=5
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Value),
            2 => Some(Severity::Info),
            3 => Some(Severity::Success),
            4 => Some(Severity::Warning),
            5 => Some(Severity::Error),
            _ => None,
        }
    }

    /// Map a raw level to the nearest valid severity
    pub fn clamped(raw: i32) -> Self {
        Self::from_raw(raw.clamp(Self::MIN_RAW, Self::MAX_RAW)).unwrap_or(Severity::Error)
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Fixed 7-character label, centered, as it appears inside the level segment
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => " DEBUG ",
            Severity::Value => " VALUE ",
            Severity::Info => "  INFO ",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => " ERROR ",
        }
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.as_raw()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label().trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_seven_chars() {
        for severity in Severity::ALL {
            assert_eq!(severity.label().len(), 7, "label for {:?}", severity);
        }
        assert_eq!(Severity::Info.label(), "  INFO ");
        assert_eq!(Severity::Success.label(), "SUCCESS");
    }

    #[test]
    fn test_raw_roundtrip_and_order() {
        for (raw, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(Severity::from_raw(raw as i32), Some(*severity));
            assert_eq!(i32::from(*severity), raw as i32);
        }
        assert!(Severity::Debug < Severity::Error);
        assert_eq!(Severity::from_raw(6), None);
        assert_eq!(Severity::from_raw(-1), None);
    }

    #[test]
    fn test_clamped_uses_nearest_bound() {
        assert_eq!(Severity::clamped(42), Severity::Error);
        assert_eq!(Severity::clamped(-3), Severity::Debug);
        assert_eq!(Severity::clamped(3), Severity::Success);
    }

    #[test]
    fn test_display_trims_padding() {
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }
}
