use serde::{Deserialize, Serialize};

/// Oldest version tag that is still launched, at the lowest priority.
pub const LEGACY_FLOOR: &str = "2.6";
pub const MODERN_FLOOR: &str = "2.7";
pub const PYTHON3_FLOOR: &str = "3.0";

/// Launch priority bucket for a configuration-store version tag.
///
/// Tags are compared as plain strings, so `"2.10"` sorts below `"2.6"` and
/// is dropped. Priority is `Modern2`, then `Python3`, then `Legacy2`; this is
/// not numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionBand {
    Modern2,
    Python3,
    Legacy2,
}

impl VersionBand {
    pub const PRIORITY: [VersionBand; 3] =
        [VersionBand::Modern2, VersionBand::Python3, VersionBand::Legacy2];

    /// Returns `None` for tags below the legacy floor.
    pub fn classify(version: &str) -> Option<Self> {
        if version >= PYTHON3_FLOOR {
            Some(Self::Python3)
        } else if version >= MODERN_FLOOR {
            Some(Self::Modern2)
        } else if version >= LEGACY_FLOOR {
            Some(Self::Legacy2)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_lands_in_exactly_one_band() {
        let cases = [
            ("2.6", Some(VersionBand::Legacy2)),
            ("2.6.9", Some(VersionBand::Legacy2)),
            ("2.7", Some(VersionBand::Modern2)),
            ("2.7.18", Some(VersionBand::Modern2)),
            ("2.9", Some(VersionBand::Modern2)),
            ("3.0", Some(VersionBand::Python3)),
            ("3.12", Some(VersionBand::Python3)),
            ("3.4-32", Some(VersionBand::Python3)),
            ("2.5", None),
            ("1.5.2", None),
            ("", None),
        ];
        for (tag, expected) in cases {
            assert_eq!(VersionBand::classify(tag), expected, "tag {tag:?}");
        }
    }

    #[test]
    fn two_digit_minor_versions_compare_as_strings() {
        assert_eq!(VersionBand::classify("2.10"), None);
        assert_eq!(VersionBand::classify("3.10"), Some(VersionBand::Python3));
    }

    #[test]
    fn priority_order_is_not_numeric() {
        assert_eq!(
            VersionBand::PRIORITY,
            [VersionBand::Modern2, VersionBand::Python3, VersionBand::Legacy2]
        );
    }
}
