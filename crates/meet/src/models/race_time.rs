use std::fmt;
use std::str::FromStr;

use crate::error::{MeetError, Result};

/// Reserved string a timekeeper enters for a swimmer who never started.
pub const ABSENT_SENTINEL: &str = "99:99:99";
/// Reserved string for a swimmer who did not finish or was disqualified.
pub const DID_NOT_FINISH_SENTINEL: &str = "88:88:88";

/// A race time in comparable form.
///
/// The derived ordering is the ranking order: every finished time sorts
/// before the two sentinels, `DidNotFinish` sorts before `Absent`, and an
/// entry that has not been timed yet sorts after everything.
///
/// ```
/// use meet::models::RaceTime;
///
/// let fast: RaceTime = "01:30:05".parse().unwrap();
/// let slow: RaceTime = "01:30:50".parse().unwrap();
/// assert!(fast < slow);
/// assert!(slow < RaceTime::Absent);
/// assert!(RaceTime::Absent < RaceTime::NotTimed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RaceTime {
    Finished { millis: u32 },
    DidNotFinish,
    Absent,
    NotTimed,
}

impl RaceTime {
    /// Parses `mm:ss:cc` (hundredths) or `mm:ss:mmm` (thousandths).
    ///
    /// An empty string, or the `"::"` the timing sheet submits for a cleared
    /// field, means the entry has not been timed.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() || text == "::" {
            return Ok(Self::NotTimed);
        }
        if text == ABSENT_SENTINEL {
            return Ok(Self::Absent);
        }
        if text == DID_NOT_FINISH_SENTINEL {
            return Ok(Self::DidNotFinish);
        }

        let invalid = || MeetError::InvalidTimeFormat(text.to_string());

        let mut parts = text.split(':');
        let (Some(minutes), Some(seconds), Some(fraction), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let minutes = parse_digits(minutes, 1..=3).ok_or_else(invalid)?;
        let seconds = parse_digits(seconds, 1..=2).ok_or_else(invalid)?;
        if seconds >= 60 {
            return Err(invalid());
        }
        let fraction_millis = match fraction.len() {
            2 => parse_digits(fraction, 2..=2).ok_or_else(invalid)? * 10,
            3 => parse_digits(fraction, 3..=3).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };

        Ok(Self::Finished {
            millis: (minutes * 60 + seconds) * 1000 + fraction_millis,
        })
    }

    /// Parses an optional stored time; `None` is an untimed entry.
    pub fn from_recorded(recorded: Option<&str>) -> Result<Self> {
        recorded.map_or(Ok(Self::NotTimed), Self::parse)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    /// True for the absent and did-not-finish sentinels.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Absent | Self::DidNotFinish)
    }

    pub fn is_timed(&self) -> bool {
        !matches!(self, Self::NotTimed)
    }

    /// The string to persist for this time, `None` when untimed.
    pub fn to_recorded(&self) -> Option<String> {
        self.is_timed().then(|| self.to_string())
    }
}

fn parse_digits(part: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for RaceTime {
    type Err = MeetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished { millis } => {
                let minutes = millis / 60_000;
                let seconds = (millis / 1000) % 60;
                let fraction = millis % 1000;
                if fraction % 10 == 0 {
                    write!(f, "{:02}:{:02}:{:02}", minutes, seconds, fraction / 10)
                } else {
                    write!(f, "{:02}:{:02}:{:03}", minutes, seconds, fraction)
                }
            }
            Self::DidNotFinish => f.write_str(DID_NOT_FINISH_SENTINEL),
            Self::Absent => f.write_str(ABSENT_SENTINEL),
            Self::NotTimed => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hundredths() {
        let time = RaceTime::parse("01:30:05").unwrap();
        assert_eq!(time, RaceTime::Finished { millis: 90_050 });
    }

    #[test]
    fn test_parse_thousandths() {
        let time = RaceTime::parse("00:29:505").unwrap();
        assert_eq!(time, RaceTime::Finished { millis: 29_505 });
        assert_eq!(time.to_string(), "00:29:505");
    }

    #[test]
    fn test_centiseconds_order_is_numeric() {
        let a = RaceTime::parse("01:30:50").unwrap();
        let b = RaceTime::parse("01:30:05").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_empty_and_cleared_are_not_timed() {
        assert_eq!(RaceTime::parse("").unwrap(), RaceTime::NotTimed);
        assert_eq!(RaceTime::parse("::").unwrap(), RaceTime::NotTimed);
        assert_eq!(RaceTime::from_recorded(None).unwrap(), RaceTime::NotTimed);
        assert_eq!(RaceTime::NotTimed.to_recorded(), None);
    }

    #[test]
    fn test_sentinels_sort_after_real_times_and_before_untimed() {
        let slowest = RaceTime::parse("59:59:99").unwrap();
        let dnf = RaceTime::parse(DID_NOT_FINISH_SENTINEL).unwrap();
        let absent = RaceTime::parse(ABSENT_SENTINEL).unwrap();

        assert_eq!(dnf, RaceTime::DidNotFinish);
        assert_eq!(absent, RaceTime::Absent);
        assert!(slowest < dnf);
        assert!(dnf < absent);
        assert!(absent < RaceTime::NotTimed);
        assert!(absent.is_sentinel() && !absent.is_finished());
    }

    #[test]
    fn test_format_pads_fields() {
        let time = RaceTime::Finished { millis: 65_070 };
        assert_eq!(time.to_string(), "01:05:07");
        assert_eq!(RaceTime::Absent.to_string(), "99:99:99");
    }

    #[test]
    fn test_rejects_malformed_strings() {
        for bad in ["1:2", "aa:bb:cc", "00:75:00", "00:30:5", "00:30:00:00", "-1:30:00", "00:30:5000"] {
            assert!(
                matches!(RaceTime::parse(bad), Err(MeetError::InvalidTimeFormat(_))),
                "{bad} should be rejected"
            );
        }
    }
}
