// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locale-invariant conversions from raw setting strings to Rust types.
//!
//! This module provides the [`SettingValue`] trait, which the accessor uses to turn the
//! raw text stored in a configuration source into a typed value. Implementations are
//! provided for the primitive types, a handful of std types, and (behind feature flags)
//! `uuid`, `chrono` and `humantime` types. Any other `FromStr` type, including enums
//! deriving `strum::EnumString`, can opt in through [`impl_setting_value_from_str!`].
//!
//! All conversions except `String` and `PathBuf` trim leading and trailing whitespace
//! before parsing.
//!
//! [`impl_setting_value_from_str!`]: crate::impl_setting_value_from_str

use crate::domain::errors::ConversionError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

/// A type that can be converted from a raw setting string.
///
/// `get_setting_as` additionally needs `T: Default` for its zero-value fallback. Types
/// without a `Default` impl (`IpAddr`, `Ipv4Addr`, `Ipv6Addr`, `SocketAddr`) can only be
/// read through `get_setting_or_default_as`, which takes the fallback from the caller.
///
/// # Examples
///
/// ```
/// use appsettings::domain::SettingValue;
///
/// assert_eq!(i32::parse_setting(" 42 ").unwrap(), 42);
/// assert_eq!(u8::parse_setting("0xFF").unwrap(), 255);
/// assert_eq!(bool::parse_setting("yes").unwrap(), true);
/// assert!(i32::parse_setting("abc").is_err());
/// ```
///
/// Implementing it for a custom type:
///
/// ```
/// use appsettings::domain::{ConversionError, SettingValue};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Percent(u8);
///
/// impl SettingValue for Percent {
///     fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
///         let digits = raw.trim().trim_end_matches('%');
///         match digits.parse::<u8>() {
///             Ok(n) if n <= 100 => Ok(Percent(n)),
///             _ => Err(ConversionError::new("Percent", "expected 0% to 100%")),
///         }
///     }
/// }
///
/// assert_eq!(Percent::parse_setting("75%").unwrap(), Percent(75));
/// ```
pub trait SettingValue: Sized {
    /// Converts the raw setting text into `Self`.
    ///
    /// Failures should name the target type in the returned [`ConversionError`], since
    /// the accessor reports it as the setting's target type.
    fn parse_setting(raw: &str) -> Result<Self, ConversionError>;
}

/// Implements [`SettingValue`] for types that implement `FromStr`.
///
/// The raw value is trimmed before being handed to `FromStr`. This is the intended way
/// to support enums by variant name.
///
/// # Examples
///
/// ```
/// use appsettings::domain::SettingValue;
/// use appsettings::impl_setting_value_from_str;
/// use std::str::FromStr;
///
/// #[derive(Debug, Default, PartialEq)]
/// enum Mode {
///     #[default]
///     Development,
///     Production,
/// }
///
/// impl FromStr for Mode {
///     type Err = String;
///
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         match s.to_ascii_lowercase().as_str() {
///             "development" => Ok(Mode::Development),
///             "production" => Ok(Mode::Production),
///             other => Err(format!("unknown mode '{}'", other)),
///         }
///     }
/// }
///
/// impl_setting_value_from_str!(Mode);
///
/// assert_eq!(Mode::parse_setting("Production").unwrap(), Mode::Production);
/// ```
#[macro_export]
macro_rules! impl_setting_value_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::domain::SettingValue for $ty {
                fn parse_setting(
                    raw: &str,
                ) -> ::std::result::Result<Self, $crate::domain::ConversionError> {
                    <$ty as ::std::str::FromStr>::from_str(raw.trim()).map_err(|e| {
                        $crate::domain::ConversionError::from_parse_error(stringify!($ty), e)
                    })
                }
            }
        )+
    };
}

/// Returns the hexadecimal digits if the text carries a `0x`, `0X` or `#` prefix.
fn hex_digits(text: &str) -> Option<&str> {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('#'))
}

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl SettingValue for $ty {
                fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
                    let text = raw.trim();
                    let parsed = match hex_digits(text) {
                        Some(digits) if digits.starts_with(|c: char| c == '+' || c == '-') => {
                            return Err(ConversionError::new(
                                stringify!($ty),
                                "sign not allowed in hexadecimal value",
                            ));
                        }
                        Some(digits) => <$ty>::from_str_radix(digits, 16),
                        None => text.parse::<$ty>(),
                    };
                    parsed.map_err(|e| ConversionError::from_parse_error(stringify!($ty), e))
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl SettingValue for $ty {
                fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
                    raw.trim()
                        .parse::<$ty>()
                        .map_err(|e| ConversionError::from_parse_error(stringify!($ty), e))
                }
            }
        )+
    };
}

impl_float!(f32, f64);

/// Recognizes the following values (case-insensitive):
/// - `true`: "true", "yes", "1", "on"
/// - `false`: "false", "no", "0", "off"
impl SettingValue for bool {
    fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
        match raw.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => Err(ConversionError::new(
                "bool",
                "expected one of true/false, yes/no, 1/0, on/off",
            )),
        }
    }
}

impl SettingValue for char {
    fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
        raw.trim()
            .parse::<char>()
            .map_err(|e| ConversionError::from_parse_error("char", e))
    }
}

impl SettingValue for String {
    fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_string())
    }
}

impl SettingValue for PathBuf {
    fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
        Ok(PathBuf::from(raw))
    }
}

crate::impl_setting_value_from_str!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

#[cfg(feature = "uuid")]
impl SettingValue for uuid::Uuid {
    fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
        uuid::Uuid::parse_str(raw.trim())
            .map_err(|e| ConversionError::from_parse_error("Uuid", e))
    }
}

#[cfg(feature = "humantime")]
impl SettingValue for std::time::Duration {
    fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
        humantime::parse_duration(raw.trim())
            .map_err(|e| ConversionError::from_parse_error("Duration", e))
    }
}

#[cfg(feature = "chrono")]
mod datetime {
    use super::SettingValue;
    use crate::domain::errors::ConversionError;
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

    const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    const NAIVE_TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

    fn parse_naive_datetime(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(text, NAIVE_DATETIME_FORMATS[0])
            .or_else(|_| NaiveDateTime::parse_from_str(text, NAIVE_DATETIME_FORMATS[1]))
    }

    /// `Display` form of `DateTime<FixedOffset>`, e.g. `2024-01-02 03:04:05 +02:00`.
    const FIXED_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %:z";

    fn parse_fixed(text: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(text)
            .or_else(|_| DateTime::parse_from_rfc2822(text))
            .or_else(|_| DateTime::parse_from_str(text, FIXED_DISPLAY_FORMAT))
    }

    impl SettingValue for DateTime<FixedOffset> {
        fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
            parse_fixed(raw.trim())
                .map_err(|e| ConversionError::from_parse_error("DateTime<FixedOffset>", e))
        }
    }

    /// Accepts RFC 3339, RFC 2822, and naive date-times (with an optional ` UTC`
    /// suffix) which are taken to be in UTC.
    impl SettingValue for DateTime<Utc> {
        fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
            let text = raw.trim();
            if let Ok(fixed) = parse_fixed(text) {
                return Ok(fixed.with_timezone(&Utc));
            }
            let naive_text = text.strip_suffix(" UTC").unwrap_or(text);
            parse_naive_datetime(naive_text)
                .map(|naive| naive.and_utc())
                .map_err(|e| ConversionError::from_parse_error("DateTime<Utc>", e))
        }
    }

    impl SettingValue for NaiveDateTime {
        fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
            parse_naive_datetime(raw.trim())
                .map_err(|e| ConversionError::from_parse_error("NaiveDateTime", e))
        }
    }

    impl SettingValue for NaiveDate {
        fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|e| ConversionError::from_parse_error("NaiveDate", e))
        }
    }

    impl SettingValue for NaiveTime {
        fn parse_setting(raw: &str) -> Result<Self, ConversionError> {
            let text = raw.trim();
            NaiveTime::parse_from_str(text, NAIVE_TIME_FORMATS[0])
                .or_else(|_| NaiveTime::parse_from_str(text, NAIVE_TIME_FORMATS[1]))
                .map_err(|e| ConversionError::from_parse_error("NaiveTime", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_unchanged() {
        assert_eq!(String::parse_setting("  spaces  ").unwrap(), "  spaces  ");
        assert_eq!(String::parse_setting("").unwrap(), "");
    }

    #[test]
    fn test_path_is_unchanged() {
        assert_eq!(
            PathBuf::parse_setting("/var/log/app").unwrap(),
            PathBuf::from("/var/log/app")
        );
    }

    #[test]
    fn test_bool_true_variants() {
        let true_values = vec![
            "true", "True", "TRUE", "yes", "Yes", "YES", "1", "on", "On", "ON", " true ",
        ];
        for val in true_values {
            assert!(bool::parse_setting(val).unwrap(), "Failed for value: {}", val);
        }
    }

    #[test]
    fn test_bool_false_variants() {
        let false_values = vec![
            "false", "False", "FALSE", "no", "No", "NO", "0", "off", "Off", "OFF",
        ];
        for val in false_values {
            assert!(!bool::parse_setting(val).unwrap(), "Failed for value: {}", val);
        }
    }

    #[test]
    fn test_bool_invalid() {
        let err = bool::parse_setting("maybe").unwrap_err();
        assert_eq!(err.target_type(), "bool");
    }

    #[test]
    fn test_integers_decimal() {
        assert_eq!(i32::parse_setting("42").unwrap(), 42);
        assert_eq!(i32::parse_setting("-42").unwrap(), -42);
        assert_eq!(i32::parse_setting("+7").unwrap(), 7);
        assert_eq!(i64::parse_setting("9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(u64::parse_setting("18446744073709551615").unwrap(), u64::MAX);
        assert_eq!(usize::parse_setting("\t12\n").unwrap(), 12);
    }

    #[test]
    fn test_integers_hex() {
        assert_eq!(u8::parse_setting("0xFF").unwrap(), 255);
        assert_eq!(u16::parse_setting("0X1f").unwrap(), 31);
        assert_eq!(i32::parse_setting("#10").unwrap(), 16);
    }

    #[test]
    fn test_integers_invalid() {
        assert!(i32::parse_setting("abc").is_err());
        assert!(i32::parse_setting("3.14").is_err());
        assert!(u32::parse_setting("-1").is_err());
        assert!(u8::parse_setting("256").is_err());
        assert!(u8::parse_setting("0x").is_err());
        assert!(u8::parse_setting("0xZZ").is_err());
        assert!(i32::parse_setting("0x-10").is_err());
        assert!(u8::parse_setting("#+F").is_err());
        assert!(i64::parse_setting("0X+1").is_err());
    }

    #[test]
    fn test_integer_error_names_type() {
        let err = u16::parse_setting("abc").unwrap_err();
        assert_eq!(err.target_type(), "u16");
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::parse_setting("3.14").unwrap(), 3.14);
        assert_eq!(f64::parse_setting(" -2.5e3 ").unwrap(), -2500.0);
        assert_eq!(f32::parse_setting("1").unwrap(), 1.0);
        assert!(f64::parse_setting("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_floats_are_locale_invariant() {
        assert!(f64::parse_setting("3,14").is_err());
        assert!(f64::parse_setting("1,000.5").is_err());
    }

    #[test]
    fn test_char() {
        assert_eq!(char::parse_setting(" x ").unwrap(), 'x');
        assert!(char::parse_setting("xy").is_err());
    }

    #[test]
    fn test_network_types() {
        let ip = IpAddr::parse_setting("127.0.0.1").unwrap();
        assert_eq!(ip.to_string(), "127.0.0.1");

        let addr = SocketAddr::parse_setting(" [::1]:8080 ").unwrap();
        assert_eq!(addr.port(), 8080);

        assert!(Ipv4Addr::parse_setting("not_an_ip").is_err());
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_uuid_formats() {
        let expected = uuid::Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let inputs = [
            "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "67e5504410b1426f9247bb680e5fe0c8",
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}",
            "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8",
            "  67E55044-10B1-426F-9247-BB680E5FE0C8  ",
        ];
        for input in inputs {
            assert_eq!(
                uuid::Uuid::parse_setting(input).unwrap(),
                expected,
                "Failed for value: {}",
                input
            );
        }
        assert!(uuid::Uuid::parse_setting("not-a-uuid").is_err());
    }

    #[cfg(feature = "humantime")]
    #[test]
    fn test_duration() {
        use std::time::Duration;

        assert_eq!(
            Duration::parse_setting("30s").unwrap(),
            Duration::from_secs(30)
        );
        assert_eq!(
            Duration::parse_setting("1h 15m").unwrap(),
            Duration::from_secs(4500)
        );
        assert_eq!(
            Duration::parse_setting("250ms").unwrap(),
            Duration::from_millis(250)
        );
        assert!(Duration::parse_setting("soon").is_err());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_dates() {
        use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

        let date = NaiveDate::parse_setting("2024-02-29").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
        assert!(NaiveDate::parse_setting("2023-02-29").is_err());

        let time = NaiveTime::parse_setting("13:45").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (13, 45, 0));

        let with_t = NaiveDateTime::parse_setting("2024-01-02T03:04:05").unwrap();
        let with_space = NaiveDateTime::parse_setting("2024-01-02 03:04:05").unwrap();
        assert_eq!(with_t, with_space);

        let utc = DateTime::<Utc>::parse_setting("2024-01-02T05:04:05+02:00").unwrap();
        assert_eq!(utc.hour(), 3);

        let naive_utc = DateTime::<Utc>::parse_setting("2024-01-02 03:04:05").unwrap();
        assert_eq!(naive_utc, utc);

        assert!(DateTime::<Utc>::parse_setting("yesterday").is_err());
    }

    #[test]
    fn test_from_str_types_report_short_names() {
        let err = IpAddr::parse_setting("not_an_ip").unwrap_err();
        assert_eq!(err.target_type(), "IpAddr");

        let err = SocketAddr::parse_setting("localhost").unwrap_err();
        assert_eq!(err.target_type(), "SocketAddr");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_fixed_display_roundtrip() {
        use chrono::{DateTime, FixedOffset};

        let original = DateTime::<FixedOffset>::parse_setting("2024-01-02T03:04:05+02:00").unwrap();
        let text = original.to_string();
        assert_eq!(text, "2024-01-02 03:04:05 +02:00");
        assert_eq!(DateTime::<FixedOffset>::parse_setting(&text).unwrap(), original);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_utc_display_roundtrip() {
        use chrono::{DateTime, TimeZone, Utc};

        let original = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let parsed = DateTime::<Utc>::parse_setting(&original.to_string()).unwrap();
        assert_eq!(parsed, original);
    }
}
