use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToDashSeparators;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum PageDirection {
    #[strum(serialize = "prev", serialize = "back", to_string = "prev")]
    Prev,
    #[strum(serialize = "next", serialize = "fwd", to_string = "next")]
    Next,
}

impl PageDirection {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported paging direction: '{}'. Valid directions: {}",
                s.trim(),
                valid_csv::<PageDirection>()
            ))
        })
    }
}

/// Calendar date identifying one column of the window and one availability
/// entry. Canonical key form is ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum DateKeyFormat {
    #[strum(serialize = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%m-%d-%Y")]
    MdYDash,
}

impl DateKey {
    pub fn usage() -> String {
        let sample = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let formats = DateKeyFormat::iter()
            .map(|df| sample.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {}", formats)
    }

    fn error_message(input: &str) -> String {
        format!("Invalid date key: '{}'. {}", input, Self::usage())
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.to_dash_separators();
        for f in DateKeyFormat::iter() {
            if let Ok(date) = NaiveDate::parse_from_str(&input, f.as_ref()) {
                return Ok(DateKey(date));
            }
        }
        Err(Error::Parse(Self::error_message(&input)))
    }

    /// Canonical ISO key form, identical to the `Display` rendering.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DateKeyFormat::YmdDash.as_ref()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateKey, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        DateKey::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One bookable time-of-day label. Identity is the parsed clock time, so
/// `"9:30 AM"` and `"09:30 am"` name the same slot; the canonical rendering
/// is `9:30 AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotLabel(pub NaiveTime);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum SlotTimeFormat {
    #[strum(serialize = "%-I:%M %p")]
    HmMeridianSpace,
    #[strum(serialize = "%-I:%M%p")]
    HmMeridian,
    #[strum(serialize = "%-I %p")]
    HMeridianSpace,
    #[strum(serialize = "%H:%M")]
    Hm24,
}

impl SlotLabel {
    pub fn usage() -> String {
        let sample = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let formats = SlotTimeFormat::iter()
            .map(|fmt| sample.format(fmt.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {}", formats)
    }

    fn error_message(input: &str) -> String {
        format!("Invalid slot label: '{}'. {}", input, Self::usage())
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let mut token = input.trim().to_ascii_uppercase();
        // chrono cannot resolve a time without a minutes field, so hour-only
        // spellings like "9 AM" get an explicit ":00" before parsing.
        if let Some((hour, meridiem)) = token.split_once(' ') {
            if !hour.is_empty() && hour.chars().all(|c| c.is_ascii_digit()) {
                token = format!("{hour}:00 {meridiem}");
            }
        }
        for f in SlotTimeFormat::iter() {
            if let Ok(t) = NaiveTime::parse_from_str(&token, f.as_ref()) {
                return Ok(SlotLabel(t));
            }
        }
        Err(Error::Parse(Self::error_message(input.trim())))
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.format(SlotTimeFormat::HmMeridianSpace.as_ref())
        )
    }
}

impl Serialize for SlotLabel {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SlotLabel {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<SlotLabel, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        SlotLabel::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// String-backed boolean used by config items ("True"/"False" in JSON).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Bool(true)),
            "false" | "no" | "0" => Ok(Bool(false)),
            other => Err(Error::Parse(format!(
                "Invalid boolean: '{}'. Expected one of: true, false, yes, no, 1, 0.",
                other
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        Bool::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}
