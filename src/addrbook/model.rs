use crate::error::{AddrBookError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";
pub const NOT_INDICATED: &str = "not indicated";

/// Shortest accepted phone, leading `+` included.
const MIN_PHONE_LEN: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AddrBookError::MissingArguments("a name"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number in international form: `+` followed by digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let well_formed = value.len() >= MIN_PHONE_LEN
            && value
                .strip_prefix('+')
                .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_digit()));
        if !well_formed {
            return Err(AddrBookError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`. A 29 February birthday is
    /// celebrated on 28 February outside leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl FromStr for Birthday {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| AddrBookError::InvalidBirthday(s.to_string()))
    }
}

impl FromStr for Name {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self> {
        Name::new(s)
    }
}

impl FromStr for Phone {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self> {
        Phone::new(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

// Serde goes through these so that loading a file re-validates every value.

impl TryFrom<String> for Name {
    type Error = AddrBookError;

    fn try_from(value: String) -> Result<Self> {
        Name::new(value)
    }
}

impl TryFrom<String> for Phone {
    type Error = AddrBookError;

    fn try_from(value: String) -> Result<Self> {
        Phone::new(value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = AddrBookError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Name> for String {
    fn from(value: Name) -> String {
        value.0
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> String {
        value.0
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> String {
        value.to_string()
    }
}

/// One contact: a name, any number of phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name, phone: Option<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday,
        }
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    pub fn change_phone(&mut self, index: usize, phone: Phone) -> Result<()> {
        match self.phones.get_mut(index) {
            Some(slot) => {
                *slot = phone;
                Ok(())
            }
            None => Err(AddrBookError::PhoneIndexOutOfRange {
                name: self.name.to_string(),
                index,
            }),
        }
    }

    pub fn delete_phone(&mut self, phone: &Phone) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| AddrBookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: phone.to_string(),
            })?;
        self.phones.remove(pos);
        Ok(())
    }

    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days from `today` until the next birthday, 0 when it is today.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?;
        let mut next = birthday.in_year(today.year())?;
        if next < today {
            next = birthday.in_year(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }

    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn birthday_or_not_indicated(&self) -> String {
        self.birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| NOT_INDICATED.to_string())
    }

    /// `name : phone, phone : birthday`
    pub fn summary(&self) -> String {
        format!(
            "{} : {} : {}",
            self.name,
            self.phones_joined(),
            self.birthday_or_not_indicated()
        )
    }
}
