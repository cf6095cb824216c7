//! Save-slot profile record.
//!
//! Profiles pair a display name with a save file and the auto-borg flag,
//! persisted by the host as one flat `~`-delimited line per profile.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const DELIMITER: char = '~';

/// One save-slot profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub save_file: String,
    pub auto_borg: bool,
}

impl Profile {
    pub fn new(id: u32, name: impl Into<String>, save_file: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            save_file: save_file.into(),
            auto_borg: false,
        }
    }

    /// Flat delimited form, the inverse of [`Profile::from_str`].
    ///
    /// Field values must not contain the `~` delimiter.
    pub fn to_record(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}",
            self.id,
            self.name,
            self.save_file,
            self.auto_borg,
            d = DELIMITER
        )
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.save_file)
    }
}

/// Failure to parse a profile record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileParseError {
    #[error("expected 4 '~'-delimited fields, got {0}")]
    FieldCount(usize),
    #[error("invalid profile id: {0}")]
    Id(#[from] std::num::ParseIntError),
    #[error("invalid auto-borg flag: {0:?}")]
    AutoBorg(String),
}

impl FromStr for Profile {
    type Err = ProfileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(DELIMITER).collect();
        if fields.len() < 4 {
            return Err(ProfileParseError::FieldCount(fields.len()));
        }
        let auto_borg = match fields[3] {
            "true" => true,
            "false" => false,
            other => return Err(ProfileParseError::AutoBorg(other.to_string())),
        };
        Ok(Self {
            id: fields[0].parse()?,
            name: fields[1].to_string(),
            save_file: fields[2].to_string(),
            auto_borg,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let mut profile = Profile::new(3, "Gandalf", "save3");
        profile.auto_borg = true;
        let record = profile.to_record();
        assert_eq!(record, "3~Gandalf~save3~true");
        assert_eq!(record.parse::<Profile>().unwrap(), profile);
    }

    #[test]
    fn test_display() {
        let profile = Profile::new(1, "Conan", "save1");
        assert_eq!(profile.to_string(), "Conan (save1)");
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(
            "1~name".parse::<Profile>(),
            Err(ProfileParseError::FieldCount(2))
        );
    }

    #[test]
    fn test_bad_id() {
        assert!(matches!(
            "x~name~file~false".parse::<Profile>(),
            Err(ProfileParseError::Id(_))
        ));
    }

    #[test]
    fn test_bad_flag() {
        assert_eq!(
            "1~name~file~maybe".parse::<Profile>(),
            Err(ProfileParseError::AutoBorg("maybe".to_string()))
        );
    }
}
