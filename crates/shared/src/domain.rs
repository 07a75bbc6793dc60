use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(FilmId);
id_newtype!(ActorId);
id_newtype!(CustomerId);
id_newtype!(RentalId);

#[derive(Debug, Error)]
#[error("unknown search mode '{0}'")]
pub struct SearchModeParseError(String);

/// Column selector for film search; serialized as the `by` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmSearchBy {
    #[default]
    All,
    Film,
    Actor,
    Genre,
}

impl FilmSearchBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Film => "film",
            Self::Actor => "actor",
            Self::Genre => "genre",
        }
    }
}

impl fmt::Display for FilmSearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilmSearchBy {
    type Err = SearchModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "film" => Ok(Self::Film),
            "actor" => Ok(Self::Actor),
            "genre" => Ok(Self::Genre),
            other => Err(SearchModeParseError(other.to_string())),
        }
    }
}

/// Column selector for customer search; serialized as the `by` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerSearchBy {
    #[default]
    All,
    Id,
    FirstName,
    LastName,
}

impl CustomerSearchBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
        }
    }
}

impl fmt::Display for CustomerSearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerSearchBy {
    type Err = SearchModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "id" => Ok(Self::Id),
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            other => Err(SearchModeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_search_modes_round_trip_through_str() {
        for mode in [
            FilmSearchBy::All,
            FilmSearchBy::Film,
            FilmSearchBy::Actor,
            FilmSearchBy::Genre,
        ] {
            assert_eq!(mode.as_str().parse::<FilmSearchBy>().unwrap(), mode);
        }
    }

    #[test]
    fn customer_search_modes_round_trip_through_str() {
        for mode in [
            CustomerSearchBy::All,
            CustomerSearchBy::Id,
            CustomerSearchBy::FirstName,
            CustomerSearchBy::LastName,
        ] {
            assert_eq!(mode.as_str().parse::<CustomerSearchBy>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_search_mode_is_rejected() {
        let err = "rating".parse::<CustomerSearchBy>().unwrap_err();
        assert!(err.to_string().contains("rating"));
    }
}
