use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::RiotApiError;

/// Regional routing cluster. Accepts the cluster name or any of the short
/// server codes players type in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Region {
    #[strum(
        to_string = "americas",
        serialize = "na",
        serialize = "br",
        serialize = "lan",
        serialize = "las",
        serialize = "na1",
        serialize = "br1",
        serialize = "la1",
        serialize = "la2"
    )]
    Americas,
    #[strum(
        to_string = "europe",
        serialize = "eune",
        serialize = "euw",
        serialize = "me1",
        serialize = "tr",
        serialize = "ru",
        serialize = "euw1",
        serialize = "eun1",
        serialize = "tr1"
    )]
    Europe,
    #[strum(to_string = "asia", serialize = "kr", serialize = "jp", serialize = "jp1")]
    Asia,
    #[strum(
        to_string = "sea",
        serialize = "oce",
        serialize = "oc1",
        serialize = "sg2",
        serialize = "ph2",
        serialize = "th2",
        serialize = "tw2",
        serialize = "vn2"
    )]
    Sea,
}

impl Region {
    pub fn parse(code: &str) -> Result<Self, RiotApiError> {
        Region::from_str(code.trim()).map_err(|_| RiotApiError::UnknownRegion(code.to_string()))
    }

    /// Host prefix for the match-v5 endpoints
    pub fn routing_host(self) -> &'static str {
        match self {
            Region::Americas => "americas",
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::Sea => "sea",
        }
    }

    /// The account endpoint has no `sea` cluster; those accounts live on `asia`.
    pub fn account_host(self) -> &'static str {
        match self {
            Region::Sea => "asia",
            other => other.routing_host(),
        }
    }

    /// Platforms probed, in order, when locating a summoner in this region
    pub fn platforms(self) -> &'static [&'static str] {
        match self {
            Region::Americas => &["na1", "br1", "la1", "la2"],
            Region::Europe => &["euw1", "eun1", "tr1", "ru", "me1"],
            Region::Asia => &["kr", "jp1"],
            Region::Sea => &["sg2", "ph2", "th2", "tw2", "vn2", "oc1"],
        }
    }
}
