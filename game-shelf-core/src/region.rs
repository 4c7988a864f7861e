use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Release regions recognized by the IGDB catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Worldwide / region-free release
    Worldwide,
    /// North America (USA, Canada)
    NorthAmerica,
    /// Europe (PAL regions)
    Europe,
    /// Asia (Hong Kong, Southeast Asia)
    Asia,
    /// Japan
    Japan,
    /// Australia
    Australia,
    /// New Zealand
    NewZealand,
    /// Korea
    Korea,
    /// Brazil
    Brazil,
    /// China
    China,
}

impl Region {
    /// Selection order when the user supplies no region.
    ///
    /// Fixed behavioral constant; covers every variant, so priority
    /// selection always terminates once at least one entry is present.
    pub const PRIORITY: [Region; 10] = [
        Region::Worldwide,
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::Japan,
        Region::Australia,
        Region::NewZealand,
        Region::Korea,
        Region::Brazil,
        Region::China,
    ];

    /// Returns the IGDB numeric code for this region.
    pub fn code(&self) -> u8 {
        match self {
            Self::Europe => 1,
            Self::NorthAmerica => 2,
            Self::Australia => 3,
            Self::NewZealand => 4,
            Self::Japan => 5,
            Self::China => 6,
            Self::Asia => 7,
            Self::Worldwide => 8,
            Self::Korea => 9,
            Self::Brazil => 10,
        }
    }

    /// Parse an IGDB numeric region code. Codes outside 1-10 are not part
    /// of the catalog contract and return `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Europe),
            2 => Some(Self::NorthAmerica),
            3 => Some(Self::Australia),
            4 => Some(Self::NewZealand),
            5 => Some(Self::Japan),
            6 => Some(Self::China),
            7 => Some(Self::Asia),
            8 => Some(Self::Worldwide),
            9 => Some(Self::Korea),
            10 => Some(Self::Brazil),
            _ => None,
        }
    }

    /// Returns the canonical display name of this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Worldwide => "Worldwide",
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::Asia => "Asia",
            Self::Japan => "Japan",
            Self::Australia => "Australia",
            Self::NewZealand => "New Zealand",
            Self::Korea => "Korea",
            Self::Brazil => "Brazil",
            Self::China => "China",
        }
    }

    /// Accepted short aliases for this region (the canonical name also parses).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Worldwide => &["ww", "global"],
            Self::NorthAmerica => &["na", "usa"],
            Self::Europe => &["eu", "eur"],
            Self::Asia => &["as", "hk", "hong kong"],
            Self::Japan => &["jp", "jpn"],
            Self::Australia => &["aus", "oceania"],
            Self::NewZealand => &["nz"],
            Self::Korea => &["kr", "south korea"],
            Self::Brazil => &["br", "brz"],
            Self::China => &["cn", "roc"],
        }
    }

    /// Parse a user-supplied region string.
    ///
    /// Case-insensitive, surrounding whitespace ignored, many-to-one: every
    /// alias and every canonical name maps to exactly one region.
    pub fn from_alias(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "ww" | "worldwide" | "global" => Some(Self::Worldwide),
            "na" | "usa" | "north america" => Some(Self::NorthAmerica),
            "eu" | "eur" | "europe" => Some(Self::Europe),
            "as" | "hk" | "asia" | "hong kong" => Some(Self::Asia),
            "jp" | "jpn" | "japan" => Some(Self::Japan),
            "aus" | "australia" | "oceania" => Some(Self::Australia),
            "nz" | "new zealand" => Some(Self::NewZealand),
            "kr" | "korea" | "south korea" => Some(Self::Korea),
            "br" | "brz" | "brazil" => Some(Self::Brazil),
            "cn" | "roc" | "china" => Some(Self::China),
            _ => None,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Region {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| ResolveError::InvalidRegion {
            input: s.to_string(),
        })
    }
}
