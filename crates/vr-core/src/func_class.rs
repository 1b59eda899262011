//! Functional classification shared by the transform and output crates.
//!
//! Codes follow the VDOT scheme (1 = interstate … 7 = local).  The mapping
//! from OSM `highway` values is closed: anything not listed, including an
//! absent tag, is [`FuncClass::Local`].

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A coarse road category, serialized as its code string `"1"`..`"7"`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum FuncClass {
    Interstate,
    FreewayExpressway,
    PrincipalArterial,
    MinorArterial,
    MajorCollector,
    MinorCollector,
    Local,
}

impl FuncClass {
    /// All classes in code order.
    pub const ALL: [FuncClass; 7] = [
        FuncClass::Interstate,
        FuncClass::FreewayExpressway,
        FuncClass::PrincipalArterial,
        FuncClass::MinorArterial,
        FuncClass::MajorCollector,
        FuncClass::MinorCollector,
        FuncClass::Local,
    ];

    /// Classify an OSM `highway` tag value.
    pub fn from_highway(highway: &str) -> FuncClass {
        match highway {
            "motorway"  | "motorway_link"  => FuncClass::Interstate,
            "trunk"     | "trunk_link"     => FuncClass::FreewayExpressway,
            "primary"   | "primary_link"   => FuncClass::PrincipalArterial,
            "secondary" | "secondary_link" => FuncClass::MinorArterial,
            "tertiary"  | "tertiary_link"  => FuncClass::MajorCollector,
            "unclassified"                 => FuncClass::MinorCollector,
            // residential, living_street, service, and everything unknown.
            _                              => FuncClass::Local,
        }
    }

    /// Numeric code, 1–7.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Zero-based position in [`FuncClass::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The code as the string key used in JSON documents.
    pub fn as_str(self) -> &'static str {
        match self {
            FuncClass::Interstate        => "1",
            FuncClass::FreewayExpressway => "2",
            FuncClass::PrincipalArterial => "3",
            FuncClass::MinorArterial     => "4",
            FuncClass::MajorCollector    => "5",
            FuncClass::MinorCollector    => "6",
            FuncClass::Local             => "7",
        }
    }
}

impl fmt::Display for FuncClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuncClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuncClass::ALL
            .into_iter()
            .find(|fc| fc.as_str() == s)
            .ok_or_else(|| CoreError::InvalidFuncClass(s.to_owned()))
    }
}

impl TryFrom<String> for FuncClass {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FuncClass> for &'static str {
    fn from(fc: FuncClass) -> Self {
        fc.as_str()
    }
}
