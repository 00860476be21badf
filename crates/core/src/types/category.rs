//! Classification enums for catalog products.

use serde::{Deserialize, Serialize};

/// Top-level product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Console,
    Digital,
    Games,
    Accessories,
}

impl Category {
    /// Every category, in page filter order.
    pub const ALL: [Self; 4] = [Self::Console, Self::Digital, Self::Games, Self::Accessories];

    /// Lowercase identifier as used in URLs and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Digital => "digital",
            Self::Games => "games",
            Self::Accessories => "accessories",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(Self::Console),
            "digital" => Ok(Self::Digital),
            "games" => Ok(Self::Games),
            "accessories" => Ok(Self::Accessories),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Gaming platform a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Playstation,
    Xbox,
    Nintendo,
    Pc,
}

impl Platform {
    /// Lowercase identifier as used in URLs and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playstation => "playstation",
            Self::Xbox => "xbox",
            Self::Nintendo => "nintendo",
            Self::Pc => "pc",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "playstation" => Ok(Self::Playstation),
            "xbox" => Ok(Self::Xbox),
            "nintendo" => Ok(Self::Nintendo),
            "pc" => Ok(Self::Pc),
            _ => Err(format!("invalid platform: {s}")),
        }
    }
}

/// Sub-category for products in [`Category::Accessories`].
///
/// Stored explicitly on each accessory rather than derived from its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryKind {
    GamingChairs,
    GamingDesks,
    Controllers,
    Headsets,
    PcAccessories,
}

impl AccessoryKind {
    /// Every accessory kind, in filter order.
    pub const ALL: [Self; 5] = [
        Self::GamingChairs,
        Self::GamingDesks,
        Self::Controllers,
        Self::Headsets,
        Self::PcAccessories,
    ];

    /// Identifier used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GamingChairs => "gaming_chairs",
            Self::GamingDesks => "gaming_desks",
            Self::Controllers => "controllers",
            Self::Headsets => "headsets",
            Self::PcAccessories => "pc_accessories",
        }
    }

    /// Human-readable label shown next to the filter checkbox.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GamingChairs => "Gaming Chairs",
            Self::GamingDesks => "Gaming Desks",
            Self::Controllers => "Controllers",
            Self::Headsets => "Headsets",
            Self::PcAccessories => "PC Accessories",
        }
    }
}

impl std::fmt::Display for AccessoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for AccessoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.label() == s)
            .ok_or_else(|| format!("invalid accessory kind: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        for platform in [
            Platform::Playstation,
            Platform::Xbox,
            Platform::Nintendo,
            Platform::Pc,
        ] {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
        assert!("sega".parse::<Platform>().is_err());
    }

    #[test]
    fn test_category_serde_is_lowercase() {
        let json = serde_json::to_string(&Category::Accessories).unwrap();
        assert_eq!(json, "\"accessories\"");
    }

    #[test]
    fn test_accessory_kind_accepts_label_or_slug() {
        assert_eq!(
            "Gaming Desks".parse::<AccessoryKind>(),
            Ok(AccessoryKind::GamingDesks)
        );
        assert_eq!(
            "headsets".parse::<AccessoryKind>(),
            Ok(AccessoryKind::Headsets)
        );
        assert!("mice".parse::<AccessoryKind>().is_err());
    }
}
