use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Theme {
    Clear,
    Night,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Clear, Theme::Night];

    /// Suffix of the `style<suffix>` source directory.
    pub fn style_suffix(self) -> &'static str {
        match self {
            Theme::Clear => "-clear",
            Theme::Night => "-night",
        }
    }

    /// Suffix of the `resources-<dpi><suffix>` output directory.
    pub fn output_suffix(self) -> &'static str {
        match self {
            Theme::Clear => "_clear",
            Theme::Night => "_dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style_suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkinVariant {
    Default,
    Ads,
}

impl SkinVariant {
    pub const ALL: [SkinVariant; 2] = [SkinVariant::Default, SkinVariant::Ads];

    pub fn name(self) -> &'static str {
        match self {
            SkinVariant::Default => "default",
            SkinVariant::Ads => "ads",
        }
    }

    /// Suffix appended to both the PNG override and the `symbols` directory.
    pub fn path_suffix(self) -> &'static str {
        match self {
            SkinVariant::Default => "",
            SkinVariant::Ads => "-ad",
        }
    }
}

impl fmt::Display for SkinVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown skin variant '{0}'")]
pub struct UnknownSkinVariant(String);

impl FromStr for SkinVariant {
    type Err = UnknownSkinVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkinVariant::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| UnknownSkinVariant(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DpiLevel {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    SixPlus,
    Xxxhdpi,
}

impl DpiLevel {
    pub const ALL: [DpiLevel; 6] = [
        DpiLevel::Mdpi,
        DpiLevel::Hdpi,
        DpiLevel::Xhdpi,
        DpiLevel::Xxhdpi,
        DpiLevel::SixPlus,
        DpiLevel::Xxxhdpi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DpiLevel::Mdpi => "mdpi",
            DpiLevel::Hdpi => "hdpi",
            DpiLevel::Xhdpi => "xhdpi",
            DpiLevel::Xxhdpi => "xxhdpi",
            DpiLevel::SixPlus => "6plus",
            DpiLevel::Xxxhdpi => "xxxhdpi",
        }
    }
}

impl fmt::Display for DpiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown DPI level '{0}'")]
pub struct UnknownDpiLevel(String);

impl FromStr for DpiLevel {
    type Err = UnknownDpiLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DpiLevel::ALL
            .into_iter()
            .find(|dpi| dpi.name() == s)
            .ok_or_else(|| UnknownDpiLevel(s.to_owned()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SkinTableError {
    #[error(transparent)]
    UnknownSkinVariant(#[from] UnknownSkinVariant),
    #[error(transparent)]
    UnknownDpiLevel(#[from] UnknownDpiLevel),
    #[error("symbol size for {variant}/{dpi} must be greater than zero")]
    ZeroSize { variant: SkinVariant, dpi: DpiLevel },
}

/// Symbol pixel size for every skin variant and DPI level.
///
/// Iteration order is fixed: variants in declaration order, then DPI levels
/// in declaration order, independent of how the table was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinTable(BTreeMap<SkinVariant, BTreeMap<DpiLevel, u32>>);

/// Table in its serialized form, keyed by variant and DPI level names.
pub type RawSkinTable = BTreeMap<String, BTreeMap<String, u32>>;

impl SkinTable {
    pub fn builtin() -> SkinTable {
        use DpiLevel::*;

        let default = [
            (Mdpi, 18),
            (Hdpi, 27),
            (Xhdpi, 36),
            (Xxhdpi, 54),
            (SixPlus, 54),
            (Xxxhdpi, 64),
        ];
        let ads = [
            (Mdpi, 22),
            (Hdpi, 34),
            (Xhdpi, 44),
            (Xxhdpi, 68),
            (SixPlus, 68),
            (Xxxhdpi, 78),
        ];

        SkinTable(BTreeMap::from([
            (SkinVariant::Default, BTreeMap::from(default)),
            (SkinVariant::Ads, BTreeMap::from(ads)),
        ]))
    }

    pub fn size(&self, variant: SkinVariant, dpi: DpiLevel) -> Option<u32> {
        self.0.get(&variant)?.get(&dpi).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkinVariant, DpiLevel, u32)> + '_ {
        self.0.iter().flat_map(|(&variant, sizes)| {
            sizes.iter().map(move |(&dpi, &size)| (variant, dpi, size))
        })
    }

    /// Replaces the sizes of every variant named in `raw`, keeping the others.
    pub fn overridden_by(mut self, raw: &RawSkinTable) -> Result<SkinTable, SkinTableError> {
        for (variant, sizes) in raw {
            let variant: SkinVariant = variant.parse()?;
            let mut parsed = BTreeMap::new();
            for (dpi, &size) in sizes {
                let dpi: DpiLevel = dpi.parse()?;
                if size == 0 {
                    return Err(SkinTableError::ZeroSize { variant, dpi });
                }
                parsed.insert(dpi, size);
            }
            self.0.insert(variant, parsed);
        }
        Ok(self)
    }

    pub fn to_raw(&self) -> RawSkinTable {
        self.0
            .iter()
            .map(|(variant, sizes)| {
                let sizes = sizes
                    .iter()
                    .map(|(dpi, &size)| (dpi.name().to_owned(), size))
                    .collect();
                (variant.name().to_owned(), sizes)
            })
            .collect()
    }
}

impl Default for SkinTable {
    fn default() -> Self {
        SkinTable::builtin()
    }
}

impl Serialize for SkinTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SkinTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSkinTable::deserialize(deserializer)?;
        SkinTable::builtin()
            .overridden_by(&raw)
            .map_err(serde::de::Error::custom)
    }
}
