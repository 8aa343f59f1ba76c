// SPDX-License-Identifier: MPL-2.0
//! Adoption listing filter types.
//!
//! A listing is narrowed by two independent filters: the animal species and
//! the administrative region of the shelter. Both are closed enumerations
//! whose canonical values are the Korean labels used by the shelter API
//! (`강아지`, `서울`, ...). Display names go through i18n keys instead.
//!
//! # Available Filters
//!
//! - [`Species`]: dog, cat, other, or all
//! - [`Region`]: one of the 17 regions, or nationwide
//! - [`FilterSelection`]: both filters combined with AND logic

// =============================================================================
// Species
// =============================================================================

/// Animal species filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Species {
    Dog,
    Cat,
    Other,
    /// Matches every species.
    #[default]
    All,
}

impl Species {
    /// All species in picker display order.
    pub const ALL: [Species; 4] = [Species::Dog, Species::Cat, Species::Other, Species::All];

    /// Canonical label, as sent in listing queries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dog => "강아지",
            Self::Cat => "고양이",
            Self::Other => "기타",
            Self::All => "전체",
        }
    }

    /// Parses a canonical label. Unknown labels are rejected.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label.trim())
    }

    /// i18n key for the display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Dog => "species-dog",
            Self::Cat => "species-cat",
            Self::Other => "species-other",
            Self::All => "species-all",
        }
    }

    /// Returns `true` if a listing of the given species passes this filter.
    ///
    /// Entries with an unknown species only pass the `All` filter.
    #[must_use]
    pub fn matches(self, species: Option<Species>) -> bool {
        match self {
            Self::All => true,
            wanted => species == Some(wanted),
        }
    }

    /// Returns `true` if this filter narrows the listing.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Region
// =============================================================================

/// Shelter region filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Matches every region.
    #[default]
    Nationwide,
    Seoul,
    Gyeonggi,
    Incheon,
    Jeju,
    Chungbuk,
    Chungnam,
    Daejeon,
    Gyeongbuk,
    Gyeongnam,
    Daegu,
    Ulsan,
    Busan,
    Jeonbuk,
    Jeonnam,
    Gwangju,
    Gangwon,
    Sejong,
}

impl Region {
    /// All regions in picker display order.
    pub const ALL: [Region; 18] = [
        Region::Nationwide,
        Region::Seoul,
        Region::Gyeonggi,
        Region::Incheon,
        Region::Jeju,
        Region::Chungbuk,
        Region::Chungnam,
        Region::Daejeon,
        Region::Gyeongbuk,
        Region::Gyeongnam,
        Region::Daegu,
        Region::Ulsan,
        Region::Busan,
        Region::Jeonbuk,
        Region::Jeonnam,
        Region::Gwangju,
        Region::Gangwon,
        Region::Sejong,
    ];

    /// Canonical label, as sent in listing queries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Nationwide => "전국",
            Self::Seoul => "서울",
            Self::Gyeonggi => "경기",
            Self::Incheon => "인천",
            Self::Jeju => "제주특별자치도",
            Self::Chungbuk => "충북",
            Self::Chungnam => "충남",
            Self::Daejeon => "대전",
            Self::Gyeongbuk => "경북",
            Self::Gyeongnam => "경남",
            Self::Daegu => "대구",
            Self::Ulsan => "울산",
            Self::Busan => "부산",
            Self::Jeonbuk => "전북",
            Self::Jeonnam => "전남",
            Self::Gwangju => "광주",
            Self::Gangwon => "강원특별자치도",
            Self::Sejong => "세종특별자치시",
        }
    }

    /// Parses a canonical label. Unknown labels are rejected.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label.trim())
    }

    /// i18n key for the display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Nationwide => "region-nationwide",
            Self::Seoul => "region-seoul",
            Self::Gyeonggi => "region-gyeonggi",
            Self::Incheon => "region-incheon",
            Self::Jeju => "region-jeju",
            Self::Chungbuk => "region-chungbuk",
            Self::Chungnam => "region-chungnam",
            Self::Daejeon => "region-daejeon",
            Self::Gyeongbuk => "region-gyeongbuk",
            Self::Gyeongnam => "region-gyeongnam",
            Self::Daegu => "region-daegu",
            Self::Ulsan => "region-ulsan",
            Self::Busan => "region-busan",
            Self::Jeonbuk => "region-jeonbuk",
            Self::Jeonnam => "region-jeonnam",
            Self::Gwangju => "region-gwangju",
            Self::Gangwon => "region-gangwon",
            Self::Sejong => "region-sejong",
        }
    }

    /// Returns `true` if a listing in the given region passes this filter.
    #[must_use]
    pub fn matches(self, region: Option<Region>) -> bool {
        match self {
            Self::Nationwide => true,
            wanted => region == Some(wanted),
        }
    }

    /// Returns `true` if this filter narrows the listing.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Nationwide)
    }
}

// =============================================================================
// Filter Selection
// =============================================================================

/// A single change to the filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Species(Species),
    Region(Region),
}

/// Current species/region selection.
///
/// Immutable: changes produce a new value through [`FilterSelection::with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FilterSelection {
    pub species: Species,
    pub region: Region,
}

impl FilterSelection {
    #[must_use]
    pub fn new(species: Species, region: Region) -> Self {
        Self { species, region }
    }

    /// Returns a copy with the change applied.
    #[must_use]
    pub fn with(self, change: FilterChange) -> Self {
        match change {
            FilterChange::Species(species) => Self { species, ..self },
            FilterChange::Region(region) => Self { region, ..self },
        }
    }

    /// Returns `true` if a listing passes both filters.
    #[must_use]
    pub fn matches(&self, species: Option<Species>, region: Option<Region>) -> bool {
        self.species.matches(species) && self.region.matches(region)
    }

    /// Returns `true` if any filter narrows the listing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.species.is_active() || self.region.is_active()
    }
}
