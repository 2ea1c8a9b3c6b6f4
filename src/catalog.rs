//! Fixed public catalog: artifact category pages, exhibition kinds, and featured exhibitions
//! with the lookup that links their objects.

use serde::Serialize;

/// Exhibition rows are split into events and standard exhibitions by an exact,
/// case-sensitive match on the category text. "Events" or "event" are standard exhibitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionKind {
    Event,
    Standard,
}

impl ExhibitionKind {
    /// The only category value that marks an event.
    pub const EVENT_CATEGORY: &'static str = "Event";

    pub fn classify(category: &str) -> Self {
        if category == Self::EVENT_CATEGORY {
            ExhibitionKind::Event
        } else {
            ExhibitionKind::Standard
        }
    }
}

/// Artifact categories with a public listing page. The artifact's `category` column stays free
/// text; a page lists rows whose category equals `label()` exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactCategory {
    IndianArt,
    AsianArt,
    ArmsAndArmor,
    EgyptianArt,
    IslamicArt,
    EuropeanArt,
    AncientAmericanArt,
    AncientNearEasternArt,
    MedievalArtAndTheCloisters,
}

impl ArtifactCategory {
    pub const ALL: [ArtifactCategory; 9] = [
        ArtifactCategory::IndianArt,
        ArtifactCategory::AsianArt,
        ArtifactCategory::ArmsAndArmor,
        ArtifactCategory::EgyptianArt,
        ArtifactCategory::IslamicArt,
        ArtifactCategory::EuropeanArt,
        ArtifactCategory::AncientAmericanArt,
        ArtifactCategory::AncientNearEasternArt,
        ArtifactCategory::MedievalArtAndTheCloisters,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ArtifactCategory::IndianArt => "Indian Art",
            ArtifactCategory::AsianArt => "Asian Art",
            ArtifactCategory::ArmsAndArmor => "Arms and Armor",
            ArtifactCategory::EgyptianArt => "Egyptian Art",
            ArtifactCategory::IslamicArt => "Islamic Art",
            ArtifactCategory::EuropeanArt => "European Art",
            ArtifactCategory::AncientAmericanArt => "Ancient American Art",
            ArtifactCategory::AncientNearEasternArt => "Ancient Near Eastern Art",
            ArtifactCategory::MedievalArtAndTheCloisters => "Medieval Art and The Cloisters",
        }
    }

    /// URL slug; also the view name of the listing page.
    pub fn slug(self) -> &'static str {
        match self {
            ArtifactCategory::IndianArt => "indian_art",
            ArtifactCategory::AsianArt => "asian_art",
            ArtifactCategory::ArmsAndArmor => "arms_and_armor",
            ArtifactCategory::EgyptianArt => "egyptian_art",
            ArtifactCategory::IslamicArt => "islamic_art",
            ArtifactCategory::EuropeanArt => "european_art",
            ArtifactCategory::AncientAmericanArt => "ancient_american_art",
            ArtifactCategory::AncientNearEasternArt => "ancient_near_eastern_art",
            ArtifactCategory::MedievalArtAndTheCloisters => "medieval_art_and_the_cloisters",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }
}

/// How a featured exhibition finds its objects: an exact match on one exhibition_objects column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectLink {
    Creator(&'static str),
    Culture(&'static str),
}

impl ObjectLink {
    pub fn column(self) -> &'static str {
        match self {
            ObjectLink::Creator(_) => "creator",
            ObjectLink::Culture(_) => "culture",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            ObjectLink::Creator(v) | ObjectLink::Culture(v) => v,
        }
    }
}

/// A named exhibition with its own public page. The page shows the exhibition row whose
/// `exhibit_name` equals `title`; when `objects` is set, `/<slug>/objects` lists the linked objects.
#[derive(Clone, Copy, Debug)]
pub struct FeaturedExhibition {
    pub slug: &'static str,
    pub title: &'static str,
    pub objects: Option<ObjectLink>,
}

impl FeaturedExhibition {
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }

    pub fn objects_path(&self) -> Option<String> {
        self.objects.map(|_| format!("/{}/objects", self.slug))
    }
}

const fn featured(
    slug: &'static str,
    title: &'static str,
    objects: Option<ObjectLink>,
) -> FeaturedExhibition {
    FeaturedExhibition {
        slug,
        title,
        objects,
    }
}

pub const FEATURED_EXHIBITIONS: &[FeaturedExhibition] = &[
    featured(
        "caspar_david_friedrich",
        "Caspar David Friedrich: The Soul of Nature",
        Some(ObjectLink::Creator("Caspar David Friedrich")),
    ),
    featured(
        "monstrous_beauty",
        "Monstrous Beauty: A Feminist Revision of Chinoiserie",
        None,
    ),
    featured(
        "recasting_the_past",
        "Recasting The Past: The Art of Chinese Bronzes, 1100-1900",
        Some(ObjectLink::Culture("China")),
    ),
    featured(
        "layered_narratives",
        "Layered Narratives: The Northern Renaissance Gallery",
        Some(ObjectLink::Creator("Layered narratives")),
    ),
    featured(
        "cycladic_art",
        "Cycladic Art",
        Some(ObjectLink::Creator("Cycladic Art")),
    ),
    featured(
        "art_of_commerce",
        "Art of Commerce: Trade Catalogs in Watson Library",
        None,
    ),
    featured(
        "colorful_korea",
        "Colorful Korea: The Lea R. Sneider Collection",
        Some(ObjectLink::Culture("South Korea")),
    ),
    featured(
        "floridas",
        "Floridas: Anastasia Samoylova and Walker Evans",
        None,
    ),
    featured(
        "afterlives",
        "Afterlives: Contemporary Art in the Byzantine Crypt",
        None,
    ),
    featured(
        "embracing_color",
        "Embracing Color: Enamel in Chinese Decorative Arts, 1300\u{2013}1900",
        Some(ObjectLink::Culture("Chinese Decoratives")),
    ),
    featured(
        "before_yesterday_we_could_fly",
        "Before Yesterday We Could Fly: An Afrofuturist Period Room",
        Some(ObjectLink::Culture("Europe")),
    ),
    featured(
        "art_of_native_america",
        "Art of Native America: The Charles and Valerie Diker Collection",
        Some(ObjectLink::Culture("Native America")),
    ),
    featured(
        "the_new_art",
        "The New Art: American Photography, 1839\u{2013}1910",
        None,
    ),
    featured(
        "city_and_country",
        "City and Country: Selections from the Department of Drawings and Prints",
        None,
    ),
    featured(
        "arts_of_the_ancient_americans",
        "Arts of the Ancient Americas",
        None,
    ),
    featured("arts_of_africa", "Arts of Africa", None),
    featured(
        "the_magical_city",
        "The Magical City: George Morrisons New York",
        None,
    ),
];
