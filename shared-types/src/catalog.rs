//! Static studio data baked into the site: the booking catalogs, studio hours,
//! the artists roster and the gallery pieces.

use chrono::{NaiveDate, Weekday, Datelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::masonry::HasHeight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtistId {
    Sarah,
    Marcus,
    Luna,
    Any,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: ArtistId,
    pub name: &'static str,
    pub specialty: &'static str,
}

pub const ARTISTS: &[Artist] = &[
    Artist {
        id: ArtistId::Sarah,
        name: "Sarah Martinez",
        specialty: "Realism & Portraits",
    },
    Artist {
        id: ArtistId::Marcus,
        name: "Marcus Chen",
        specialty: "Japanese Traditional",
    },
    Artist {
        id: ArtistId::Luna,
        name: "Luna Rodriguez",
        specialty: "Fine Line & Minimalist",
    },
    Artist {
        id: ArtistId::Any,
        name: "Any Available Artist",
        specialty: "Best match for your style",
    },
];

impl ArtistId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtistId::Sarah => "sarah",
            ArtistId::Marcus => "marcus",
            ArtistId::Luna => "luna",
            ArtistId::Any => "any",
        }
    }

    pub fn artist(&self) -> &'static Artist {
        // Every id has exactly one catalog row.
        ARTISTS
            .iter()
            .find(|a| a.id == *self)
            .unwrap_or(&ARTISTS[ARTISTS.len() - 1])
    }
}

impl FromStr for ArtistId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ARTISTS
            .iter()
            .map(|a| a.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownArtist(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceId {
    Consultation,
    Small,
    Medium,
    Large,
    TouchUp,
    CoverUp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub name: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: ServiceId::Consultation,
        name: "Free Consultation",
        duration: "30 min",
        price: "Free",
    },
    Service {
        id: ServiceId::Small,
        name: "Small Tattoo",
        duration: "1-2 hours",
        price: "$150-300",
    },
    Service {
        id: ServiceId::Medium,
        name: "Medium Tattoo",
        duration: "2-4 hours",
        price: "$300-600",
    },
    Service {
        id: ServiceId::Large,
        name: "Large Tattoo",
        duration: "4+ hours",
        price: "$600+",
    },
    Service {
        id: ServiceId::TouchUp,
        name: "Touch-up",
        duration: "1 hour",
        price: "$100-200",
    },
    Service {
        id: ServiceId::CoverUp,
        name: "Cover-up",
        duration: "3-5 hours",
        price: "$400-800",
    },
];

impl ServiceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceId::Consultation => "consultation",
            ServiceId::Small => "small",
            ServiceId::Medium => "medium",
            ServiceId::Large => "large",
            ServiceId::TouchUp => "touch-up",
            ServiceId::CoverUp => "cover-up",
        }
    }

    pub fn service(&self) -> &'static Service {
        SERVICES
            .iter()
            .find(|s| s.id == *self)
            .unwrap_or(&SERVICES[0])
    }
}

impl FromStr for ServiceId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SERVICES
            .iter()
            .map(|svc| svc.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownService(s.to_string()))
    }
}

/// Hourly appointment start times offered by the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "9:00 AM")]
    NineAm,
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    #[serde(rename = "12:00 PM")]
    Noon,
    #[serde(rename = "1:00 PM")]
    OnePm,
    #[serde(rename = "2:00 PM")]
    TwoPm,
    #[serde(rename = "3:00 PM")]
    ThreePm,
    #[serde(rename = "4:00 PM")]
    FourPm,
    #[serde(rename = "5:00 PM")]
    FivePm,
    #[serde(rename = "6:00 PM")]
    SixPm,
    #[serde(rename = "7:00 PM")]
    SevenPm,
}

pub const TIME_SLOTS: &[TimeSlot] = &[
    TimeSlot::NineAm,
    TimeSlot::TenAm,
    TimeSlot::ElevenAm,
    TimeSlot::Noon,
    TimeSlot::OnePm,
    TimeSlot::TwoPm,
    TimeSlot::ThreePm,
    TimeSlot::FourPm,
    TimeSlot::FivePm,
    TimeSlot::SixPm,
    TimeSlot::SevenPm,
];

impl TimeSlot {
    /// Start hour on a 24-hour clock.
    pub fn hour(&self) -> u32 {
        match self {
            TimeSlot::NineAm => 9,
            TimeSlot::TenAm => 10,
            TimeSlot::ElevenAm => 11,
            TimeSlot::Noon => 12,
            TimeSlot::OnePm => 13,
            TimeSlot::TwoPm => 14,
            TimeSlot::ThreePm => 15,
            TimeSlot::FourPm => 16,
            TimeSlot::FivePm => 17,
            TimeSlot::SixPm => 18,
            TimeSlot::SevenPm => 19,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::NineAm => "9:00 AM",
            TimeSlot::TenAm => "10:00 AM",
            TimeSlot::ElevenAm => "11:00 AM",
            TimeSlot::Noon => "12:00 PM",
            TimeSlot::OnePm => "1:00 PM",
            TimeSlot::TwoPm => "2:00 PM",
            TimeSlot::ThreePm => "3:00 PM",
            TimeSlot::FourPm => "4:00 PM",
            TimeSlot::FivePm => "5:00 PM",
            TimeSlot::SixPm => "6:00 PM",
            TimeSlot::SevenPm => "7:00 PM",
        }
    }

    /// Whether the studio is open at this start time on `date`.
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        let hours = StudioHours::for_weekday(date.weekday());
        self.hour() >= hours.opens && self.hour() < hours.closes
    }

    /// Slots the studio can take on `date`, in catalog order.
    pub fn open_on(date: NaiveDate) -> Vec<TimeSlot> {
        TIME_SLOTS
            .iter()
            .copied()
            .filter(|slot| slot.is_open_on(date))
            .collect()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TIME_SLOTS
            .iter()
            .copied()
            .find(|slot| slot.label() == s)
            .ok_or_else(|| CatalogError::UnknownTimeSlot(s.to_string()))
    }
}

/// Opening hours for one weekday, as whole hours on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudioHours {
    pub opens: u32,
    pub closes: u32,
}

impl StudioHours {
    pub fn for_weekday(day: Weekday) -> StudioHours {
        match day {
            Weekday::Sun => StudioHours { opens: 12, closes: 18 },
            _ => StudioHours { opens: 10, closes: 20 },
        }
    }
}

pub const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday", "10:00 AM - 8:00 PM"),
    ("Tuesday", "10:00 AM - 8:00 PM"),
    ("Wednesday", "10:00 AM - 8:00 PM"),
    ("Thursday", "10:00 AM - 8:00 PM"),
    ("Friday", "10:00 AM - 8:00 PM"),
    ("Saturday", "10:00 AM - 8:00 PM"),
    ("Sunday", "12:00 PM - 6:00 PM"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryType {
    Consultation,
    Pricing,
    Appointment,
    Aftercare,
    General,
}

pub const INQUIRY_TYPES: &[InquiryType] = &[
    InquiryType::Consultation,
    InquiryType::Pricing,
    InquiryType::Appointment,
    InquiryType::Aftercare,
    InquiryType::General,
];

impl InquiryType {
    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::Consultation => "Free Consultation",
            InquiryType::Pricing => "Pricing Information",
            InquiryType::Appointment => "Book Appointment",
            InquiryType::Aftercare => "Aftercare Questions",
            InquiryType::General => "General Inquiry",
        }
    }
}

pub struct StudioInfo {
    pub name: &'static str,
    pub address_line_1: &'static str,
    pub address_line_2: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub instagram: &'static str,
    pub facebook: &'static str,
    /// Google Maps search for the street address.
    pub directions_url: &'static str,
    pub map_embed_url: &'static str,
}

pub const STUDIO: StudioInfo = StudioInfo {
    name: "Pine Ink Tattoo",
    address_line_1: "2367 Yonge Street",
    address_line_2: "Toronto ON M4P 2C8, Floor 2",
    phone: "(416) 486-9290",
    phone_href: "tel:+14164869290",
    email: "pineinktoronto@gmail.com",
    instagram: "https://www.instagram.com/pineinktattoos/",
    facebook: "https://www.facebook.com/pine.ink.tattoo/",
    directions_url: "https://maps.google.com/?q=2367+Yonge+Street+Toronto+ON+M4P+2C8",
    map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2887.268589041123!2d-79.3997!3d43.7032!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zNDPCsDQyJzExLjUiTiA3OcKwMjMnNTguNyJX!5e0!3m2!1sen!2sca!4v1234567890",
};

/// Getting to the studio, shown under the contact page map.
pub const PARKING_AND_TRANSIT: &[&str] = &[
    "Street parking available",
    "Green P parking nearby",
    "TTC subway: Yonge Line (Eglinton)",
    "Bus routes: 97, 320, 97A",
];

pub const POLICIES: &[&str] = &[
    "Free consultations for all new clients",
    "24-hour cancellation policy",
    "Deposit required to secure appointment",
    "Must be 18+ or have parental consent",
    "Valid ID required for all appointments",
];

pub const SAFETY_FEATURES: &[&str] = &[
    "Single-use, sterile needles and equipment",
    "Hospital-grade sterilization protocols",
    "Licensed and insured artists",
    "Health department approved facility",
];

/// An artist on the artists page roster.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryArtist {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    pub image: &'static str,
    pub instagram: &'static str,
    pub experience: &'static str,
    pub description: &'static str,
}

impl DirectoryArtist {
    /// Initials shown when the artist photo fails to load.
    pub fn monogram(&self) -> String {
        monogram(self.name)
    }
}

pub fn monogram(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

pub const DIRECTORY: &[DirectoryArtist] = &[
    DirectoryArtist {
        id: 1,
        name: "Damon",
        specialty: "Chinese Traditional",
        image: "/images/pineinktattoos/artists/damon.png",
        instagram: "https://www.instagram.com/damontattoos_han/",
        experience: "8+ years",
        description: "Specializing in traditional Chinese and Japanese designs with modern flair.",
    },
    DirectoryArtist {
        id: 2,
        name: "Bo",
        specialty: "Asian Traditional",
        image: "/images/pineinktattoos/artists/bo.png",
        instagram: "https://www.instagram.com/bo_toronto_tattoo/",
        experience: "6+ years",
        description: "Master of traditional Asian tattoo styles and fine line work.",
    },
    DirectoryArtist {
        id: 3,
        name: "Raven",
        specialty: "Neo-Traditional & Fine Line",
        image: "/images/pineinktattoos/artists/raven.png",
        instagram: "https://www.instagram.com/halloweenink/",
        experience: "5+ years",
        description: "Creating bold neo-traditional designs and delicate fine line work.",
    },
    DirectoryArtist {
        id: 4,
        name: "Naomi",
        specialty: "Pop Surrealism & Abstract",
        image: "/images/pineinktattoos/artists/naomi.png",
        instagram: "https://www.instagram.com/rampaintink/",
        experience: "4+ years",
        description: "Bringing surreal and abstract art to life with vibrant colors.",
    },
    DirectoryArtist {
        id: 5,
        name: "Yan",
        specialty: "Realism & Hyper-Detailed",
        image: "/images/pineinktattoos/artists/yan.png",
        instagram: "https://www.instagram.com/pineinktattoos/",
        experience: "6+ years",
        description: "Creating stunning hyper-detailed realistic portraits and artwork.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryCategory {
    Traditional,
    Geometric,
    Realistic,
    Watercolor,
    Blackwork,
    Minimalist,
}

pub const GALLERY_CATEGORIES: &[GalleryCategory] = &[
    GalleryCategory::Traditional,
    GalleryCategory::Geometric,
    GalleryCategory::Realistic,
    GalleryCategory::Watercolor,
    GalleryCategory::Blackwork,
    GalleryCategory::Minimalist,
];

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Traditional => "traditional",
            GalleryCategory::Geometric => "geometric",
            GalleryCategory::Realistic => "realistic",
            GalleryCategory::Watercolor => "watercolor",
            GalleryCategory::Blackwork => "blackwork",
            GalleryCategory::Minimalist => "minimalist",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Traditional => "Traditional",
            GalleryCategory::Geometric => "Geometric",
            GalleryCategory::Realistic => "Realistic",
            GalleryCategory::Watercolor => "Watercolor",
            GalleryCategory::Blackwork => "Blackwork",
            GalleryCategory::Minimalist => "Minimalist",
        }
    }

    /// Parses the `?style=` query value. An empty value means no filter.
    pub fn parse_filter(value: Option<&str>) -> Result<Option<GalleryCategory>, CatalogError> {
        match value.map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(v) => v.parse().map(Some),
        }
    }
}

impl FromStr for GalleryCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GALLERY_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryPiece {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub category: GalleryCategory,
    pub artist: &'static str,
    pub body_part: &'static str,
    pub date: &'static str,
    pub likes: u32,
    pub height: u32,
    pub description: Option<&'static str>,
}

impl HasHeight for GalleryPiece {
    fn height(&self) -> u32 {
        self.height
    }
}

pub const GALLERY: &[GalleryPiece] = &[
    GalleryPiece {
        id: 1,
        src: "/images/pineinktattoos/work/tattoo-rose-shoulder.jpg",
        alt: "Black and grey rose tattoo on shoulder",
        category: GalleryCategory::Traditional,
        artist: "Maria Rodriguez",
        body_part: "Shoulder",
        date: "2024-01-15",
        likes: 247,
        height: 400,
        description: Some("Detailed black and grey rose with intricate shading and classic traditional styling."),
    },
    GalleryPiece {
        id: 2,
        src: "/images/pineinktattoos/work/tattoo-geometric-forearm.jpg",
        alt: "Geometric mandala tattoo on forearm",
        category: GalleryCategory::Geometric,
        artist: "Alex Chen",
        body_part: "Forearm",
        date: "2024-01-20",
        likes: 189,
        height: 600,
        description: Some("Complex geometric mandala with precise line work and sacred geometry patterns."),
    },
    GalleryPiece {
        id: 3,
        src: "/images/pineinktattoos/work/tattoo-realistic-portrait.jpg",
        alt: "Realistic portrait tattoo",
        category: GalleryCategory::Realistic,
        artist: "David Thompson",
        body_part: "Upper Arm",
        date: "2024-01-25",
        likes: 312,
        height: 500,
        description: Some("Photorealistic portrait with incredible detail and lifelike shading."),
    },
    GalleryPiece {
        id: 4,
        src: "/images/pineinktattoos/work/tattoo-watercolor-butterfly.jpg",
        alt: "Watercolor butterfly tattoo",
        category: GalleryCategory::Watercolor,
        artist: "Sarah Kim",
        body_part: "Back",
        date: "2024-02-01",
        likes: 156,
        height: 350,
        description: Some("Vibrant watercolor butterfly with flowing colors and artistic brush strokes."),
    },
    GalleryPiece {
        id: 5,
        src: "/images/pineinktattoos/work/tattoo-blackwork-sleeve.jpg",
        alt: "Blackwork sleeve tattoo",
        category: GalleryCategory::Blackwork,
        artist: "Marcus Johnson",
        body_part: "Full Sleeve",
        date: "2024-02-05",
        likes: 278,
        height: 700,
        description: Some("Bold blackwork sleeve with intricate patterns and solid black elements."),
    },
    GalleryPiece {
        id: 6,
        src: "/images/pineinktattoos/work/tattoo-minimalist-line.jpg",
        alt: "Minimalist line art tattoo",
        category: GalleryCategory::Minimalist,
        artist: "Emma Wilson",
        body_part: "Wrist",
        date: "2024-02-10",
        likes: 98,
        height: 300,
        description: Some("Clean minimalist design with single line art and elegant simplicity."),
    },
    GalleryPiece {
        id: 7,
        src: "/images/pineinktattoos/work/tattoo-dragon-back.jpg",
        alt: "Traditional dragon back piece",
        category: GalleryCategory::Traditional,
        artist: "Maria Rodriguez",
        body_part: "Full Back",
        date: "2024-02-15",
        likes: 425,
        height: 650,
        description: Some("Majestic traditional dragon spanning the full back with vibrant colors."),
    },
    GalleryPiece {
        id: 8,
        src: "/images/pineinktattoos/work/tattoo-flower-thigh.jpg",
        alt: "Realistic flower tattoo on thigh",
        category: GalleryCategory::Realistic,
        artist: "David Thompson",
        body_part: "Thigh",
        date: "2024-02-20",
        likes: 203,
        height: 550,
        description: Some("Realistic floral composition with detailed petals and natural shading."),
    },
];

/// Gallery pieces matching `filter`, in catalog order.
pub fn gallery_pieces(filter: Option<GalleryCategory>) -> Vec<GalleryPiece> {
    GALLERY
        .iter()
        .filter(|piece| filter.map_or(true, |c| piece.category == c))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Mitchell",
        rating: 5,
        text: "Damon is absolutely incredible! His Chinese traditional work is unmatched. My dragon sleeve is a masterpiece - the detail and shading are perfect. The entire experience was professional and comfortable.",
    },
    Testimonial {
        name: "Alex Chen",
        rating: 5,
        text: "Raven's geometric designs are mind-blowing! She perfectly captured my vision for a sacred geometry piece. Her attention to detail and precision is outstanding. Highly recommend!",
    },
    Testimonial {
        name: "Maria Rodriguez",
        rating: 5,
        text: "Bo's realistic portraits are absolutely stunning! He created the most beautiful memorial tattoo of my father. The likeness is incredible and the emotional connection he brings to his work is special.",
    },
    Testimonial {
        name: "Jordan Taylor",
        rating: 5,
        text: "Naomi's watercolor style is pure art! My floral piece looks like a painting on my skin. The colors are vibrant and the flow is perfect. She's truly an artist with a tattoo machine.",
    },
    Testimonial {
        name: "Chris Williams",
        rating: 5,
        text: "Yan's fine line work is exceptional! My minimalist design is clean, precise, and exactly what I wanted. His steady hand and attention to detail make every line perfect.",
    },
    Testimonial {
        name: "Emma Davis",
        rating: 5,
        text: "Damon's Chinese traditional work is incredible! My phoenix piece has such bold, clean lines and perfect shading. The studio atmosphere is welcoming and the whole experience was amazing.",
    },
];

/// About page service descriptions.
pub struct StudioService {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub const STUDIO_SERVICES: &[StudioService] = &[
    StudioService {
        title: "Consultation",
        description: "Free consultation to discuss your tattoo ideas and ensure we create the perfect design for you.",
        details: "In most cases, a consultation is needed before you and your artist proceed with booking an appointment. Be sure to view our artists' portfolio in advance and take some time to find pieces that speak to you.",
    },
    StudioService {
        title: "Aftercare",
        description: "Comprehensive aftercare instructions to ensure your tattoo heals perfectly.",
        details: "Follow the advice given by your artist as to how to care for your tattoo. Don't worry if you forget some of the information, simply contact us for any questions you have related to tattoo aftercare.",
    },
    StudioService {
        title: "Appointment Booking",
        description: "Easy booking process through our website or direct artist contact.",
        details: "You can send us a request through our booking page or contact our artists through their preferred method of contact. Keep in mind, some artist's books may be closed.",
    },
    StudioService {
        title: "Rates",
        description: "Transparent pricing based on design complexity and artist time.",
        details: "Prices are calculated based on the complexity of the design and the amount of time your artist spent. Pricing is individual per artist. Our shop minimum is $100.",
    },
    StudioService {
        title: "Deposits",
        description: "$100 deposit required for all tattoos, applied to final cost.",
        details: "The deposit goes towards your tattoo and is deducted from the final total at check out. With 3 days notice prior to the appointment date, the deposit can be moved to your rescheduled appointment. Deposits are held for a year at most.",
    },
    StudioService {
        title: "Touch-ups",
        description: "Free touch-ups within three months of completing your tattoo.",
        details: "All touch-ups are free within three months after completing the entire piece. Please contact your artist directly to schedule a touch up appointment.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ids_round_trip_through_their_wire_names() {
        for artist in ARTISTS {
            assert_eq!(artist.id.as_str().parse::<ArtistId>().unwrap(), artist.id);
            let json = serde_json::to_string(&artist.id).unwrap();
            assert_eq!(json, format!("\"{}\"", artist.id.as_str()));
        }
        for service in SERVICES {
            let json = serde_json::to_string(&service.id).unwrap();
            assert_eq!(json, format!("\"{}\"", service.id.as_str()));
        }
        assert_eq!(serde_json::to_string(&TimeSlot::TwoPm).unwrap(), "\"2:00 PM\"");
        assert_eq!("touch-up".parse::<ServiceId>().unwrap(), ServiceId::TouchUp);
    }

    #[test]
    fn unknown_ids_are_catalog_errors() {
        assert_eq!(
            "bob".parse::<ArtistId>(),
            Err(CatalogError::UnknownArtist("bob".to_string()))
        );
        assert!("huge".parse::<ServiceId>().is_err());
        assert!("8:00 AM".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn weekday_slots_follow_studio_hours() {
        // 2026-10-14 is a Wednesday.
        let slots = TimeSlot::open_on(date(2026, 10, 14));
        assert_eq!(slots.first(), Some(&TimeSlot::TenAm));
        assert_eq!(slots.last(), Some(&TimeSlot::SevenPm));
        assert!(!TimeSlot::NineAm.is_open_on(date(2026, 10, 14)));
    }

    #[test]
    fn sunday_slots_are_noon_to_five() {
        // 2026-10-18 is a Sunday.
        let slots = TimeSlot::open_on(date(2026, 10, 18));
        assert_eq!(
            slots,
            vec![
                TimeSlot::Noon,
                TimeSlot::OnePm,
                TimeSlot::TwoPm,
                TimeSlot::ThreePm,
                TimeSlot::FourPm,
                TimeSlot::FivePm,
            ]
        );
    }

    #[test]
    fn gallery_filter_parsing() {
        assert_eq!(GalleryCategory::parse_filter(None), Ok(None));
        assert_eq!(GalleryCategory::parse_filter(Some("all")), Ok(None));
        assert_eq!(
            GalleryCategory::parse_filter(Some("realistic")),
            Ok(Some(GalleryCategory::Realistic))
        );
        assert!(GalleryCategory::parse_filter(Some("tribal")).is_err());

        let realistic = gallery_pieces(Some(GalleryCategory::Realistic));
        assert_eq!(realistic.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 8]);
        assert_eq!(gallery_pieces(None).len(), GALLERY.len());
    }

    #[test]
    fn monograms() {
        assert_eq!(monogram("Sarah Martinez"), "SM");
        assert_eq!(DIRECTORY[0].monogram(), "D");
        assert_eq!(monogram(""), "");
    }

    #[test]
    fn directions_point_at_the_studio_address() {
        let query = STUDIO.address_line_1.replace(' ', "+");
        assert!(STUDIO.directions_url.contains(&query));
        assert!(STUDIO.map_embed_url.starts_with("https://www.google.com/maps/embed"));

        let digits: String = STUDIO.phone.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(STUDIO.phone_href, format!("tel:+1{digits}"));
        assert_eq!(PARKING_AND_TRANSIT.len(), 4);
        assert!(PARKING_AND_TRANSIT.iter().any(|line| line.starts_with("TTC subway")));
    }
}
