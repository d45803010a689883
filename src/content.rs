//! Site content for WIMSTAY.
//!
//! All property content is hard-coded: there is no CMS and no datastore
//! behind the site. The functions here return the canonical content served
//! by the read endpoints, and the front-end renders it as-is.

use serde::Serialize;
use utoipa::ToSchema;

/// Property details shown on the landing page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Property {
    /// Headline title.
    pub title: String,
    /// Short tagline under the title.
    pub tagline: String,
    /// Long-form description paragraph.
    pub description: String,
    /// Amenity list.
    pub amenities: Vec<Amenity>,
}

/// A single amenity entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Amenity {
    /// Short label, e.g. "3 Bedrooms".
    pub label: String,
    /// Icon hint for the front-end.
    pub icon: String,
}

/// A gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GalleryImage {
    /// Image path relative to the static root.
    pub src: String,
    /// Alt text.
    pub alt: String,
}

/// A guest review.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Review {
    /// Reviewer first name.
    pub name: String,
    /// Star rating out of 5.
    pub rating: u8,
    /// Month and year of the stay.
    pub date: String,
    /// Review text.
    pub comment: String,
}

/// The pricing table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PricingTable {
    /// Currency symbol for all rates.
    pub currency: String,
    /// Monthly rate.
    pub monthly_rate: u32,
    /// Weekly rate.
    pub weekly_rate: u32,
    /// Nightly rate.
    pub nightly_rate: u32,
    /// One-off cleaning fee.
    pub cleaning_fee: u32,
    /// Minimum stay in nights.
    pub minimum_stay_nights: u32,
    /// Direct-booking note shown next to the rates.
    pub direct_booking_note: String,
}

/// The property details.
pub fn property() -> Property {
    Property {
        title: "Luxury 3 Bed House in Central Wimbledon".to_string(),
        tagline: "Entire house • Sleeps 7 • Central Wimbledon".to_string(),
        description: "A beautiful 3 bedroom house in the heart of Wimbledon, perfect for \
                      families or groups. This spacious property features a stunning \
                      kitchen/diner, separate living room, and a private garden. Just a \
                      7-minute walk to Wimbledon station with direct access to central \
                      London, and close to the vibrant Wimbledon Village and Common. The \
                      house comfortably sleeps 7 people with a king-size bed, a double bed, \
                      two single beds, and a sofa bed."
            .to_string(),
        amenities: vec![
            amenity("3 Bedrooms", "bed"),
            amenity("2 Bathrooms", "bath"),
            amenity("Fast Wifi", "wifi"),
            amenity("Street Parking", "car"),
            amenity("Modern Kitchen", "kitchen"),
            amenity("Private Garden", "garden"),
            amenity("Self Check-in", "key"),
            amenity("Family Friendly", "family"),
        ],
    }
}

fn amenity(label: &str, icon: &str) -> Amenity {
    Amenity {
        label: label.to_string(),
        icon: icon.to_string(),
    }
}

/// The gallery images. The first entry is the default main image.
pub fn gallery() -> Vec<GalleryImage> {
    vec![
        image(
            "/images/rooms/living-room.JPG",
            "Bright and spacious living room with comfortable seating",
        ),
        image("/images/rooms/kitchen.jpeg", "Modern fully equipped kitchen"),
        image(
            "/images/rooms/master-bedroom.jpeg",
            "Master bedroom with king-size bed",
        ),
        image(
            "/images/rooms/second-bedroom.jpeg",
            "Second bedroom with double bed",
        ),
        image(
            "/images/rooms/third-bedroom.jpeg",
            "Third bedroom with twin beds",
        ),
        image("/images/rooms/bathroom.jpeg", "Modern bathroom with shower"),
    ]
}

fn image(src: &str, alt: &str) -> GalleryImage {
    GalleryImage {
        src: src.to_string(),
        alt: alt.to_string(),
    }
}

/// The guest reviews.
pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            name: "Miriam".to_string(),
            rating: 5,
            date: "January 2024".to_string(),
            comment: "Great place, clean, minimalistic and a short distance to the centre \
                      of Wimbledon and train station. Hosts were very responsive. Would \
                      recommend it any day."
                .to_string(),
        },
        Review {
            name: "David".to_string(),
            rating: 5,
            date: "April 2024".to_string(),
            comment: "Great place.".to_string(),
        },
    ]
}

/// The pricing table.
pub fn pricing() -> PricingTable {
    PricingTable {
        currency: "£".to_string(),
        monthly_rate: 6000,
        weekly_rate: 1650,
        nightly_rate: 250,
        cleaning_fee: 150,
        minimum_stay_nights: 3,
        direct_booking_note: "Save up to 20% by booking direct - these are our best direct \
                              rates, no platform fees or hidden charges."
            .to_string(),
    }
}
