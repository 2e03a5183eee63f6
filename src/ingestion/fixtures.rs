//! Static gallery fixture used when no explorer contract is configured.

use crate::search::types::Tattoo;
use crate::tags::{Tag, TagCategory};

struct FixtureTattoo {
    id: &'static str,
    title: &'static str,
    owner: &'static str,
    owner_address: &'static str,
    story: &'static str,
    minted_date: &'static str,
    tags: &'static [(&'static str, TagCategory)],
    counts: (u64, u64, u64),
}

const FIXTURES: &[FixtureTattoo] = &[
    FixtureTattoo {
        id: "1",
        title: "Phoenix Rising",
        owner: "Alex Chen",
        owner_address: "0x1234...5678",
        story: "This phoenix represents my journey of overcoming personal struggles and rising \
                from the ashes stronger than before. The detailed linework symbolizes the \
                complexity of transformation, while the upward motion represents constant growth.",
        minted_date: "2024-01-15",
        tags: &[
            ("Realism", TagCategory::Style),
            ("Animal", TagCategory::Theme),
            ("Back", TagCategory::BodyPart),
            ("Colorful", TagCategory::Color),
            ("Large", TagCategory::Size),
            ("Resilience", TagCategory::Meaning),
            ("Strength", TagCategory::Meaning),
        ],
        counts: (24, 1520, 87),
    },
    FixtureTattoo {
        id: "2",
        title: "Sacred Geometry",
        owner: "Maya Patel",
        owner_address: "0xabcd...efgh",
        story: "A mandala representing the interconnectedness of all things and the pursuit of \
                balance in life. The circles represent unity and wholeness, the triangles \
                symbolize strength and progression.",
        minted_date: "2024-02-20",
        tags: &[
            ("Geometric", TagCategory::Style),
            ("Spiritual", TagCategory::Theme),
            ("Forearm", TagCategory::BodyPart),
            ("Blackwork", TagCategory::Color),
            ("Medium", TagCategory::Size),
            ("Balance", TagCategory::Meaning),
        ],
        counts: (18, 980, 45),
    },
    FixtureTattoo {
        id: "3",
        title: "Dragon Spirit",
        owner: "Kenji Tanaka",
        owner_address: "0x9876...4321",
        story: "Traditional Japanese dragon sleeve honoring my grandfather's heritage and wisdom \
                passed down through generations. Each scale was carefully placed to flow with \
                the natural contours of my arm.",
        minted_date: "2024-03-10",
        tags: &[
            ("Japanese", TagCategory::Style),
            ("Mythology", TagCategory::Theme),
            ("Arm", TagCategory::BodyPart),
            ("Colorful", TagCategory::Color),
            ("Full Sleeve", TagCategory::Size),
            ("Family", TagCategory::Meaning),
            ("Strength", TagCategory::Meaning),
        ],
        counts: (42, 2310, 133),
    },
    FixtureTattoo {
        id: "4",
        title: "Mountain Waves",
        owner: "Jordan Rivers",
        owner_address: "0xfedc...ba98",
        story: "Minimalist design combining my love for mountains and the ocean, the duality of \
                growing up between the coast and the highlands. Mountains stand for stability, \
                the waves for adaptability.",
        minted_date: "2024-01-30",
        tags: &[
            ("Minimalist", TagCategory::Style),
            ("Nature", TagCategory::Theme),
            ("Forearm", TagCategory::BodyPart),
            ("Black & Grey", TagCategory::Color),
            ("Small", TagCategory::Size),
            ("Journey", TagCategory::Meaning),
        ],
        counts: (9, 640, 21),
    },
];

/// The static gallery, in display order.
pub fn mock_tattoos() -> Vec<Tattoo> {
    FIXTURES.iter().map(to_tattoo).collect()
}

fn to_tattoo(fixture: &FixtureTattoo) -> Tattoo {
    let tags = fixture
        .tags
        .iter()
        .enumerate()
        .map(|(index, (label, category))| {
            Tag::new(format!("{}-{}", fixture.id, index + 1), *label, *category)
        })
        .collect();
    let (tip_count, view_count, share_count) = fixture.counts;

    Tattoo {
        id: fixture.id.to_string(),
        token_id: fixture.id.parse().ok(),
        contract_address: None,
        title: fixture.title.to_string(),
        description: String::new(),
        owner: fixture.owner.to_string(),
        owner_address: fixture.owner_address.to_string(),
        image_url: format!("/assets/tattoo-{}.jpg", fixture.id),
        story: fixture.story.to_string(),
        tags,
        artist: None,
        studio: None,
        location: None,
        is_soul_bound: true,
        minted_date: fixture.minted_date.to_string(),
        tip_count,
        view_count,
        share_count,
    }
}
