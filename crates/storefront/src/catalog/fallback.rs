//! Built-in catalog used when the configured catalog cannot be loaded.

use herbal_store_core::{Category, Price, Product, ProductId, Rating};
use rust_decimal::Decimal;

use super::artwork::placeholder_image;

struct Seed {
    id: u32,
    name: &'static str,
    cents: u32,
    category: Category,
    rating_tenths: i64,
    popularity: i64,
    label: &'static str,
    color: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    benefits: &'static [&'static str],
    usage: &'static str,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: 1,
        name: "Organic Turmeric Capsules",
        cents: 2499,
        category: Category::Supplement,
        rating_tenths: 48,
        popularity: 95,
        label: "Turmeric",
        color: "#FF8C00",
        description: "Premium organic turmeric capsules with curcumin for natural anti-inflammatory support.",
        ingredients: &[
            "Organic Turmeric Root",
            "Curcumin Extract",
            "Black Pepper Extract",
        ],
        benefits: &[
            "Reduces inflammation",
            "Supports joint health",
            "Powerful antioxidant",
            "Boosts immune system",
        ],
        usage: "Take 1-2 capsules daily with meals or as directed by your healthcare provider.",
    },
    Seed {
        id: 2,
        name: "Chamomile Dream Tea",
        cents: 1850,
        category: Category::Tea,
        rating_tenths: 49,
        popularity: 88,
        label: "Chamomile",
        color: "#F0E68C",
        description: "Soothing organic chamomile tea blend for relaxation and peaceful sleep.",
        ingredients: &[
            "Organic Chamomile Flowers",
            "Lavender",
            "Lemon Balm",
            "Passionflower",
        ],
        benefits: &[
            "Promotes relaxation",
            "Improves sleep quality",
            "Reduces anxiety",
            "Aids digestion",
        ],
        usage: "Steep 1 tea bag in hot water for 5-7 minutes. Drink 30 minutes before bedtime.",
    },
    Seed {
        id: 3,
        name: "Ginseng Energy Powder",
        cents: 3275,
        category: Category::Powder,
        rating_tenths: 47,
        popularity: 82,
        label: "Ginseng",
        color: "#CD853F",
        description: "Pure Korean red ginseng powder for natural energy and mental clarity.",
        ingredients: &["Korean Red Ginseng Root", "Panax Ginseng Extract"],
        benefits: &[
            "Boosts energy naturally",
            "Enhances mental focus",
            "Supports immune function",
            "Reduces fatigue",
        ],
        usage: "Mix 1/2 teaspoon with water, juice, or smoothie. Take once daily in the morning.",
    },
    Seed {
        id: 4,
        name: "Lavender Essential Oil",
        cents: 2199,
        category: Category::Oil,
        rating_tenths: 46,
        popularity: 76,
        label: "Lavender",
        color: "#9370DB",
        description: "100% pure therapeutic grade lavender essential oil for aromatherapy and wellness.",
        ingredients: &["Pure Lavandula Angustifolia Oil"],
        benefits: &[
            "Promotes relaxation",
            "Reduces stress",
            "Improves sleep",
            "Natural aromatherapy",
        ],
        usage: "Add 2-3 drops to diffuser or dilute with carrier oil for topical use. For sleep, apply to pillow.",
    },
    Seed {
        id: 5,
        name: "Echinacea Immune Support",
        cents: 2640,
        category: Category::Supplement,
        rating_tenths: 45,
        popularity: 73,
        label: "Echinacea",
        color: "#FF69B4",
        description: "Potent echinacea extract capsules to naturally boost immune system function.",
        ingredients: &[
            "Echinacea Purpurea Extract",
            "Echinacea Angustifolia",
            "Vitamin C",
        ],
        benefits: &[
            "Strengthens immune system",
            "Reduces cold duration",
            "Antioxidant protection",
            "Supports respiratory health",
        ],
        usage: "Take 1 capsule twice daily with food. Increase to 3 times daily during illness.",
    },
    Seed {
        id: 6,
        name: "Green Tea Detox Blend",
        cents: 1980,
        category: Category::Tea,
        rating_tenths: 44,
        popularity: 69,
        label: "Green Tea",
        color: "#90EE90",
        description: "Organic green tea blend with detoxifying herbs for natural cleansing and metabolism support.",
        ingredients: &[
            "Organic Green Tea",
            "Dandelion Root",
            "Milk Thistle",
            "Ginger Root",
        ],
        benefits: &[
            "Supports detoxification",
            "Boosts metabolism",
            "Rich in antioxidants",
            "Aids digestion",
        ],
        usage: "Steep 1 tea bag in hot water for 3-5 minutes. Drink 2-3 cups daily between meals.",
    },
];

pub(super) fn products() -> Vec<Product> {
    SEEDS.iter().map(Seed::to_product).collect()
}

impl Seed {
    fn to_product(&self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            price: Price::from_cents(self.cents),
            category: self.category,
            // Seed ratings are all within 0.0..=5.0.
            rating: Rating::new(Decimal::new(self.rating_tenths, 1)).unwrap_or_default(),
            popularity: self.popularity,
            image: placeholder_image(self.label, self.color),
            description: self.description.to_string(),
            ingredients: to_strings(self.ingredients),
            benefits: to_strings(self.benefits),
            usage: self.usage.to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
