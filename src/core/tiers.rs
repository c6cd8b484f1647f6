// tierpix/src/core/tiers.rs
use super::{SizeSpec, Tier};

pub fn default_tiers() -> Vec<Tier> {
    vec![
        Tier::new(
            "large",
            vec!["001.png", "002.png", "003.png", "004.png"],
            vec![
                SizeSpec::new("small", 640, 80),
                SizeSpec::new("medium", 1024, 80),
                SizeSpec::new("large", 1920, 85),
                SizeSpec::new("thumbnail", 320, 75),
            ],
        ),
        Tier::new(
            "product",
            vec!["1.png", "2.png", "3.png", "4.png", "5.png", "6.png"],
            vec![
                SizeSpec::new("thumbnail", 200, 75),
                SizeSpec::new("small", 400, 80),
                SizeSpec::new("medium", 800, 82),
            ],
        ),
        Tier::new(
            "review",
            vec!["review-1.jpg", "review-2.jpg", "review-3.jpg"],
            vec![
                SizeSpec::new("thumbnail", 150, 70),
                SizeSpec::new("small", 480, 80),
            ],
        ),
    ]
}
