//! Brewing notes shown on request, separate from any calculation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InfoTopic {
    Water,
    Honey,
}

impl InfoTopic {
    pub fn title(&self) -> &'static str {
        match self {
            InfoTopic::Water => "Water quality in mead making",
            InfoTopic::Honey => "Main honey varieties for mead",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            InfoTopic::Water => WATER_INFO,
            InfoTopic::Honey => HONEY_INFO,
        }
    }

    /// Title, underline and body, ready to print
    pub fn render(&self) -> String {
        let title = self.title();
        format!("{}\n{}\n\n{}", title, "=".repeat(title.len()), self.text())
    }
}

const WATER_INFO: &str = "\
Water quality decides whether fermentation succeeds and how the mead tastes. \
It affects yeast activity, mouthfeel and how much aroma spices or fruit give off.

Key points:
 - Chlorine/chloramine: must be removed. Both cause unpleasant 'medicinal' \
off-flavors. Use Campden tablets or a carbon filter.
 - Mineral content (hardness): calcium and magnesium are yeast nutrients. Fully \
distilled water may need mineral additions.
 - pH: yeast prefers a slightly acidic environment (pH 3.0-4.0). High alkalinity \
in tap water can stress the yeast.
";

const HONEY_INFO: &str = "\
The floral source of the honey sets the colour, aroma and final flavor of the mead.

Common varieties:
 - Clover: light, delicate flavor. Excellent for traditional meads. The most \
common and easiest to find.
 - Orange blossom: citrusy, floral aroma. Valued in lighter meads and melomels \
(fruit meads).
 - Wildflower: highly variable, rich and complex. Suits spiced meads (metheglins).
 - Buckwheat: very dark, rich and strong, often molasses-like. Needs long aging.
";
