//! Built-in records served when the backend is unreachable in development

use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use contracts::enums::Category;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static MOCK_ITEMS: Lazy<HashMap<Category, Vec<CollectionItem>>> = Lazy::new(|| {
    HashMap::from([
        (
            Category::Ceramics,
            vec![
                item(
                    1,
                    "Tang sancai camel carrying musicians",
                    "Tang dynasty",
                    "618-907 AD",
                    "A camel with raised head, carrying five musicians on its back, each with a distinct expression. The amber, green and cream glazes play off one another; a witness to Silk Road culture at the height of the Tang.",
                    "H 58cm, L 42cm",
                    "Excavated in Xi'an",
                    "¥ 2,800,000",
                    true,
                    "ceramic_001.jpg",
                    "from-amber-900/50 to-orange-900/50",
                ),
                item(
                    2,
                    "Song Ru ware sky-blue glazed dish",
                    "Song dynasty",
                    "960-1279 AD",
                    "Ru ware heads the five great kilns of the Song. The glaze of this dish is even and pure, with a natural crackle; a fine example of the kiln.",
                    "D 17.5cm",
                    "Passed down through private collections",
                    "¥ 8,800,000",
                    true,
                    "ceramic_002.jpg",
                    "from-sky-900/50 to-cyan-900/50",
                ),
            ],
        ),
        (
            Category::Jades,
            vec![
                item(
                    1,
                    "Shang jade huang with dragon motif",
                    "Shang dynasty",
                    "1600-1046 BC",
                    "A semicircular pendant carved on both faces with coiled, open-mouthed dragons. The stone is warm and the alteration natural; typical of Shang jade work.",
                    "L 12cm, W 3.5cm",
                    "Excavated at Yinxu, Anyang",
                    "¥ 3,800,000",
                    true,
                    "jade_001.jpg",
                    "from-emerald-900/50 to-teal-900/50",
                ),
                item(
                    2,
                    "Han white jade cicada",
                    "Han dynasty",
                    "206 BC-220 AD",
                    "Carved in the 'eight cuts of Han' manner: a few decisive strokes give the cicada its life. Pure white stone and crisp cutting.",
                    "L 6.5cm",
                    "Passed down through private collections",
                    "¥ 680,000",
                    false,
                    "jade_002.jpg",
                    "from-stone-200/40 to-stone-300/40",
                ),
            ],
        ),
        (
            Category::Bronzes,
            vec![
                item(
                    1,
                    "Shang ding with taotie mask",
                    "Late Shang dynasty",
                    "1300-1046 BC",
                    "Upright handles, deep belly and three columnar legs. The belly carries taotie masks over a ground of thunder patterns; finely cast and well preserved.",
                    "H 24cm, mouth D 18cm",
                    "Excavated at Yinxu, Anyang",
                    "¥ 8,800,000",
                    true,
                    "bronze_001.jpg",
                    "from-cyan-900/50 to-blue-900/50",
                ),
                item(
                    2,
                    "Western Zhou Mao Gong ding",
                    "Late Western Zhou",
                    "9th century BC",
                    "Cast inside with an inscription of 499 characters, the longest known on any bronze, recording King Xuan's charge to the Duke of Mao.",
                    "H 53.8cm, mouth D 47cm",
                    "Excavated in Qishan, Shaanxi",
                    "¥ 12,000,000",
                    true,
                    "bronze_002.jpg",
                    "from-blue-900/50 to-indigo-900/50",
                ),
            ],
        ),
        (
            Category::Calligraphies,
            vec![
                item(
                    1,
                    "Emperor Huizong, Auspicious Cranes handscroll",
                    "Northern Song",
                    "1112 AD",
                    "Painted by Emperor Huizong himself: cranes circling above the palace roof among auspicious clouds. A summit of Song academy painting.",
                    "51cm x 138.2cm",
                    "Former Qing imperial collection",
                    "¥ 15,000,000",
                    true,
                    "calligraphy_001.jpg",
                    "from-amber-900/50 to-orange-900/50",
                ),
                item(
                    2,
                    "Mi Fu, Poems Written at Tiaoxi",
                    "Northern Song",
                    "1088 AD",
                    "Thirty-five lines of running script, 394 characters, in Mi Fu's brisk 'brushed' manner.",
                    "30.3cm x 189.5cm",
                    "Former Qing imperial collection",
                    "¥ 8,000,000",
                    false,
                    "calligraphy_002.jpg",
                    "from-stone-200/40 to-stone-300/40",
                ),
            ],
        ),
    ])
});

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    name: &str,
    dynasty: &str,
    year: &str,
    description: &str,
    size: &str,
    provenance: &str,
    price: &str,
    featured: bool,
    image: &str,
    image_gradient: &str,
) -> CollectionItem {
    CollectionItem {
        id,
        name: name.to_string(),
        dynasty: dynasty.to_string(),
        year: year.to_string(),
        description: description.to_string(),
        size: size.to_string(),
        provenance: provenance.to_string(),
        price: price.to_string(),
        featured,
        image: image.to_string(),
        image_gradient: image_gradient.to_string(),
    }
}

pub fn mock_items(category: Category) -> &'static [CollectionItem] {
    MOCK_ITEMS
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Mock records for a raw category slug; unknown slugs have none
pub fn mock_items_by_slug(slug: &str) -> &'static [CollectionItem] {
    Category::from_slug(slug).map(mock_items).unwrap_or_default()
}

/// Find a mock record by the textual id from the URL.
///
/// Only the leading digits count, so `2-han-cicada` looks up id 2.
pub fn find_mock_item(slug: &str, id: &str) -> Option<CollectionItem> {
    let digits: String = id.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    let id: u32 = digits.parse().ok()?;
    mock_items_by_slug(slug).iter().find(|item| item.id == id).cloned()
}
