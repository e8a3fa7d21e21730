// src/sample_library.rs

use crate::catalog::Catalog;
use crate::content_item::ContentItem;

/// The fixed set of titles the application starts with.
pub fn sample_items() -> Vec<ContentItem> {
    vec![
        ContentItem::movie("Avengers", 2012, "fiction"),
        ContentItem::movie("Tenet", 2020, "fiction"),
        ContentItem::movie("Spider-Man: Homecoming", 2017, "fiction"),
        ContentItem::movie("Titanic", 1997, "romance"),
        ContentItem::movie("Beautiful Mind", 2001, "biographical"),
        ContentItem::episode("The Simpsons", 2019, "comedy", 3, 31),
        ContentItem::episode("Rick and Morty", 2013, "sitcom", 5, 1),
        ContentItem::episode("Mr. Robot", 2016, "drama", 10, 2),
        ContentItem::episode("Stranger Things", 2016, "thriller", 4, 1),
        ContentItem::episode("Breaking Bad", 2008, "drama", 7, 1),
    ]
}

/// Fills the catalog with the sample titles.
pub fn fill_library(catalog: &mut Catalog) {
    catalog.add(sample_items());
}
