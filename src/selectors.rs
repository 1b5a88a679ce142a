//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for the first level-1 heading.
pub static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("valid h1 selector"));

/// Selector for `<title>` tags.
pub static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("valid title selector"));

/// Selector for the meta description tag.
pub static META_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("valid meta description selector")
});

/// Selector for ordered and unordered lists.
pub static LIST_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("ul, ol").expect("valid list selector"));

/// Selector for list items.
pub static LIST_ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li").expect("valid list item selector"));

/// Selector for table rows.
pub static TR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("valid tr selector"));

/// Selector for row label cells.
pub static TH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("valid th selector"));

/// Selector for row value cells.
pub static TD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid td selector"));

/// Amazon product title.
pub static AMAZON_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#productTitle").expect("valid amazon title selector"));

/// Amazon price (visually hidden full-price text).
pub static AMAZON_PRICE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".a-price .a-offscreen").expect("valid amazon price selector"));

/// Amazon specification-table rows (tech-spec and detail-bullet variants).
pub static AMAZON_SPEC_ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "#productDetails_techSpec_section_1 tr, #productDetails_detailBullets_sections1 tr",
    )
    .expect("valid amazon spec row selector")
});

/// Flipkart product title.
pub static FLIPKART_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.B_NuCI").expect("valid flipkart title selector"));

/// Flipkart price.
pub static FLIPKART_PRICE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div._30jeq3._16Jk6d").expect("valid flipkart price selector"));

/// Flipkart specification sections (each holds a table of two-cell rows).
pub static FLIPKART_SPEC_SECTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div._1UhVsV > div").expect("valid flipkart spec selector"));

/// Ordered price-bearing selectors for the generic path; first non-empty
/// match wins.
pub const PRICE_SELECTORS: &[&str] = &[
    ".price",
    "#price",
    ".product-price",
    ".price-tag",
    "[itemprop=\"price\"]",
    ".a-price .a-offscreen",
    ".price_color",
];

/// Ordered description-bearing selectors for the generic path.
pub const DESC_SELECTORS: &[&str] = &[
    "#description",
    ".description",
    ".product-description",
    "[itemprop=\"description\"]",
    "#productDescription",
    "#feature-bullets",
];
