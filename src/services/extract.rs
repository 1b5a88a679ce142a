use crate::engine::Extractor;
use crate::selectors::*;
use crate::{error::*, types::*};
use scraper::{ElementRef, Html, Selector};

/// Pick the extraction strategy for a routed platform.
pub fn extractor_for(platform: Platform) -> &'static dyn Extractor {
    match platform {
        Platform::Amazon => &AmazonExtractor,
        Platform::Flipkart => &FlipkartExtractor,
        Platform::Generic => &GenericExtractor,
    }
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn first_text(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel)
        .next()
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty())
}

/// First non-empty match across an ordered selector list.
fn first_text_of(doc: &Html, selectors: &[&str]) -> Option<String> {
    for s in selectors {
        if let Ok(sel) = Selector::parse(s) {
            if let Some(el) = doc.select(&sel).next() {
                let txt = element_text(&el);
                if !txt.is_empty() {
                    return Some(txt);
                }
            }
        }
    }
    None
}

/// Amazon product pages (rendered DOM).
///
/// `Product` and `Price` are always present (`N/A` when the element is
/// missing); spec rows need both a `th` label and a `td` value, anything
/// else is skipped.
pub struct AmazonExtractor;

impl Extractor for AmazonExtractor {
    fn name(&self) -> &'static str {
        "amazon"
    }

    fn extract(&self, _url: &str, html: &str) -> Result<FeatureMap> {
        let doc = Html::parse_document(html);
        let mut features = FeatureMap::new();

        features.set(
            "Product",
            first_text(&doc, &AMAZON_TITLE_SELECTOR).unwrap_or_else(|| "N/A".into()),
        );
        features.set(
            "Price",
            first_text(&doc, &AMAZON_PRICE_SELECTOR).unwrap_or_else(|| "N/A".into()),
        );

        for row in doc.select(&AMAZON_SPEC_ROW_SELECTOR) {
            let label = row.select(&TH_SELECTOR).next();
            let value = row.select(&TD_SELECTOR).next();
            if let (Some(label), Some(value)) = (label, value) {
                features.insert_raw(&element_text(&label), element_text(&value));
            }
        }

        Ok(features)
    }
}

/// Flipkart product pages (rendered DOM). Spec rows are two-cell `td`
/// pairs inside repeated section divs; rows with any other cell count
/// are ignored.
pub struct FlipkartExtractor;

impl Extractor for FlipkartExtractor {
    fn name(&self) -> &'static str {
        "flipkart"
    }

    fn extract(&self, _url: &str, html: &str) -> Result<FeatureMap> {
        let doc = Html::parse_document(html);
        let mut features = FeatureMap::new();

        features.set(
            "Product",
            first_text(&doc, &FLIPKART_TITLE_SELECTOR).unwrap_or_else(|| "N/A".into()),
        );
        features.set(
            "Price",
            first_text(&doc, &FLIPKART_PRICE_SELECTOR).unwrap_or_else(|| "N/A".into()),
        );

        for section in doc.select(&FLIPKART_SPEC_SECTION_SELECTOR) {
            for row in section.select(&TR_SELECTOR) {
                let cells: Vec<String> =
                    row.select(&TD_SELECTOR).map(|c| element_text(&c)).collect();
                if let [label, value] = cells.as_slice() {
                    features.insert_raw(label, value.clone());
                }
            }
        }

        Ok(features)
    }
}

/// Best-effort extraction for arbitrary sites, as an ordered decision
/// cascade. Each later stage runs only when the earlier ones produced
/// insufficient signal, so a successfully fetched page never yields an
/// empty map.
pub struct GenericExtractor;

impl Extractor for GenericExtractor {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn extract(&self, url: &str, html: &str) -> Result<FeatureMap> {
        let doc = Html::parse_document(html);
        let mut features = FeatureMap::new();

        if let Some(title) = first_text(&doc, &H1_SELECTOR) {
            features.set("Product", title);
        }

        if let Some(price) = first_text_of(&doc, PRICE_SELECTORS) {
            features.set("Price", price);
        }

        let description = first_text_of(&doc, DESC_SELECTORS)
            .or_else(|| meta_description(&doc))
            .unwrap_or_else(|| "No description found".to_string());
        features.set("Description", description);

        // Essentially nothing found: harvest the first few feature lists.
        if features.len() <= 1 {
            for (i, list) in doc.select(&LIST_SELECTOR).take(3).enumerate() {
                let items: Vec<String> = list
                    .select(&LIST_ITEM_SELECTOR)
                    .take(5)
                    .map(|li| element_text(&li))
                    .filter(|t| !t.is_empty())
                    .collect();
                if !items.is_empty() {
                    features.set(format!("Feature List {}", i + 1), items.join(", "));
                }
            }
        }

        // Final degrade stage. Unreachable while Description is always
        // set above, but it keeps the never-empty guarantee local.
        if features.is_empty() {
            features.set(
                "Title",
                first_text(&doc, &TITLE_SELECTOR).unwrap_or_else(|| "No title found".into()),
            );
            features.set("URL", url);
            features.set("Content Length", format!("{} bytes", html.len()));
        }

        Ok(features)
    }
}

fn meta_description(doc: &Html) -> Option<String> {
    let el = doc.select(&META_DESC_SELECTOR).next()?;
    let content = el.value().attr("content")?;
    let truncated: String = content.chars().take(200).collect();
    Some(truncated + "...")
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMAZON_FIXTURE: &str = r#"<html><body>
        <span id="productTitle"> Acme Phone 5G (128 GB) </span>
        <div class="a-price"><span class="a-offscreen">$349.99</span></div>
        <table id="productDetails_techSpec_section_1">
          <tr><th>RAM</th><td>8 GB</td></tr>
          <tr><th>Internal Storage</th><td>128 GB</td></tr>
          <tr><th>Battery Capacity</th><td>5000 mAh</td></tr>
          <tr><th>Orphan label</th></tr>
        </table>
    </body></html>"#;

    #[test]
    fn amazon_normalizes_spec_row_labels() {
        let features = AmazonExtractor
            .extract("https://www.amazon.com/dp/B0X", AMAZON_FIXTURE)
            .unwrap();
        assert_eq!(features.get("Product"), Some("Acme Phone 5G (128 GB)"));
        assert_eq!(features.get("Price"), Some("$349.99"));
        // Raw labels are gone; only normalized keys remain.
        assert_eq!(features.get("RAM"), Some("8 GB"));
        assert_eq!(features.get("Storage"), Some("128 GB"));
        assert_eq!(features.get("Battery"), Some("5000 mAh"));
        assert_eq!(features.get("Internal Storage"), None);
        // Row without a value cell is skipped.
        assert_eq!(features.get("Orphan Label"), None);
    }

    #[test]
    fn amazon_missing_title_and_price_become_na() {
        let features = AmazonExtractor
            .extract("https://www.amazon.com/dp/B0X", "<html><body></body></html>")
            .unwrap();
        assert_eq!(features.get("Product"), Some("N/A"));
        assert_eq!(features.get("Price"), Some("N/A"));
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn flipkart_keeps_only_two_cell_rows() {
        let html = r#"<html><body>
            <span class="B_NuCI">Acme Phone 5G</span>
            <div class="_30jeq3 _16Jk6d">₹24,999</div>
            <div class="_1UhVsV">
              <div><table>
                <tr><td>Display</td><td>6.5 inch FHD+</td></tr>
                <tr><td>one cell only</td></tr>
                <tr><td>a</td><td>b</td><td>c</td></tr>
              </table></div>
            </div>
        </body></html>"#;
        let features = FlipkartExtractor
            .extract("https://www.flipkart.com/p/itm1", html)
            .unwrap();
        assert_eq!(features.get("Product"), Some("Acme Phone 5G"));
        assert_eq!(features.get("Price"), Some("₹24,999"));
        assert_eq!(features.get("Display"), Some("6.5 inch FHD+"));
        // One-cell and three-cell rows contribute nothing.
        assert_eq!(features.len(), 3);
    }

    #[test]
    fn generic_takes_h1_price_and_description() {
        let html = r#"<html><body>
            <h1>Widget</h1>
            <span class="price">$9.99</span>
            <div class="description">A fine widget.</div>
        </body></html>"#;
        let features = GenericExtractor
            .extract("https://shop.example.com/w", html)
            .unwrap();
        assert_eq!(features.get("Product"), Some("Widget"));
        assert_eq!(features.get("Price"), Some("$9.99"));
        assert_eq!(features.get("Description"), Some("A fine widget."));
    }

    #[test]
    fn generic_meta_description_is_truncated_with_ellipsis() {
        let long = "x".repeat(300);
        let html = format!(
            r#"<html><head><meta name="description" content="{long}"></head>
               <body><h1>Widget</h1></body></html>"#
        );
        let features = GenericExtractor
            .extract("https://shop.example.com/w", &html)
            .unwrap();
        let desc = features.get("Description").unwrap();
        assert_eq!(desc.chars().count(), 203);
        assert!(desc.ends_with("..."));
    }

    #[test]
    fn generic_without_description_sources_reports_none_found() {
        let html = "<html><body><h1>Widget</h1><p>hello</p></body></html>";
        let features = GenericExtractor
            .extract("https://shop.example.com/w", html)
            .unwrap();
        assert_eq!(features.get("Description"), Some("No description found"));
    }

    #[test]
    fn generic_sparse_page_harvests_feature_lists() {
        // No h1, no price: only Description lands, so lists kick in.
        let html = r#"<html><body>
            <ul><li>Fast</li><li>Light</li><li>Cheap</li><li>Red</li><li>Loud</li><li>Sixth</li></ul>
            <ol><li>Step one</li><li>Step two</li></ol>
        </body></html>"#;
        let features = GenericExtractor
            .extract("https://shop.example.com/w", html)
            .unwrap();
        assert_eq!(
            features.get("Feature List 1"),
            Some("Fast, Light, Cheap, Red, Loud")
        );
        assert_eq!(features.get("Feature List 2"), Some("Step one, Step two"));
        assert_eq!(features.get("Feature List 3"), None);
    }

    #[test]
    fn generic_rich_page_skips_feature_lists() {
        let html = r#"<html><body>
            <h1>Widget</h1>
            <ul><li>ignored</li></ul>
        </body></html>"#;
        let features = GenericExtractor
            .extract("https://shop.example.com/w", html)
            .unwrap();
        assert_eq!(features.get("Feature List 1"), None);
    }

    #[test]
    fn generic_never_returns_an_empty_map() {
        for html in ["", "<html></html>", "<p>hi</p>", "plain text"] {
            let features = GenericExtractor
                .extract("https://shop.example.com/w", html)
                .unwrap();
            assert!(features.len() >= 1, "empty map for {html:?}");
        }
    }
}
