use serde::{Deserialize, Serialize};

/// CSS selector set for one source site. The parser is generic over this
/// struct so per-page copies of extraction logic are not needed; pointing
/// the pipeline at another site means supplying another `SelectorSet`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorSet {
    /// One listing item on the listing page.
    pub listing_item: String,
    /// Title text inside a listing item.
    pub title: String,
    /// Anchor carrying the detail-page href inside a listing item.
    pub link: String,
    /// Thumbnail images inside a listing item. The last match wins: the
    /// site's lazy-loading convention puts the real image in the final
    /// `<img>` tag after the placeholder.
    pub thumbnail: String,
    /// Optional short description already present on the listing page.
    pub inline_summary: String,
    /// Supplementary description node on the detail page.
    pub detail_summary: String,
}

impl SelectorSet {
    /// Selector set for the supported recipe site's listing and detail
    /// markup.
    pub fn default_site() -> Self {
        Self {
            listing_item: "li.common_sp_list_li".to_string(),
            title: "div.common_sp_caption_tit".to_string(),
            link: "a.common_sp_link".to_string(),
            thumbnail: "div.common_sp_thumb img".to_string(),
            inline_summary: "div.common_sp_caption_desc".to_string(),
            detail_summary: "div.view2_summary_in".to_string(),
        }
    }
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self::default_site()
    }
}
