use crate::tooltip::{TooltipContent, TooltipSource};
use serde::Deserialize;

/// One bilateral treaty row.
///
/// Dates are kept as the display strings of the source sheet. The aliases
/// accept rows keyed by the source sheet's Korean column headers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TreatyRecord {
    /// Country the treaty was concluded with; also the lookup key for its marker.
    #[serde(alias = "체결대상국가")]
    pub counterpart: String,
    #[serde(alias = "분야")]
    pub field: String,
    #[serde(alias = "조약명")]
    pub title: String,
    #[serde(alias = "서명일/각서교환일")]
    pub signed: String,
    #[serde(alias = "발효일")]
    pub effective: String,
}

impl TooltipSource for TreatyRecord {
    fn tooltip_content(&self) -> TooltipContent {
        TooltipContent::new(self.counterpart.trim())
            .row("Field", &self.field)
            .row("Treaty", &self.title)
            .row("Signed / exchanged", &self.signed)
            .row("Entered into force", &self.effective)
    }
}
