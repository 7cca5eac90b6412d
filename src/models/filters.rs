use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SearchCardsParams — Filters accepted by the card search
// ---------------------------------------------------------------------------

/// Parameters for the card search.
///
/// Text filters that are `None` or empty are skipped. `page` and `page_size`
/// default to 0, which leaves pagination to the remote API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCardsParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub set: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default, rename = "type")]
    pub card_type: Option<String>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}

impl SearchCardsParams {
    /// Filter values that count as specified, in clause order.
    pub(crate) fn specified(&self) -> FilterEcho {
        FilterEcho {
            name: non_empty(&self.name),
            set: non_empty(&self.set),
            rarity: non_empty(&self.rarity),
            card_type: non_empty(&self.card_type),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterEcho — Last-applied filter values kept for redisplay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEcho {
    pub name: Option<String>,
    pub set: Option<String>,
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
}

impl FilterEcho {
    /// Overwrite the fields that `other` specifies; keep the rest.
    pub(crate) fn apply(&mut self, other: FilterEcho) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.set.is_some() {
            self.set = other.set;
        }
        if other.rarity.is_some() {
            self.rarity = other.rarity;
        }
        if other.card_type.is_some() {
            self.card_type = other.card_type;
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}
