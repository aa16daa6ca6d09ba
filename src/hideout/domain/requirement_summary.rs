use indexmap::IndexMap;

/// One line of the item summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTotal<'a> {
    pub item: &'a str,
    pub amount: u64,
}

/// Aggregated requirements of a set of stations.
///
/// Items are consumed, so amounts add up. Skills and trader levels are
/// thresholds, so only the highest level per name is kept. All three maps
/// remember the order in which names were first encountered.
///
/// Per-entry amounts are `u32` while totals are `u64`, so adding up any
/// realistic number of entries cannot overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSummary {
    items: IndexMap<String, u64>,
    skills: IndexMap<String, u32>,
    traders: IndexMap<String, u32>,
}

impl RequirementSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: &str, amount: u32) {
        self.add_item_total(item, u64::from(amount));
    }

    fn add_item_total(&mut self, item: &str, amount: u64) {
        match self.items.get_mut(item) {
            Some(total) => *total += amount,
            None => {
                self.items.insert(item.to_string(), amount);
            }
        }
    }

    pub fn require_skill(&mut self, name: &str, lvl: u32) {
        raise_level(&mut self.skills, name, lvl);
    }

    pub fn require_trader(&mut self, name: &str, lvl: u32) {
        raise_level(&mut self.traders, name, lvl);
    }

    /// Folds `other` into `self`: item amounts add, levels take the maximum.
    pub fn merge(&mut self, other: &RequirementSummary) {
        for (item, amount) in &other.items {
            self.add_item_total(item, *amount);
        }
        for (name, lvl) in &other.skills {
            raise_level(&mut self.skills, name, *lvl);
        }
        for (name, lvl) in &other.traders {
            raise_level(&mut self.traders, name, *lvl);
        }
    }

    pub fn item_amount(&self, item: &str) -> Option<u64> {
        self.items.get(item).copied()
    }

    pub fn skill_level(&self, name: &str) -> Option<u32> {
        self.skills.get(name).copied()
    }

    pub fn trader_level(&self, name: &str) -> Option<u32> {
        self.traders.get(name).copied()
    }

    /// Items in encounter order
    pub fn items(&self) -> impl Iterator<Item = ItemTotal<'_>> {
        self.items.iter().map(|(item, amount)| ItemTotal {
            item: item.as_str(),
            amount: *amount,
        })
    }

    /// Items for display: largest amount first, ties keep encounter order
    pub fn items_by_amount(&self) -> Vec<ItemTotal<'_>> {
        let mut items: Vec<ItemTotal<'_>> = self.items().collect();
        // sort_by is stable
        items.sort_by(|a, b| b.amount.cmp(&a.amount));
        items
    }

    /// Skills in encounter order
    pub fn skills(&self) -> impl Iterator<Item = (&str, u32)> {
        self.skills.iter().map(|(name, lvl)| (name.as_str(), *lvl))
    }

    /// Traders in encounter order
    pub fn traders(&self) -> impl Iterator<Item = (&str, u32)> {
        self.traders.iter().map(|(name, lvl)| (name.as_str(), *lvl))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.skills.is_empty() && self.traders.is_empty()
    }
}

/// Keeps the first-seen position of `name` while raising its level.
fn raise_level(levels: &mut IndexMap<String, u32>, name: &str, lvl: u32) {
    match levels.get_mut(name) {
        Some(current) => *current = (*current).max(lvl),
        None => {
            levels.insert(name.to_string(), lvl);
        }
    }
}
