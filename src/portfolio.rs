pub const ALL_FILTER: &str = "all";
/// Delay before hidden items have their display toggled.
pub const HIDE_DELAY_MS: u32 = 150;
/// Delay after the display toggle before opacity is restored.
pub const RESTORE_DELAY_MS: u32 = 30;

pub fn is_visible(filter: &str, category: &str) -> bool {
    filter == ALL_FILTER || filter == category
}

/// Indices of the items shown under `filter`.
pub fn visible_indices<'a, I>(filter: &str, categories: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    categories
        .into_iter()
        .enumerate()
        .filter(|(_, category)| is_visible(filter, category))
        .map(|(index, _)| index)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    Hidden,
    Shown,
}

/// Grid state across a staged filter change: fade out, swap display, fade in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterView {
    /// Filter whose button is marked active.
    pub selected: String,
    /// Filter currently deciding each item's `display`.
    pub displayed: String,
    pub phase: FadePhase,
}

impl Default for FilterView {
    fn default() -> Self {
        Self {
            selected: ALL_FILTER.to_string(),
            displayed: ALL_FILTER.to_string(),
            phase: FadePhase::Shown,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterAction {
    /// Button click: mark active and fade everything out.
    Select(String),
    /// First delay elapsed: display follows the selected filter.
    Swap,
    /// Second delay elapsed: opacity and interaction come back.
    Restore,
}

impl FilterView {
    pub fn apply(&self, action: FilterAction) -> Self {
        match action {
            FilterAction::Select(filter) => Self {
                selected: filter,
                displayed: self.displayed.clone(),
                phase: FadePhase::Hidden,
            },
            FilterAction::Swap => Self {
                displayed: self.selected.clone(),
                ..self.clone()
            },
            FilterAction::Restore => Self {
                phase: FadePhase::Shown,
                ..self.clone()
            },
        }
    }

    pub fn item_style(&self, category: &str) -> String {
        let mut style = String::new();
        if !is_visible(&self.displayed, category) {
            style.push_str("display: none;");
        }
        if self.phase == FadePhase::Hidden {
            style.push_str("opacity: 0; pointer-events: none;");
        }
        style
    }
}
