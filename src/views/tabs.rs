use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab index {index} out of range ({count} tabs)")]
    OutOfRange { index: usize, count: usize },
}

/// Anything presenting a row of tabs with one selected
pub trait SelectableTabs {
    fn selected(&self) -> usize;

    fn tab_count(&self) -> usize;

    fn select(&mut self, index: usize) -> Result<(), TabError>;
}

/// Panels of the property details page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Description,
    FloorPlan,
    Map,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Description, DetailTab::FloorPlan, DetailTab::Map];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Description => "Description",
            DetailTab::FloorPlan => "Floor Plan",
            DetailTab::Map => "Map",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Selected-tab state; starts on the first tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    selected: usize,
}

impl TabState {
    pub fn active(&self) -> DetailTab {
        DetailTab::ALL[self.selected]
    }
}

impl SelectableTabs for TabState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn tab_count(&self) -> usize {
        DetailTab::ALL.len()
    }

    fn select(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.tab_count() {
            return Err(TabError::OutOfRange {
                index,
                count: self.tab_count(),
            });
        }
        self.selected = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_description() {
        let tabs = TabState::default();
        assert_eq!(tabs.selected(), 0);
        assert_eq!(tabs.active(), DetailTab::Description);
    }

    #[test]
    fn test_select() {
        let mut tabs = TabState::default();
        tabs.select(DetailTab::Map.index()).unwrap();
        assert_eq!(tabs.active(), DetailTab::Map);
        assert_eq!(tabs.active().label(), "Map");
    }

    #[test]
    fn test_out_of_range_leaves_selection() {
        let mut tabs = TabState::default();
        tabs.select(1).unwrap();
        assert_eq!(
            tabs.select(3),
            Err(TabError::OutOfRange { index: 3, count: 3 })
        );
        assert_eq!(tabs.active(), DetailTab::FloorPlan);
    }
}
