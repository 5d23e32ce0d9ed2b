use contracts::domain::a001_product::{FilterSelection, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Compact,
}

#[derive(Clone, Debug)]
pub struct CatalogListState {
    // filters
    pub selection: FilterSelection,
    pub expanded_category: Option<String>,
    pub manufacturer_search: String,

    // display
    pub view_mode: ViewMode,

    // pagination
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            selection: FilterSelection::default(),
            expanded_category: None,
            manufacturer_search: String::new(),
            view_mode: ViewMode::Grid,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogListState {
    /// Производители — мультивыбор чекбоксами; смена выбора сбрасывает
    /// выбранную категорию и тип.
    pub fn toggle_manufacturer(&mut self, name: &str) {
        if let Some(pos) = self
            .selection
            .manufacturers
            .iter()
            .position(|m| m == name)
        {
            self.selection.manufacturers.remove(pos);
        } else {
            self.selection.manufacturers.push(name.to_string());
        }
        self.selection.categories.clear();
        self.selection.types.clear();
        self.expanded_category = None;
        self.page = 1;
    }

    /// Категория — одиночный выбор кнопкой: повторный клик снимает выбор,
    /// клик по другой категории заменяет его. Выбор типа сбрасывается.
    pub fn click_category(&mut self, name: &str, has_types: bool) {
        if has_types {
            self.expanded_category = if self.expanded_category.as_deref() == Some(name) {
                None
            } else {
                Some(name.to_string())
            };
        }
        if self.selection.categories.iter().any(|c| c == name) {
            self.selection.categories.clear();
        } else {
            self.selection.categories = vec![name.to_string()];
        }
        self.selection.types.clear();
        self.page = 1;
    }

    /// Тип — такой же одиночный выбор, как категория.
    pub fn click_type(&mut self, name: &str) {
        if self.selection.types.iter().any(|t| t == name) {
            self.selection.types.clear();
        } else {
            self.selection.types = vec![name.to_string()];
        }
        self.page = 1;
    }

    pub fn set_query(&mut self, query: String) {
        if self.selection.query != query {
            self.selection.query = query;
            self.page = 1;
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.selection.clear();
        self.expanded_category = None;
        self.page = 1;
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manufacturer_toggle_clears_category_and_type() {
        let mut state = CatalogListState::default();
        state.click_category("Свет", true);
        state.click_type("Настольные");
        state.toggle_manufacturer("Эра");
        assert_eq!(state.selection.manufacturers, ["Эра"]);
        assert!(state.selection.categories.is_empty());
        assert!(state.selection.types.is_empty());
        assert_eq!(state.expanded_category, None);
    }

    #[test]
    fn manufacturer_is_multi_select() {
        let mut state = CatalogListState::default();
        state.toggle_manufacturer("Эра");
        state.toggle_manufacturer("Artline");
        assert_eq!(state.selection.manufacturers, ["Эра", "Artline"]);
        state.toggle_manufacturer("Эра");
        assert_eq!(state.selection.manufacturers, ["Artline"]);
    }

    #[test]
    fn category_is_single_select_replace_on_click() {
        let mut state = CatalogListState::default();
        state.click_category("Свет", true);
        state.click_type("Настольные");
        state.click_category("Посуда", false);
        assert_eq!(state.selection.categories, ["Посуда"]);
        assert!(state.selection.types.is_empty());

        // повторный клик снимает выбор
        state.click_category("Посуда", false);
        assert!(state.selection.categories.is_empty());
    }

    #[test]
    fn any_filter_change_resets_the_page() {
        let mut state = CatalogListState {
            page: 4,
            ..CatalogListState::default()
        };
        state.click_type("Настольные");
        assert_eq!(state.page, 1);

        state.page = 3;
        state.set_query("лампа".to_string());
        assert_eq!(state.page, 1);

        state.page = 2;
        state.set_page_size(96);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn unchanged_query_keeps_the_page() {
        let mut state = CatalogListState::default();
        state.set_query("лампа".to_string());
        state.page = 3;
        state.set_query("лампа".to_string());
        assert_eq!(state.page, 3);
    }
}
