use crate::map::MapHandle;
use crate::models::DistrictInfo;
use crate::theme::TileTheme;

/// Top-level UI state of the market page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    pub selected_district_id: Option<String>,
    pub expanded: bool,
    pub show_calculator: bool,
    pub layer_menu_open: bool,
}

impl ShellState {
    /// Map or label click: select and expand the statistics panel.
    pub fn select_district(&mut self, id: &str) {
        self.selected_district_id = Some(id.to_string());
        self.expanded = true;
        self.show_calculator = false;
    }

    /// District picker inside the calculator. Panel state is left alone.
    pub fn change_calculator_district(&mut self, id: &str) {
        self.selected_district_id = Some(id.to_string());
    }

    pub fn toggle_expand(&mut self) {
        if self.selected_district_id.is_some() {
            self.expanded = !self.expanded;
        }
    }

    pub fn open_calculator(&mut self) {
        if self.selected_district_id.is_some() {
            self.show_calculator = true;
        }
    }

    pub fn close_calculator(&mut self) {
        self.show_calculator = false;
    }

    pub fn clear_selection(&mut self) {
        self.selected_district_id = None;
        self.expanded = false;
        self.show_calculator = false;
    }

    pub fn toggle_layer_menu(&mut self) {
        self.layer_menu_open = !self.layer_menu_open;
    }

    pub fn close_layer_menu(&mut self) {
        self.layer_menu_open = false;
    }

    /// Reset control: default view for the size class and no selection.
    pub fn reset_map<M: MapHandle>(&mut self, map: &mut M) {
        map.reset_view();
        self.clear_selection();
    }

    /// Layer menu pick. The selection is left as it is.
    pub fn switch_theme<M: MapHandle>(&mut self, map: &mut M, theme: TileTheme) {
        map.set_theme(theme);
        self.close_layer_menu();
    }

    pub fn selected_district<'a>(&self, districts: &'a [DistrictInfo]) -> Option<&'a DistrictInfo> {
        let id = self.selected_district_id.as_deref()?;
        districts.iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallbacks;
    use crate::map::MapState;
    use crate::viewport::SizeClass;

    #[test]
    fn test_reset_map_restores_view_and_clears_selection() {
        let mut map = MapState::new(1280.0);
        map.zoom_in();
        map.pan_by(-60.0, 25.0);
        let mut shell = ShellState::default();
        shell.select_district("frogner");
        shell.open_calculator();

        shell.reset_map(&mut map);

        assert_eq!(map.viewport, SizeClass::Desktop.default_viewport());
        assert_eq!(shell.selected_district_id, None);
        assert!(!shell.expanded);
        assert!(!shell.show_calculator);
    }

    #[test]
    fn test_switch_theme_keeps_selection() {
        let mut map = MapState::new(1280.0);
        let mut shell = ShellState::default();
        shell.select_district("sagene");
        shell.toggle_layer_menu();

        for theme in TileTheme::ALL {
            shell.switch_theme(&mut map, theme);
            assert_eq!(map.theme, theme);
            assert_eq!(shell.selected_district_id.as_deref(), Some("sagene"));
            assert!(shell.expanded);
        }
        assert!(!shell.layer_menu_open);
    }

    #[test]
    fn test_select_expands_and_closes_calculator() {
        let mut shell = ShellState {
            show_calculator: true,
            ..Default::default()
        };
        shell.select_district("sagene");
        assert_eq!(shell.selected_district_id.as_deref(), Some("sagene"));
        assert!(shell.expanded);
        assert!(!shell.show_calculator);
    }

    #[test]
    fn test_calculator_district_change_keeps_calculator_open() {
        let mut shell = ShellState::default();
        shell.select_district("sagene");
        shell.open_calculator();
        shell.change_calculator_district("frogner");
        assert_eq!(shell.selected_district_id.as_deref(), Some("frogner"));
        assert!(shell.show_calculator);
    }

    #[test]
    fn test_calculator_needs_selection() {
        let mut shell = ShellState::default();
        shell.open_calculator();
        assert!(!shell.show_calculator);
        shell.toggle_expand();
        assert!(!shell.expanded);
    }

    #[test]
    fn test_clear_selection_resets_panels() {
        let mut shell = ShellState::default();
        shell.select_district("sagene");
        shell.open_calculator();
        shell.clear_selection();
        assert_eq!(shell, ShellState::default());
    }

    #[test]
    fn test_layer_menu_toggle() {
        let mut shell = ShellState::default();
        shell.toggle_layer_menu();
        assert!(shell.layer_menu_open);
        shell.toggle_layer_menu();
        assert!(!shell.layer_menu_open);
        shell.toggle_layer_menu();
        shell.close_layer_menu();
        assert!(!shell.layer_menu_open);
    }

    #[test]
    fn test_selected_district_lookup() {
        let districts = fallbacks::districts();
        let mut shell = ShellState::default();
        assert!(shell.selected_district(&districts).is_none());
        let id = districts[2].id.clone();
        shell.select_district(&id);
        assert_eq!(shell.selected_district(&districts).map(|d| &d.id), Some(&id));
        shell.select_district("atlantis");
        assert!(shell.selected_district(&districts).is_none());
    }
}
