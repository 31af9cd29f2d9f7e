//! Active selection and edit state for one playground session.
//!
//! A [`Session`] owns the custom layout store for its lifetime. It tracks
//! the selected family and preset, the working copy of the markup and
//! stylesheet shown in the preview, and the two code fields. Writes reach
//! the store only while the "Custom Layout" entry is selected; edits to a
//! built-in preset change the working copy and nothing else.

use tracing::{debug, info};

use crate::catalog::{properties, PresetCatalog};
use crate::editor::{CodeField, CodeLanguage};
use crate::models::{CustomLayout, LayoutFamily, PresetSelection};
use crate::store::{CustomLayoutStore, StoreError};

/// Content to show in the live preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewContent {
    /// Page title
    pub title: String,
    /// Structural HTML
    pub markup: String,
    /// Presentation CSS
    pub stylesheet: String,
}

/// In-memory playground state.
#[derive(Debug)]
pub struct Session {
    catalog: PresetCatalog,
    store: CustomLayoutStore,
    family: LayoutFamily,
    selection: Option<PresetSelection>,
    markup: String,
    stylesheet: String,
    html_field: CodeField,
    css_field: CodeField,
    show_layouts: bool,
    selected_property: Option<String>,
    show_html_code: bool,
    show_css_code: bool,
}

impl Session {
    /// Starts a session over `store` with the built-in catalog.
    ///
    /// The store is loaded immediately; a fresh session starts on the flex
    /// family with no preset selected.
    #[must_use]
    pub fn new(store: CustomLayoutStore) -> Self {
        Self::with_catalog(store, PresetCatalog::builtin())
    }

    /// Starts a session with an explicit catalog.
    #[must_use]
    pub fn with_catalog(mut store: CustomLayoutStore, catalog: PresetCatalog) -> Self {
        store.load();
        Self {
            catalog,
            store,
            family: LayoutFamily::default(),
            selection: None,
            markup: String::new(),
            stylesheet: String::new(),
            html_field: CodeField::new(CodeLanguage::Html, ""),
            css_field: CodeField::new(CodeLanguage::Css, ""),
            show_layouts: false,
            selected_property: None,
            show_html_code: false,
            show_css_code: false,
        }
    }

    /// Ends the session, handing back the store.
    #[cfg(test)]
    pub(crate) fn into_store(self) -> CustomLayoutStore {
        self.store
    }

    /// Catalog the session selects from.
    #[must_use]
    pub const fn catalog(&self) -> PresetCatalog {
        self.catalog
    }

    /// Selected family.
    #[must_use]
    pub const fn family(&self) -> LayoutFamily {
        self.family
    }

    /// Selected preset, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&PresetSelection> {
        self.selection.as_ref()
    }

    /// Returns true while the "Custom Layout" entry is selected.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.selection.as_ref().is_some_and(PresetSelection::is_custom)
    }

    /// Working copy of the markup.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Working copy of the stylesheet.
    #[must_use]
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Code field for a language.
    #[must_use]
    pub const fn field(&self, language: CodeLanguage) -> &CodeField {
        match language {
            CodeLanguage::Html => &self.html_field,
            CodeLanguage::Css => &self.css_field,
        }
    }

    /// Mutable code field for a language.
    pub fn field_mut(&mut self, language: CodeLanguage) -> &mut CodeField {
        match language {
            CodeLanguage::Html => &mut self.html_field,
            CodeLanguage::Css => &mut self.css_field,
        }
    }

    /// Field currently in the Editing state, if any.
    #[must_use]
    pub fn editing_field(&self) -> Option<CodeLanguage> {
        [CodeLanguage::Html, CodeLanguage::Css]
            .into_iter()
            .find(|&language| self.field(language).is_editing())
    }

    /// Whether the preset list (instead of the property sidebar) is shown.
    #[must_use]
    pub const fn show_layouts(&self) -> bool {
        self.show_layouts
    }

    /// Selected sidebar property.
    #[must_use]
    pub fn selected_property(&self) -> Option<&str> {
        self.selected_property.as_deref()
    }

    /// Whether the HTML code of a built-in preset is expanded.
    #[must_use]
    pub const fn show_html_code(&self) -> bool {
        self.show_html_code
    }

    /// Whether the CSS code of a built-in preset is expanded.
    #[must_use]
    pub const fn show_css_code(&self) -> bool {
        self.show_css_code
    }

    /// Switches family. The preset selection and property reset.
    pub fn set_family(&mut self, family: LayoutFamily) {
        if family == self.family {
            return;
        }
        debug!("Family changed: {} -> {}", self.family, family);
        self.family = family;
        self.selected_property = None;
        self.clear_selection();
    }

    /// Selects a built-in preset or the custom entry and loads its content.
    ///
    /// A name missing from the catalog yields empty markup and stylesheet.
    pub fn select(&mut self, selection: PresetSelection) {
        debug!("Selected {} / {}", self.family, selection);
        self.selection = Some(selection);
        self.reload_content();
    }

    /// Selects by display name; "Custom Layout" selects the custom entry.
    pub fn select_name(&mut self, name: &str) {
        self.select(PresetSelection::from_name(name));
    }

    /// Drops the selection, leaving empty content.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.reload_content();
    }

    /// Shows or hides the preset list. Showing it clears the selected property.
    pub fn toggle_layouts(&mut self) {
        self.show_layouts = !self.show_layouts;
        if self.show_layouts {
            self.selected_property = None;
        }
    }

    /// Selects a sidebar property, or clears the selection with `None`.
    pub fn select_property(&mut self, property: Option<&str>) {
        self.selected_property = property.map(String::from);
    }

    /// Toggles the expanded HTML code of a built-in preset.
    pub fn toggle_html_code(&mut self) {
        self.show_html_code = !self.show_html_code;
    }

    /// Toggles the expanded CSS code of a built-in preset.
    pub fn toggle_css_code(&mut self) {
        self.show_css_code = !self.show_css_code;
    }

    /// Saves the field's edit buffer and applies the new value.
    ///
    /// Returns `Ok(false)` when the field was not editing. A store failure
    /// is returned after the working copy and the in-memory snapshot have
    /// already taken the new value.
    pub fn save_field(&mut self, language: CodeLanguage) -> Result<bool, StoreError> {
        match self.field_mut(language).save() {
            Some(value) => {
                self.apply(language, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Discards the field's edit buffer.
    pub fn cancel_field(&mut self, language: CodeLanguage) {
        self.field_mut(language).cancel();
    }

    /// Replaces the markup, persisting it when the custom entry is selected.
    pub fn commit_markup(&mut self, markup: impl Into<String>) -> Result<(), StoreError> {
        let markup = markup.into();
        self.html_field = CodeField::new(CodeLanguage::Html, markup.clone());
        self.apply(CodeLanguage::Html, markup)
    }

    /// Replaces the stylesheet, persisting it when the custom entry is selected.
    pub fn commit_stylesheet(&mut self, stylesheet: impl Into<String>) -> Result<(), StoreError> {
        let stylesheet = stylesheet.into();
        self.css_field = CodeField::new(CodeLanguage::Css, stylesheet.clone());
        self.apply(CodeLanguage::Css, stylesheet)
    }

    /// Persists both fields as the family's custom layout.
    ///
    /// Returns `Ok(false)` without writing unless the custom entry is selected.
    pub fn save_custom_layout(&mut self) -> Result<bool, StoreError> {
        if !self.is_custom() {
            return Ok(false);
        }
        let layout = CustomLayout::new(self.markup.clone(), self.stylesheet.clone());
        self.store.save_family(self.family, layout)?;
        info!("Saved custom {} layout", self.family);
        Ok(true)
    }

    /// Content for the live preview.
    ///
    /// The visual example of the selected property wins while the preset
    /// list is hidden and the property has one. Otherwise this is the working
    /// copy of the selected preset, whether or not the list is shown.
    /// `None` means neither applies.
    #[must_use]
    pub fn preview_content(&self) -> Option<PreviewContent> {
        if !self.show_layouts {
            if let Some(example) = self.selected_property.as_deref().and_then(properties::example) {
                return Some(PreviewContent {
                    title: example.property,
                    markup: example.markup,
                    stylesheet: example.stylesheet,
                });
            }
        }

        let selection = self.selection.as_ref()?;
        Some(PreviewContent {
            title: format!("{} - {}", self.family.display_name(), selection.name()),
            markup: self.markup.clone(),
            stylesheet: self.stylesheet.clone(),
        })
    }

    fn apply(&mut self, language: CodeLanguage, value: String) -> Result<(), StoreError> {
        let custom = self.is_custom();
        match language {
            CodeLanguage::Html => {
                self.markup.clone_from(&value);
                if custom {
                    self.store.save_markup(self.family, value)?;
                }
            }
            CodeLanguage::Css => {
                self.stylesheet.clone_from(&value);
                if custom {
                    self.store.save_stylesheet(self.family, value)?;
                }
            }
        }
        Ok(())
    }

    fn reload_content(&mut self) {
        let (markup, stylesheet) = match &self.selection {
            Some(PresetSelection::Custom) => {
                let layout = self.store.get(self.family);
                (layout.html.clone(), layout.css.clone())
            }
            Some(PresetSelection::Preset(name)) => self
                .catalog
                .get(self.family, name)
                .map(|preset| (preset.markup().to_string(), preset.stylesheet().to_string()))
                .unwrap_or_default(),
            None => (String::new(), String::new()),
        };

        self.html_field = CodeField::new(CodeLanguage::Html, markup.clone());
        self.css_field = CodeField::new(CodeLanguage::Css, stylesheet.clone());
        self.markup = markup;
        self.stylesheet = stylesheet;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditState;
    use crate::store::MemoryStorage;

    fn session() -> Session {
        Session::new(CustomLayoutStore::in_memory())
    }

    #[test]
    fn test_fresh_session_defaults() {
        let session = session();
        assert_eq!(session.family(), LayoutFamily::Flex);
        assert!(session.selection().is_none());
        assert!(!session.show_layouts());
        assert_eq!(session.markup(), "");
        assert!(session.preview_content().is_none());
    }

    #[test]
    fn test_select_preset_loads_trimmed_text() {
        let mut session = session();
        session.select_name("Card Layout");

        assert!(session.markup().starts_with("<div class=\"card-layout\">"));
        assert!(!session.markup().ends_with('\n'));
        assert_eq!(session.field(CodeLanguage::Html).value(), session.markup());
        assert!(session.stylesheet().starts_with(".card-layout"));
    }

    #[test]
    fn test_missing_preset_renders_empty() {
        let mut session = session();
        session.select_name("Nonexistent");
        assert_eq!(session.markup(), "");
        assert_eq!(session.stylesheet(), "");
    }

    #[test]
    fn test_preset_name_from_other_family_is_missing() {
        let mut session = session();
        session.set_family(LayoutFamily::Grid);
        session.select_name("Card Layout");
        assert_eq!(session.markup(), "");
    }

    #[test]
    fn test_family_change_resets_selection() {
        let mut session = session();
        session.select_name("Holy Grail");
        session.select_property(Some("flex-wrap"));
        session.set_family(LayoutFamily::Media);

        assert!(session.selection().is_none());
        assert!(session.selected_property().is_none());
        assert_eq!(session.markup(), "");
    }

    #[test]
    fn test_selection_change_remounts_fields() {
        let mut session = session();
        session.select_name("Holy Grail");
        session.field_mut(CodeLanguage::Html).begin_edit();
        session.select_name("Sticky Footer");
        assert_eq!(session.field(CodeLanguage::Html).state(), EditState::Viewing);
        assert!(session.editing_field().is_none());
    }

    #[test]
    fn test_editing_builtin_preset_does_not_touch_store() {
        let mut session = session();
        session.select_name("Centered Content");
        session.commit_markup("<p>mine</p>").unwrap();

        assert_eq!(session.markup(), "<p>mine</p>");
        let snapshot = session.into_store().into_snapshot();
        assert!(snapshot.flex.is_empty());
    }

    #[test]
    fn test_custom_save_field_persists() {
        let mut session = session();
        session.set_family(LayoutFamily::Grid);
        session.select(PresetSelection::Custom);

        let field = session.field_mut(CodeLanguage::Html);
        field.begin_edit();
        field.buffer_mut().unwrap().insert_str("<div>X</div>");
        assert!(session.save_field(CodeLanguage::Html).unwrap());
        assert!(!session.save_field(CodeLanguage::Html).unwrap());

        let snapshot = session.into_store().into_snapshot();
        assert_eq!(snapshot.grid.html, "<div>X</div>");
        assert!(snapshot.flex.is_empty());
        assert!(snapshot.media.is_empty());
    }

    #[test]
    fn test_cancel_field_keeps_value() {
        let mut session = session();
        session.select(PresetSelection::Custom);
        session.field_mut(CodeLanguage::Css).begin_edit();
        session
            .field_mut(CodeLanguage::Css)
            .buffer_mut()
            .unwrap()
            .insert_str("p{}");
        session.cancel_field(CodeLanguage::Css);

        assert_eq!(session.stylesheet(), "");
        assert!(session.into_store().into_snapshot().flex.is_empty());
    }

    #[test]
    fn test_custom_selection_loads_stored_layout() {
        let mut store = CustomLayoutStore::in_memory();
        store
            .save_family(LayoutFamily::Media, CustomLayout::new("<main/>", "main{}"))
            .unwrap();

        let mut session = Session::new(store);
        session.set_family(LayoutFamily::Media);
        session.select_name("Custom Layout");

        assert!(session.is_custom());
        assert_eq!(session.markup(), "<main/>");
        assert_eq!(session.stylesheet(), "main{}");
    }

    #[test]
    fn test_save_custom_layout_only_for_custom() {
        let mut session = session();
        session.select_name("Holy Grail");
        assert!(!session.save_custom_layout().unwrap());

        session.select(PresetSelection::Custom);
        session.commit_stylesheet("body{}").unwrap();
        assert!(session.save_custom_layout().unwrap());
        assert_eq!(session.into_store().into_snapshot().flex.css, "body{}");
    }

    #[test]
    fn test_store_failure_keeps_working_copy() {
        let mut session = Session::new(CustomLayoutStore::new(MemoryStorage::read_only()));
        session.select(PresetSelection::Custom);

        let result = session.commit_markup("<b>kept</b>");

        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert_eq!(session.markup(), "<b>kept</b>");
        assert_eq!(session.into_store().into_snapshot().flex.html, "<b>kept</b>");
    }

    #[test]
    fn test_toggle_layouts_clears_property() {
        let mut session = session();
        session.select_property(Some("flex-direction"));
        assert!(session.preview_content().is_some());

        session.toggle_layouts();
        assert!(session.show_layouts());
        assert!(session.selected_property().is_none());

        session.toggle_layouts();
        assert!(!session.show_layouts());
    }

    #[test]
    fn test_preview_content_for_layouts_and_properties() {
        let mut session = session();
        session.select_property(Some("flex-basis"));
        assert!(session.preview_content().is_none());

        session.toggle_layouts();
        assert!(session.preview_content().is_none());
        session.select_name("Holy Grail");
        let content = session.preview_content().unwrap();
        assert_eq!(content.title, "Flex - Holy Grail");
        assert_eq!(content.markup, session.markup());
    }

    #[test]
    fn test_selected_preset_survives_hiding_list() {
        let mut session = session();
        session.toggle_layouts();
        session.select_name("Card Layout");
        session.toggle_layouts();

        assert!(!session.show_layouts());
        let content = session.preview_content().expect("preset still previewed");
        assert_eq!(content.title, "Flex - Card Layout");
        assert!(content.markup.starts_with("<div class=\"card-layout\">"));
    }

    #[test]
    fn test_property_example_overrides_preset_while_list_hidden() {
        let mut session = session();
        session.select_name("Holy Grail");
        session.select_property(Some("flex-direction"));
        assert_eq!(session.preview_content().unwrap().title, "flex-direction");

        // No example: the selected preset is shown instead
        session.select_property(Some("flex-basis"));
        assert_eq!(session.preview_content().unwrap().title, "Flex - Holy Grail");
    }

    #[test]
    fn test_code_toggles() {
        let mut session = session();
        session.toggle_html_code();
        assert!(session.show_html_code());
        assert!(!session.show_css_code());
        session.toggle_css_code();
        session.toggle_html_code();
        assert!(!session.show_html_code());
        assert!(session.show_css_code());
    }
}
