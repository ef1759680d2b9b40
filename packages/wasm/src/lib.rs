use pagecraft_compiler_react::CompileOptions;
use pagecraft_editor::{EditSession, EditorError, Recorder};
use pagecraft_model::{CatalogItem, LayoutKind, NodeId, StyleProps};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(err: EditorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn options(semantic: bool) -> CompileOptions {
    CompileOptions {
        semantic,
        ..CompileOptions::default()
    }
}

/// Editor handle owned by the browser UI.
///
/// The host keeps the real clipboard and toast UI: copied markup is returned
/// from `copyCode`, and notifications queue up until `takeNotifications`.
#[wasm_bindgen]
pub struct PageEditor {
    session: EditSession,
    notifications: Recorder,
}

#[wasm_bindgen]
impl PageEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(session_id: &str) -> PageEditor {
        let notifications = Recorder::new();
        let session = EditSession::new(session_id).with_notifications(notifications.clone());
        Self {
            session,
            notifications,
        }
    }

    /// Append a catalog item; returns the new node id
    pub fn add(&mut self, category: &str, name: &str, template: &str) -> String {
        self.session
            .add(CatalogItem::new(name, template), category)
            .to_string()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.session.remove(&NodeId::from(id)).is_applied()
    }

    /// Commit a drag; `over` is undefined when the drop missed every target
    pub fn reorder(&mut self, active: &str, over: Option<String>) -> bool {
        let over = over.map(NodeId::from);
        self.session
            .reorder(&NodeId::from(active), over.as_ref())
            .is_applied()
    }

    pub fn select(&mut self, id: &str) -> bool {
        self.session.select(&NodeId::from(id)).is_applied()
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    #[wasm_bindgen(js_name = toggleMultiSelect)]
    pub fn toggle_multi_select(&mut self, id: &str) {
        self.session.toggle_multi_select(&NodeId::from(id));
    }

    /// Group the multi-selection; returns the container id, or undefined
    pub fn group(&mut self, layout: &str) -> Result<Option<String>, JsValue> {
        self.group_with(layout).map_err(to_js)
    }

    pub fn ungroup(&mut self, id: &str) -> bool {
        self.session.ungroup(&NodeId::from(id)).is_applied()
    }

    #[wasm_bindgen(js_name = ungroupSelected)]
    pub fn ungroup_selected(&mut self) -> bool {
        self.session
            .ungroup_selected()
            .map(|result| result.is_applied())
            .unwrap_or(false)
    }

    /// Merge a JSON style patch into a node's props
    #[wasm_bindgen(js_name = updateProps)]
    pub fn update_props(&mut self, id: &str, patch: &str) -> Result<bool, JsValue> {
        self.update_props_json(id, patch).map_err(to_js)
    }

    #[wasm_bindgen(js_name = documentJson)]
    pub fn document_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.document())
            .map_err(|e| to_js(EditorError::from(e)))
    }

    #[wasm_bindgen(js_name = selectionJson)]
    pub fn selection_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.selection())
            .map_err(|e| to_js(EditorError::from(e)))
    }

    pub fn generate(&self, semantic: bool) -> String {
        self.session.generate(options(semantic))
    }

    #[wasm_bindgen(js_name = copyCode)]
    pub fn copy_code(&mut self, semantic: bool) -> String {
        self.session.copy_code(options(semantic))
    }

    #[wasm_bindgen(js_name = takeNotifications)]
    pub fn take_notifications(&self) -> Vec<String> {
        self.notifications.take()
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> u64 {
        self.session.version()
    }
}

impl PageEditor {
    fn group_with(&mut self, layout: &str) -> Result<Option<String>, EditorError> {
        let layout: LayoutKind = layout.parse()?;
        Ok(self.session.group(layout).map(|id| id.to_string()))
    }

    fn update_props_json(&mut self, id: &str, patch: &str) -> Result<bool, EditorError> {
        let patch: StyleProps = serde_json::from_str(patch)?;
        Ok(self
            .session
            .update_props(&NodeId::from(id), patch)
            .is_applied())
    }
}
