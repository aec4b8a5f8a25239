//! Component state for the upload wizard.
//!
//! The wizard logic itself (draft, steps, validation, assembly) lives in
//! `common::wizard`; this struct adds the browser-side bookkeeping: fetched
//! reference data, input buffers, thumbnails, DOM refs, the dirty flag and
//! the cancellation token for the in-flight submission.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use common::model::Category;
use common::wizard::WizardController;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use super::webfile::WebFile;

/// State container for the `UploadWizardComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct UploadWizardComponent {
    /// Draft, step index and validation policy for this session.
    pub wizard: WizardController<WebFile>,

    /// Categories fetched at mount; read-only reference data.
    pub categories: Vec<Category>,

    /// Uncommitted technology-tag input.
    pub tech_input: String,

    /// Active description tab: either `"editor"` or `"preview"`.
    pub description_tab: String,

    /// One generated id per staged image, index-aligned with the draft's
    /// image list. Keys thumbnail reads so a late read cannot attach to the
    /// wrong slot after a removal.
    pub image_ids: Vec<String>,

    /// Base64 data URLs of staged images, keyed by generated image id.
    pub thumbnails: HashMap<String, String>,

    /// True while the submission request is in flight (disables the button).
    pub submitting: bool,

    /// Blocking message of the last failed forward transition.
    pub blocked: Option<String>,

    /// Text shown in the error modal, if open.
    pub error: Option<String>,

    /// Reference to the hidden file input of the images step.
    pub file_input_ref: NodeRef,

    /// Reference to the error modal container.
    pub error_dialog_ref: NodeRef,

    /// MD5 of the draft snapshot at mount (or after edit pre-population).
    pub baseline_md5: String,

    /// Tripped in `destroy` so a submission response landing after teardown
    /// is dropped instead of driving a dead component.
    pub cancelled: Rc<Cell<bool>>,

    /// Guard to avoid running first-render loading more than once.
    pub loaded: bool,
}

impl UploadWizardComponent {
    pub fn new() -> Self {
        let wizard: WizardController<WebFile> = WizardController::new();
        let baseline_md5 = compute_md5(&wizard.draft().snapshot());
        Self {
            wizard,
            categories: Vec::new(),
            tech_input: String::new(),
            description_tab: "editor".to_string(),
            image_ids: Vec::new(),
            thumbnails: HashMap::new(),
            submitting: false,
            blocked: None,
            error: None,
            file_input_ref: Default::default(),
            error_dialog_ref: Default::default(),
            baseline_md5,
            cancelled: Rc::new(Cell::new(false)),
            loaded: false,
        }
    }

    /// Re-bases dirty tracking on the current draft (after pre-population or
    /// a successful submit).
    pub fn rebase_dirty_tracking(&mut self) {
        self.baseline_md5 = compute_md5(&self.wizard.draft().snapshot());
        self.sync_dirty_flag();
    }

    /// Publishes the global `app_dirty` flag the shell's before-unload
    /// handler reads, based on whether the draft differs from the baseline.
    pub fn sync_dirty_flag(&self) {
        if let Some(window) = web_sys::window() {
            let dirty = compute_md5(&self.wizard.draft().snapshot()) != self.baseline_md5;
            let _ = Reflect::set(
                &window,
                &JsValue::from_str("app_dirty"),
                &JsValue::from_bool(dirty),
            );
        }
    }
}

/// Hex MD5 digest, used only for dirty tracking.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}
