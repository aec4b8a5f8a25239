use common::wizard::FileHandle;

/// Browser file selected through the hidden input, bound to the wizard core
/// through the `FileHandle` trait.
#[derive(Clone)]
pub struct WebFile(pub web_sys::File);

impl FileHandle for WebFile {
    fn byte_size(&self) -> u64 {
        self.0.size() as u64
    }

    fn file_name(&self) -> String {
        self.0.name()
    }
}
