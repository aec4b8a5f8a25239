/// Abstraction over a selected file.
///
/// The browser build implements this for `gloo_file::File`; tests use an
/// in-memory fake. The wizard never reads file contents, it only needs the
/// size (for the upload limit) and a display name fallback.
pub trait FileHandle {
    fn byte_size(&self) -> u64;
    fn file_name(&self) -> String;
}
