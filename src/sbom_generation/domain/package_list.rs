/// Raw output of a package listing command
///
/// The content is never parsed; it is handed to the conversion tool as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageList(String);

impl PackageList {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
