pub(crate) mod diagnostics;
pub(crate) mod walker;
