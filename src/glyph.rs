pub(crate) mod cache;
pub(crate) mod font;
pub(crate) mod mono;
pub(crate) mod source;
