pub(crate) mod ellipse;
pub(crate) mod outline;
pub(crate) mod rect;
