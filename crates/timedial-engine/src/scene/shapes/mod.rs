pub(crate) mod rounded_rect;
pub(crate) mod text;
