pub mod api;
pub mod patch_field;

pub use patch_field::PatchField;
