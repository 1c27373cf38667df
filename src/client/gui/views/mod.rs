pub mod pad_view;
pub mod status;
