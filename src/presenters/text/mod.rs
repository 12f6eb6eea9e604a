pub mod text_presenter;
