pub mod summary_presenter;
