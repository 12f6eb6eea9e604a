pub mod report_presenter;
