pub mod parser;
pub mod dataset;
pub mod stats;
pub mod timeline;
pub mod activity;
pub mod words;
pub mod emoji;
pub mod report;
