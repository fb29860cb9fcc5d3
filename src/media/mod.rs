pub mod episode;
pub mod metadata;
pub mod mime;
pub mod scanner;
