//! Archive extraction
//!
//! Implements ArchiveExtractor by shelling out to an archive tool.

mod tar;

pub use tar::TarExtractor;
