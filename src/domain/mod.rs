//! Domain logic - pure version rules independent of git, terminal or network

pub mod category;
pub mod prerelease;
pub mod release;
pub mod suggest;
pub mod version;

pub use category::VersionCategory;
pub use prerelease::PrereleaseCounter;
pub use release::{RecordSet, ReleaseRecord, ReleaseSet, ReleaseSetResolver};
pub use suggest::{NextVersionSuggester, PrereleaseConfig};
pub use version::{parse_tag, VersionBump};
