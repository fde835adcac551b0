pub mod calibrator;
pub mod field_reader;
pub mod report;
pub mod sample_loader;

pub use calibrator::Calibrator;
pub use field_reader::FieldReader;
pub use report::centroid_report;
pub use sample_loader::{find_sample_dirs, load_image, load_mapping};
