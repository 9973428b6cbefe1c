/// Segment plan files: parsing, discovery, defaults and saving.
mod file;
mod parse;

pub use file::{
    PlanSource, candidate_paths, find_segments_file, load_or_default, save_segments,
    write_defaults,
};
pub use parse::parse_duration;
