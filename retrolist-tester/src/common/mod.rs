pub mod util;

pub use util::{display_query_id, resolve_output_dir, split_csv, title_case};

#[cfg(test)]
pub use util::temp_path;
