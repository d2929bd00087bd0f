pub(crate) mod read_file;
pub(crate) mod search_files;
pub(crate) mod write_file;
