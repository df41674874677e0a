mod add_files;
mod remove_files;
