mod restore_file;
