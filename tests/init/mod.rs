mod init_twice_fails;
