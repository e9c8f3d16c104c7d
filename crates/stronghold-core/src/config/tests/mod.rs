mod host_config_tests;
