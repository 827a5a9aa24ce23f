mod op_map_tests;
