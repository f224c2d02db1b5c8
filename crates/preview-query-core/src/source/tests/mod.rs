mod query_source_tests;
